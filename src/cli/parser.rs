use clap::{Parser, Subcommand, ValueEnum};

/// Maintenance CLI for the gym-chat bot database
#[derive(Parser)]
#[command(
    name = "gymchat-store",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and maintain the SQLite store behind the gym-chat scheduling bot",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use an explicit configuration file
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Log at debug level
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database file and schema
    Init,

    /// Register or list chats
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },

    /// Print one kind of chat-owned rows as JSON
    Show {
        /// Telegram chat id
        #[arg(allow_hyphen_values = true)]
        chat: i64,

        #[arg(value_enum)]
        entity: Entity,
    },

    /// List tables with their columns
    Tables,

    /// Delete every row from every table
    Clear {
        #[arg(long = "yes", help = "Confirm that all data should be deleted")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ChatAction {
    /// Register a chat (creates its settings row too)
    Add {
        #[arg(allow_hyphen_values = true)]
        chat: i64,
    },

    /// List registered chats
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Settings,
    Gyms,
    Schedule,
    Corrections,
    Admins,
    Answers,
}
