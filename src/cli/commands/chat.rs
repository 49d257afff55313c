use crate::cli::parser::ChatAction;
use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;
use crate::ui::messages::{info, outcome};

pub fn handle(action: &ChatAction, cfg: &Config) -> AppResult<()> {
    let db = Database::open_with(&cfg.database, cfg.store_options())?;

    match action {
        ChatAction::Add { chat } => {
            let (_, result) = db.new_chat(*chat)?;
            outcome(&result);
        }
        ChatAction::List => {
            let chats = db.get_chats()?;
            if chats.is_empty() {
                info("No chats registered.");
            }
            for c in chats {
                println!("{}", c.telegram_chat_id);
            }
        }
    }
    Ok(())
}
