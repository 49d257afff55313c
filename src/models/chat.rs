use crate::db::update::{Changeset, Field};
use serde::Serialize;

/// A Telegram group; its id comes from Telegram, not from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chat {
    pub telegram_chat_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatSettings {
    pub chat: i64,
    pub chat_gpt: bool,
    pub welcome_meme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSettingsChanges {
    pub chat_gpt: Option<bool>,
    pub welcome_meme: Option<String>,
}

impl Changeset for ChatSettingsChanges {
    fn table(&self) -> &'static str {
        "chat_settings"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("chat_gpt", "ChatGPT", self.chat_gpt),
            Field::new("welcome_meme", "приветственный мем", self.welcome_meme.clone()),
        ]
    }
}
