use crate::db::update::{Changeset, Field};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gym {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub chat: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GymChanges {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl Changeset for GymChanges {
    fn table(&self) -> &'static str {
        "gym"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("name", "имя", self.name.clone()),
            Field::new("address", "адрес", self.address.clone()),
        ]
    }
}
