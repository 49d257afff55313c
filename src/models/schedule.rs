use crate::db::update::{Changeset, Field};
use crate::utils::time::time_to_iso;
use chrono::NaiveTime;
use serde::Serialize;

pub const WEEKDAY_RANGE: std::ops::RangeInclusive<u8> = 1..=7;

pub fn is_valid_weekday(weekday: u8) -> bool {
    WEEKDAY_RANGE.contains(&weekday)
}

/// Recurring weekly slot. `weekday` is 1 (Monday) ..= 7 (Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub chat: i64,
    pub weekday: u8,
    pub sport: String,
    pub gym: i64,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleChanges {
    pub new_weekday: Option<u8>,
    pub new_sport: Option<String>,
    pub new_gym: Option<i64>,
    pub new_time: Option<NaiveTime>,
}

impl Changeset for ScheduleChanges {
    const PREFIX: &'static str = "new_";

    fn table(&self) -> &'static str {
        "schedule"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("new_weekday", "день недели", self.new_weekday),
            Field::new("new_sport", "тип", self.new_sport.clone()),
            Field::new("new_gym", "спортзал", self.new_gym),
            Field::new("new_time", "время", self.new_time.as_ref().map(time_to_iso)),
        ]
    }
}
