use crate::db::update::{Changeset, Field};
use crate::utils::time::{date_to_iso, time_to_iso};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One-off override of a recurring slot. `old_*` describe the occurrence
/// being replaced, `new_*` the replacement; each is independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCorrection {
    pub id: i64,
    pub chat: i64,
    /// Epoch milliseconds.
    pub date_created: i64,
    pub correction_type: String,
    pub old_date: Option<NaiveDate>,
    pub old_time: Option<NaiveTime>,
    pub old_gym: Option<i64>,
    pub new_date: Option<NaiveDate>,
    pub new_time: Option<NaiveTime>,
    pub new_gym: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewScheduleCorrection {
    pub correction_type: String,
    pub old_date: Option<NaiveDate>,
    pub old_time: Option<NaiveTime>,
    pub old_gym: Option<i64>,
    pub new_date: Option<NaiveDate>,
    pub new_time: Option<NaiveTime>,
    pub new_gym: Option<i64>,
}

impl NewScheduleCorrection {
    pub fn new(correction_type: impl Into<String>) -> Self {
        Self {
            correction_type: correction_type.into(),
            ..Default::default()
        }
    }
}

/// Field names follow the `new_<column>` convention, so the replacement
/// date of a correction is `new_new_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleCorrectionChanges {
    pub new_correction_type: Option<String>,
    pub new_old_date: Option<NaiveDate>,
    pub new_old_time: Option<NaiveTime>,
    pub new_old_gym: Option<i64>,
    pub new_new_date: Option<NaiveDate>,
    pub new_new_time: Option<NaiveTime>,
    pub new_new_gym: Option<i64>,
}

impl Changeset for ScheduleCorrectionChanges {
    const PREFIX: &'static str = "new_";

    fn table(&self) -> &'static str {
        "schedule_correction"
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new(
                "new_correction_type",
                "тип поправки",
                self.new_correction_type.clone(),
            ),
            Field::new("new_old_date", "старая дата", self.new_old_date.as_ref().map(date_to_iso)),
            Field::new("new_old_time", "старое время", self.new_old_time.as_ref().map(time_to_iso)),
            Field::new("new_old_gym", "старый спортзал", self.new_old_gym),
            Field::new("new_new_date", "новая дата", self.new_new_date.as_ref().map(date_to_iso)),
            Field::new("new_new_time", "новое время", self.new_new_time.as_ref().map(time_to_iso)),
            Field::new("new_new_gym", "новый спортзал", self.new_new_gym),
        ]
    }
}
