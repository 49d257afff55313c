//! Row models and typed edit sets for every chat-scoped entity.

pub mod admin;
pub mod answer;
pub mod chat;
pub mod correction;
pub mod gym;
pub mod outcome;
pub mod schedule;

pub use admin::Admin;
pub use answer::AnswerAlternative;
pub use chat::{Chat, ChatSettings, ChatSettingsChanges};
pub use correction::{NewScheduleCorrection, ScheduleCorrection, ScheduleCorrectionChanges};
pub use gym::{Gym, GymChanges};
pub use outcome::{Mutation, Outcome, Status};
pub use schedule::{ScheduleChanges, ScheduleEntry};
