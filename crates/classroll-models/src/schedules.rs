//! Timetable entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A subject taught to a group in a time slot.
///
/// `group_id` is null for entries whose group was removed; `group_name` then
/// reads "No Group".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleEntry {
    pub id: i32,
    pub subject_name: String,
    #[schema(example = "Mon 09:00-10:30")]
    pub time_slot: String,
    pub group_id: Option<i32>,
    pub group_name: String,
}
