use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Group {
    pub id: i32,
    #[schema(example = "CS-21")]
    pub group_name: String,
    pub faculty_id: i32,
    pub course_year: i32,
}
