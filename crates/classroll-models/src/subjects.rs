use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: i32,
    #[schema(example = "Databases")]
    pub subject_name: String,
    #[schema(example = "CS204")]
    pub subject_code: String,
    pub credits: i32,
}
