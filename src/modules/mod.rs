pub mod attendance;
pub mod auth;
pub mod groups;
pub mod health;
pub mod schedules;
pub mod students;
pub mod subjects;
pub mod users;
