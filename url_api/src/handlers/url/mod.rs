pub mod delete;
pub mod save;
