pub mod home;
pub mod row;
pub mod task;
pub mod tasks;
