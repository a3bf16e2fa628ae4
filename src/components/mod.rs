pub mod header;
pub mod task_item;
pub mod task_list;
pub mod todo_input;
