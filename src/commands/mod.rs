pub mod add;
pub mod delete;
pub mod done;
pub mod help;
pub mod list;
