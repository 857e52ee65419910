mod data;
mod engine;
mod file_storage;
mod filter;
mod list;
mod mem_storage;
mod storage;

pub use data::{Task, TaskId};
pub use engine::{new, Tasklist};
pub use file_storage::FileStorage;
pub use filter::Filter;
pub use list::TaskList;
pub use mem_storage::MemStorage;
pub use storage::Storage;
