//! Todo Core
//!
//! Platform-independent todo list model shared by the Leptos frontend.

mod config;
mod error;
mod list;
mod models;
mod storage;


pub use config::TodoConfig;
pub use error::{TodoError, TodoResult};
pub use list::TodoList;
pub use models::Item;
pub use storage::{load_todos, save_todos, MemoryStorage, TodoStorage};
