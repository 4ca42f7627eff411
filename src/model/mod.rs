pub mod task;
pub mod task_list;
pub mod filter;
pub mod store;
pub mod config;

pub use task::*;
pub use task_list::*;
pub use filter::*;
pub use store::*;
pub use config::*;
