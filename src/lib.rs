pub mod config;
pub mod error;
pub mod group_info;
pub mod task;
pub mod task_board;

pub use error::{BoardError, Result};
pub use group_info::{group_info, GroupInfo, GROUP_INFO};
pub use task::{Task, TaskGroup, TaskStatus};
pub use task_board::TaskBoard;
