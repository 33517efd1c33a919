use thiserror::Error;

use crate::task::TaskStatus;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("unknown task status: {0}")]
    UnknownStatus(String),

    #[error("unknown task group: {0}")]
    UnknownGroup(String),

    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("task not found: #{0}")]
    TaskNotFound(u32),

    #[error("duplicate task id in board file: #{0}")]
    DuplicateId(u32),

    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition { from: TaskStatus, to: TaskStatus },

    #[error("no task ids left after #{0}")]
    IdExhausted(u32),

    #[error("task #{0} is already done")]
    AlreadyDone(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
