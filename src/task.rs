use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::BoardError;

/// A single unit of work, filed under one of the group lists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub status: TaskStatus,
    pub group: TaskGroup,
}

impl Task {
    /// New tasks always start in `todo`.
    pub fn new(id: u32, title: impl Into<String>, group: TaskGroup) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::Todo,
            group,
        }
    }

    pub fn transition_to(&mut self, next: TaskStatus) -> Result<(), BoardError> {
        if !self.status.can_transition_to(next) {
            return Err(BoardError::IllegalTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Workflow stage of a task.
///
/// # Transitions
/// - todo -> in-progress
/// - in-progress -> review
/// - review -> testing | in-progress
/// - testing -> done | in-progress
/// - done: terminal
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Testing,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Testing,
        TaskStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Review => "review",
            TaskStatus::Testing => "testing",
            TaskStatus::Done => "done",
        }
    }

    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        use TaskStatus::*;
        matches!(
            (self, next),
            (Todo, InProgress)
                | (InProgress, Review)
                | (Review, Testing)
                | (Review, InProgress)
                | (Testing, Done)
                | (Testing, InProgress)
        )
    }

    /// Forward successor; `None` once done.
    pub fn next(self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Todo => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Review),
            TaskStatus::Review => Some(TaskStatus::Testing),
            TaskStatus::Testing => Some(TaskStatus::Done),
            TaskStatus::Done => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BoardError::UnknownStatus(s.to_string()))
    }
}

/// The list a task is filed under.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskGroup {
    Daily,
    First,
    Todo,
    WillDo,
}

impl TaskGroup {
    pub const ALL: [TaskGroup; 4] = [
        TaskGroup::Daily,
        TaskGroup::First,
        TaskGroup::Todo,
        TaskGroup::WillDo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskGroup::Daily => "daily",
            TaskGroup::First => "first",
            TaskGroup::Todo => "todo",
            TaskGroup::WillDo => "willdo",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TaskGroup::Daily => 0,
            TaskGroup::First => 1,
            TaskGroup::Todo => 2,
            TaskGroup::WillDo => 3,
        }
    }

    /// Next list to the right, wrapping around.
    pub fn cycle_next(self) -> TaskGroup {
        TaskGroup::ALL[(self.index() + 1) % TaskGroup::ALL.len()]
    }
}

impl fmt::Display for TaskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskGroup {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| BoardError::UnknownGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn well_formed_task_is_accepted() {
        let json = r#"{"id":1,"title":"x","status":"done","group":"first"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(
            task,
            Task {
                id: 1,
                title: "x".to_string(),
                status: TaskStatus::Done,
                group: TaskGroup::First,
            }
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{"id":1,"title":"x","status":"archived","group":"first"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
        assert!(matches!(
            "archived".parse::<TaskStatus>(),
            Err(BoardError::UnknownStatus(s)) if s == "archived"
        ));
    }

    #[test]
    fn unknown_group_is_rejected() {
        assert!(matches!(
            "someday".parse::<TaskGroup>(),
            Err(BoardError::UnknownGroup(_))
        ));
    }

    #[test]
    fn serde_tags_match_display() {
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
        for group in TaskGroup::ALL {
            let json = serde_json::to_string(&group).unwrap();
            assert_eq!(json, format!("\"{}\"", group));
            assert_eq!(group.as_str().parse::<TaskGroup>().unwrap(), group);
        }
    }

    #[test]
    fn new_task_starts_as_todo() {
        let task = Task::new(3, "write report", TaskGroup::WillDo);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.group, TaskGroup::WillDo);
    }

    #[test]
    fn next_walks_forward_until_done() {
        let mut status = TaskStatus::Todo;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            assert!(status.can_transition_to(next));
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, TaskStatus::ALL.to_vec());
    }

    #[rstest]
    #[case::skip_review(TaskStatus::InProgress, TaskStatus::Testing)]
    #[case::straight_to_done(TaskStatus::Todo, TaskStatus::Done)]
    #[case::reopen_done(TaskStatus::Done, TaskStatus::Todo)]
    #[case::self_loop(TaskStatus::Review, TaskStatus::Review)]
    #[case::back_to_todo(TaskStatus::InProgress, TaskStatus::Todo)]
    fn illegal_transitions_are_refused(#[case] from: TaskStatus, #[case] to: TaskStatus) {
        let mut task = Task::new(1, "x", TaskGroup::Daily);
        task.status = from;
        let err = task.transition_to(to).unwrap_err();
        assert!(matches!(err, BoardError::IllegalTransition { .. }));
        assert_eq!(task.status, from);
    }

    #[rstest]
    #[case::review_rework(TaskStatus::Review)]
    #[case::testing_rework(TaskStatus::Testing)]
    fn rework_returns_to_in_progress(#[case] from: TaskStatus) {
        let mut task = Task::new(1, "x", TaskGroup::Daily);
        task.status = from;
        task.transition_to(TaskStatus::InProgress).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn cycle_next_wraps() {
        assert_eq!(TaskGroup::Daily.cycle_next(), TaskGroup::First);
        assert_eq!(TaskGroup::WillDo.cycle_next(), TaskGroup::Daily);
    }
}
