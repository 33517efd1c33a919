//! Display text for each task group.

use crate::task::TaskGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupInfo {
    pub title: &'static str,
    pub description: &'static str,
}

const DAILY: GroupInfo = GroupInfo {
    title: "デイリータスク",
    description: "毎日定期的にやるタスク",
};

const FIRST: GroupInfo = GroupInfo {
    title: "ファーストタスク",
    description: "その日最初に取り組む最重要タスク",
};

const TODO: GroupInfo = GroupInfo {
    title: "TODOリスト",
    description: "長期的な視点で必要なタスクを記録する",
};

const WILLDO: GroupInfo = GroupInfo {
    title: "WILLDOリスト",
    description: "確実に実行するタスクのみをまとめたリスト",
};

/// Every group with its display text, in board order.
pub const GROUP_INFO: [(TaskGroup, GroupInfo); 4] = [
    (TaskGroup::Daily, DAILY),
    (TaskGroup::First, FIRST),
    (TaskGroup::Todo, TODO),
    (TaskGroup::WillDo, WILLDO),
];

impl TaskGroup {
    pub fn info(self) -> &'static GroupInfo {
        match self {
            TaskGroup::Daily => &DAILY,
            TaskGroup::First => &FIRST,
            TaskGroup::Todo => &TODO,
            TaskGroup::WillDo => &WILLDO,
        }
    }
}

pub fn group_info(group: TaskGroup) -> &'static GroupInfo {
    group.info()
}
