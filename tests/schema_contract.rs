use taskgroups::{group_info, BoardError, Task, TaskBoard, TaskGroup, TaskStatus, GROUP_INFO};

#[test]
fn every_group_has_display_text() {
    assert_eq!(GROUP_INFO.len(), TaskGroup::ALL.len());
    for group in TaskGroup::ALL {
        let info = group_info(group);
        assert!(!info.title.is_empty(), "{group} has no title");
        assert!(!info.description.is_empty(), "{group} has no description");
    }
}

#[test]
fn group_text_matches_the_lists() {
    let expected = [
        ("daily", "デイリータスク", "毎日定期的にやるタスク"),
        ("first", "ファーストタスク", "その日最初に取り組む最重要タスク"),
        ("todo", "TODOリスト", "長期的な視点で必要なタスクを記録する"),
        ("willdo", "WILLDOリスト", "確実に実行するタスクのみをまとめたリスト"),
    ];
    for (tag, title, description) in expected {
        let group: TaskGroup = tag.parse().unwrap();
        assert_eq!(group.info().title, title);
        assert_eq!(group.info().description, description);
    }
}

#[test]
fn task_json_uses_plain_tags() {
    let task = Task {
        id: 1,
        title: "x".to_string(),
        status: TaskStatus::InProgress,
        group: TaskGroup::WillDo,
    };
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 1, "title": "x", "status": "in-progress", "group": "willdo"})
    );
}

#[test]
fn board_rejects_archived_tasks_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(
        &path,
        r#"[{"id":1,"title":"x","status":"archived","group":"first"}]"#,
    )
    .unwrap();

    let mut board = TaskBoard::new();
    assert!(matches!(board.load_from_file(&path), Err(BoardError::Json(_))));
}

#[test]
fn board_accepts_done_task_in_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(
        &path,
        r#"[{"id":1,"title":"x","status":"done","group":"first"}]"#,
    )
    .unwrap();

    let mut board = TaskBoard::new();
    board.load_from_file(&path).unwrap();
    let first = board.tasks_in_group(TaskGroup::First);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].status, TaskStatus::Done);
}
