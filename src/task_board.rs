use crate::error::{BoardError, Result};
use crate::task::{Task, TaskGroup, TaskStatus};
use std::{collections::HashSet, fs, path::Path};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
    pub selected_group: usize, // Index into TaskGroup::ALL
    pub selected_task: usize,  // Index within the selected group's list
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_group: 0,
            selected_task: 0,
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(&self.tasks)?)?;
        info!(path = %path.display(), tasks = self.tasks.len(), "saved board");
        Ok(())
    }

    /// Replaces the current tasks with the file's contents. A missing file
    /// leaves the board empty.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!(path = %path.display(), "no board file, starting empty");
            self.tasks.clear();
            self.selected_task = 0;
            return Ok(());
        }
        let data = fs::read_to_string(path)?;
        let tasks: Vec<Task> = serde_json::from_str(&data)?;

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(BoardError::DuplicateId(task.id));
            }
        }

        info!(path = %path.display(), tasks = tasks.len(), "loaded board");
        self.tasks = tasks;
        self.selected_task = 0;
        Ok(())
    }

    pub fn add_task(&mut self, title: &str, group: TaskGroup) -> Result<u32> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let highest = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        let id = highest
            .checked_add(1)
            .ok_or(BoardError::IdExhausted(highest))?;
        self.tasks.push(Task::new(id, title, group));
        debug!(id, %group, "added task");
        Ok(id)
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    /// Moves a task one step forward through the status workflow.
    pub fn advance_task(&mut self, id: u32) -> Result<TaskStatus> {
        let task = self.get_mut(id)?;
        let next = task.status.next().ok_or(BoardError::AlreadyDone(id))?;
        task.transition_to(next)?;
        debug!(id, status = %next, "advanced task");
        Ok(next)
    }

    pub fn set_status(&mut self, id: u32, status: TaskStatus) -> Result<()> {
        self.get_mut(id)?.transition_to(status)
    }

    pub fn move_task(&mut self, id: u32, group: TaskGroup) -> Result<()> {
        let task = self.get_mut(id)?;
        task.group = group;
        debug!(id, %group, "moved task");
        self.clamp_selection();
        Ok(())
    }

    pub fn remove_task(&mut self, id: u32) -> Result<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(BoardError::TaskNotFound(id))?;
        let task = self.tasks.remove(pos);
        self.clamp_selection();
        Ok(task)
    }

    pub fn tasks_in_group(&self, group: TaskGroup) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.group == group).collect()
    }

    pub fn selected_group(&self) -> TaskGroup {
        TaskGroup::ALL[self.selected_group.min(TaskGroup::ALL.len() - 1)]
    }

    pub fn selected_task_id(&self) -> Option<u32> {
        self.tasks_in_group(self.selected_group())
            .get(self.selected_task)
            .map(|t| t.id)
    }

    pub fn select_next_group(&mut self) {
        if self.selected_group < TaskGroup::ALL.len() - 1 {
            self.selected_group += 1;
            self.clamp_selection();
        }
    }

    pub fn select_previous_group(&mut self) {
        if self.selected_group > 0 {
            self.selected_group -= 1;
            self.clamp_selection();
        }
    }

    pub fn select_next_task(&mut self) {
        let count = self.tasks_in_group(self.selected_group()).len();
        if self.selected_task + 1 < count {
            self.selected_task += 1;
        }
    }

    pub fn select_previous_task(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.tasks_in_group(self.selected_group()).len();
        self.selected_task = self.selected_task.min(count.saturating_sub(1));
    }
}
