// File: src/store.rs
//! In-memory task list and the views the task screens are built from.
//! Persistence is the caller's business.
use crate::model::{HistoryItem, Task, TaskStatus};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    pub tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list, e.g. after loading from disk.
    pub fn insert(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replaces the task with the same id, or appends it.
    pub fn update_or_add_task(&mut self, task: Task) {
        if let Some(idx) = self.tasks.iter().position(|t| t.id == task.id) {
            self.tasks[idx] = task;
        } else {
            self.tasks.push(task);
        }
    }

    pub fn remove_task(&mut self, id: &str) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn complete_task(&mut self, id: &str, result_text: &str) -> Option<Task> {
        let task = self.get_task_mut(id)?;
        task.complete(result_text);
        Some(task.clone())
    }

    pub fn add_history(&mut self, id: &str, item: HistoryItem) -> Option<Task> {
        let task = self.get_task_mut(id)?;
        task.add_history(item);
        Some(task.clone())
    }

    pub fn reschedule_task(
        &mut self,
        id: &str,
        new_due: NaiveDateTime,
        now: NaiveDateTime,
        note: Option<String>,
    ) -> Option<Task> {
        let task = self.get_task_mut(id)?;
        task.reschedule(new_due, now, note);
        Some(task.clone())
    }

    // --- Views ---

    /// Active tasks, earliest due first.
    pub fn active_tasks(&self) -> Vec<&Task> {
        let mut list: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Active)
            .collect();
        list.sort_by_key(|t| t.due_date);
        list
    }

    /// Completed tasks, latest due first.
    pub fn completed_tasks(&self) -> Vec<&Task> {
        let mut list: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .collect();
        list.sort_by_key(|t| std::cmp::Reverse(t.due_date));
        list
    }

    /// Active tasks whose due time has passed.
    pub fn overdue_tasks(&self, now: NaiveDateTime) -> Vec<&Task> {
        self.active_tasks()
            .into_iter()
            .filter(|t| t.due_date < now)
            .collect()
    }

    /// Active tasks due later today.
    pub fn today_tasks(&self, now: NaiveDateTime) -> Vec<&Task> {
        let today = now.date();
        self.active_tasks()
            .into_iter()
            .filter(|t| t.due_date.date() == today && t.due_date >= now)
            .collect()
    }

    /// Active tasks due after today ends.
    pub fn upcoming_tasks(&self, now: NaiveDateTime) -> Vec<&Task> {
        let today = now.date();
        self.active_tasks()
            .into_iter()
            .filter(|t| t.due_date.date() > today)
            .collect()
    }
}
