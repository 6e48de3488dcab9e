//! Task List Store
//!
//! Owns the ordered task sequence and keeps the persisted slot in sync.
//! Every mutating call ends with a full overwrite of the slot.

use std::collections::HashSet;

use crate::error::{StorageError, TaskError};
use crate::models::{Task, TaskId};
use crate::storage::TaskStorage;

/// Ordered, persisted collection of tasks
#[derive(Debug)]
pub struct TaskList<S> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
    next_id: u64,
}

impl<S: TaskStorage> TaskList<S> {
    /// Load the list stored under `key`; fails soft to an empty list
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        Self::load_seeded(storage, key, 0)
    }

    /// Like `load`, but fresh ids start no lower than `seed`
    pub fn load_seeded(storage: S, key: impl Into<String>, seed: u64) -> Self {
        let key = key.into();
        let tasks = match storage.read(&key) {
            Ok(Some(raw)) => parse_tasks(&key, &raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("could not read `{}`, starting empty: {}", key, e);
                Vec::new()
            }
        };
        let next_id = tasks
            .iter()
            .map(|task| task.id.0.saturating_add(1))
            .max()
            .unwrap_or(0)
            .max(seed);

        log::info!("loaded {} tasks from `{}`", tasks.len(), key);
        Self {
            storage,
            key,
            tasks,
            next_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new incomplete task.
    ///
    /// Whitespace-only input is rejected without touching the list.
    pub fn add(&mut self, description: &str) -> Result<TaskId, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let id = self.fresh_id();
        self.tasks
            .push(Task::new(id, description.to_string(), self.tasks.len() + 1));
        log::debug!("added task {} at index {}", id, self.tasks.len());
        self.save();
        Ok(id)
    }

    /// Remove by id; absent ids are ignored
    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
        self.reindex();
        self.save();
    }

    pub fn set_completed(&mut self, id: TaskId, completed: bool) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = completed;
        }
        self.save();
    }

    /// Replace the description with the trimmed text.
    ///
    /// Blank text keeps the old description. Returns whether the text was applied.
    pub fn edit_description(&mut self, id: TaskId, text: &str) -> bool {
        let text = text.trim();
        let applied = match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) if !text.is_empty() => {
                task.description = text.to_string();
                true
            }
            _ => false,
        };
        self.save();
        applied
    }

    /// Drop every completed task, keeping the others in order
    pub fn clear_completed(&mut self) {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        self.reindex();
        log::debug!("cleared {} completed tasks", before - self.tasks.len());
        self.save();
    }

    /// Serialize the whole sequence into the slot
    pub fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.tasks)?;
        self.storage.write(&self.key, &json)
    }

    fn save(&self) {
        if let Err(e) = self.persist() {
            log::error!("failed to persist tasks, keeping in-memory state: {}", e);
        }
    }

    /// Next counter value; once the counter is spent, the lowest unused id
    fn fresh_id(&mut self) -> TaskId {
        let candidate = TaskId(self.next_id);
        if self.get(candidate).is_none() {
            self.next_id = self.next_id.saturating_add(1);
            return candidate;
        }
        let taken: HashSet<TaskId> = self.tasks.iter().map(|task| task.id).collect();
        (0..=u64::MAX)
            .map(TaskId)
            .find(|id| !taken.contains(id))
            .unwrap_or(candidate)
    }

    fn reindex(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.index = i + 1;
        }
    }
}

/// Parse and normalize a persisted slot. Malformed input yields an empty list.
fn parse_tasks(key: &str, raw: &str) -> Vec<Task> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let parsed: Vec<Task> = match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            log::warn!("ignoring malformed data in `{}`: {}", key, e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    parsed
        .into_iter()
        .filter_map(|mut task| {
            task.description = task.description.trim().to_string();
            (!task.description.is_empty() && seen.insert(task.id)).then_some(task)
        })
        .enumerate()
        .map(|(i, mut task)| {
            task.index = i + 1;
            task
        })
        .collect()
}
