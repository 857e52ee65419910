use serde_json::{from_str as from_json, to_string as to_json};
use std::error::Error;

use super::{Storage, Task};

#[derive(Debug, Default)]
pub struct MemStorage {
  value: Option<String>,
}

impl MemStorage {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub const fn with_value(value: String) -> Self {
    Self { value: Some(value) }
  }

  #[must_use]
  pub fn value(&self) -> Option<&str> {
    self.value.as_deref()
  }
}

impl Storage for MemStorage {
  fn load(&self) -> Vec<Task> {
    self
      .value
      .as_ref()
      .and_then(|value| from_json(value).ok())
      .unwrap_or_default()
  }

  fn save(&mut self, tasks: &[Task]) -> Result<(), Box<dyn Error>> {
    self.value = Some(to_json(tasks)?);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::MemStorage;
  use crate::engine::{Storage, Task, TaskId};

  #[test]
  fn test_load_without_a_value() {
    assert!(MemStorage::new().load().is_empty());
  }

  #[test]
  fn test_load_with_a_malformed_value() {
    assert!(MemStorage::with_value("{not json".into()).load().is_empty());
    assert!(MemStorage::with_value(String::new()).load().is_empty());
  }

  #[test]
  fn test_load_defaults_completed() {
    let tasks = MemStorage::with_value("[{\"id\":1,\"name\":\"Buy milk\"}]".into()).load();
    assert_eq!(tasks.len(), 1);
    assert!(!tasks[0].completed);
  }

  #[test]
  fn test_save_layout() {
    let mut storage = MemStorage::new();
    storage
      .save(&[Task {
        id: TaskId(1),
        name: "Buy milk".into(),
        completed: false,
      }])
      .unwrap();
    assert_eq!(
      storage.value(),
      Some("[{\"id\":1,\"name\":\"Buy milk\",\"completed\":false}]")
    );
  }

  #[test]
  fn test_save_and_reload() {
    let mut storage = MemStorage::new();
    storage
      .save(&[
        Task {
          id: TaskId(1),
          name: "Buy milk".into(),
          completed: false,
        },
        Task {
          id: TaskId(2),
          name: "Walk dog".into(),
          completed: true,
        },
      ])
      .unwrap();
    let tasks = storage.load();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].name, "Buy milk");
    assert!(tasks[1].completed);
  }
}
