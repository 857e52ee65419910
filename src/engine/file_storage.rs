use serde_json::{from_str as from_json, to_string as to_json};
use std::error::Error;
use std::fs::{read_to_string, write};
use std::path::PathBuf;

use super::{Storage, Task};

#[derive(Debug)]
pub struct FileStorage {
  path: PathBuf,
}

impl FileStorage {
  #[must_use]
  pub const fn new(path: PathBuf) -> Self {
    Self { path }
  }
}

impl Storage for FileStorage {
  fn load(&self) -> Vec<Task> {
    read_to_string(&self.path)
      .ok()
      .and_then(|contents| from_json(&contents).ok())
      .unwrap_or_default()
  }

  fn save(&mut self, tasks: &[Task]) -> Result<(), Box<dyn Error>> {
    write(&self.path, to_json(tasks)?)?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::FileStorage;
  use crate::engine::{Storage, Task, TaskId};
  use std::fs::write;
  use tempfile::TempDir;

  #[test]
  fn test_load_without_a_file() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("tasks.json"));
    assert!(storage.load().is_empty());
  }

  #[test]
  fn test_load_with_a_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    write(&path, "{oops").unwrap();
    assert!(FileStorage::new(path).load().is_empty());
  }

  #[test]
  fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    let mut storage = FileStorage::new(path.clone());
    storage
      .save(&[Task {
        id: TaskId(1),
        name: "Buy milk".into(),
        completed: true,
      }])
      .unwrap();
    let tasks = FileStorage::new(path).load();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, TaskId(1));
    assert_eq!(tasks[0].name, "Buy milk");
    assert!(tasks[0].completed);
  }

  #[test]
  fn test_save_overwrites_the_previous_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    let mut storage = FileStorage::new(path.clone());
    storage
      .save(&[Task {
        id: TaskId(1),
        name: "Buy milk".into(),
        completed: false,
      }])
      .unwrap();
    storage.save(&[]).unwrap();
    assert!(FileStorage::new(path).load().is_empty());
  }
}
