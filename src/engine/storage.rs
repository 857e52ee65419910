use std::error::Error;

use super::Task;

pub trait Storage {
  /// Returns the persisted tasks, or an empty list if there is no stored
  /// value or it cannot be read.
  fn load(&self) -> Vec<Task>;
  fn save(&mut self, tasks: &[Task]) -> Result<(), Box<dyn Error>>;
}
