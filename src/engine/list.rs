use super::{Filter, Task, TaskId};

#[derive(Debug, Default)]
pub struct TaskList {
  tasks: Vec<Task>,
  last_id: u64,
}

impl TaskList {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn from_tasks(tasks: Vec<Task>) -> Self {
    let last_id = tasks.iter().map(|task| task.id.0).max().unwrap_or(0);
    Self { tasks, last_id }
  }

  pub fn create(&mut self, name: &str) -> Option<TaskId> {
    let name = name.trim();
    if name.is_empty() {
      return None;
    }
    self.last_id += 1;
    let id = TaskId(self.last_id);
    self.tasks.push(Task {
      id: id.clone(),
      name: name.into(),
      completed: false,
    });
    Some(id)
  }

  pub fn rename(&mut self, id: &TaskId, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
      return false;
    }
    self.find_mut(id).map_or(false, |task| {
      task.name = name.into();
      true
    })
  }

  pub fn toggle(&mut self, id: &TaskId) -> bool {
    self.find_mut(id).map_or(false, |task| {
      task.completed = !task.completed;
      true
    })
  }

  pub fn delete(&mut self, id: &TaskId) -> bool {
    self.position(id).map_or(false, |position| {
      self.tasks.remove(position);
      true
    })
  }

  // The target position is resolved before the dragged task is removed, so
  // moving down lands after the target and moving up lands before it.
  pub fn reorder(&mut self, dragged: &TaskId, target: &TaskId) -> bool {
    match (self.position(dragged), self.position(target)) {
      (Some(from), Some(to)) if from != to => {
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        true
      }
      _ => false,
    }
  }

  #[must_use]
  pub fn get(&self, id: &TaskId) -> Option<&Task> {
    self.tasks.iter().find(|task| task.id == *id)
  }

  #[must_use]
  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  #[must_use]
  pub fn filtered(&self, filter: &Filter) -> Vec<&Task> {
    self.tasks.iter().filter(|task| filter.matches(task)).collect()
  }

  fn position(&self, id: &TaskId) -> Option<usize> {
    self.tasks.iter().position(|task| task.id == *id)
  }

  fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
    self.tasks.iter_mut().find(|task| task.id == *id)
  }
}
