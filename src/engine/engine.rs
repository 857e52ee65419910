use std::error::Error;

use super::{Storage, TaskId, TaskList};

pub trait Tasklist {
  type Storage: Storage;
  fn create_task(&mut self, name: &str) -> Result<Option<TaskId>, Box<dyn Error>>;
  fn rename_task(&mut self, id: &TaskId, name: &str) -> Result<bool, Box<dyn Error>>;
  fn toggle_task(&mut self, id: &TaskId) -> Result<bool, Box<dyn Error>>;
  fn delete_task(&mut self, id: &TaskId) -> Result<bool, Box<dyn Error>>;
  fn move_task(&mut self, dragged: &TaskId, target: &TaskId) -> Result<bool, Box<dyn Error>>;
  fn get_list(&self) -> &TaskList;
  fn get_storage(&self) -> &Self::Storage;
}

#[derive(Debug)]
pub struct TasklistImpl<S: Storage> {
  list: TaskList,
  storage: S,
}

pub fn new<S: Storage>(storage: S) -> TasklistImpl<S> {
  let list = TaskList::from_tasks(storage.load());
  TasklistImpl { list, storage }
}

impl<S: Storage> TasklistImpl<S> {
  fn save_if(&mut self, changed: bool) -> Result<bool, Box<dyn Error>> {
    if changed {
      self.storage.save(self.list.tasks())?;
    }
    Ok(changed)
  }
}

impl<S: Storage> Tasklist for TasklistImpl<S> {
  type Storage = S;

  fn create_task(&mut self, name: &str) -> Result<Option<TaskId>, Box<dyn Error>> {
    let id = self.list.create(name);
    self.save_if(id.is_some())?;
    Ok(id)
  }

  fn rename_task(&mut self, id: &TaskId, name: &str) -> Result<bool, Box<dyn Error>> {
    let changed = self.list.rename(id, name);
    self.save_if(changed)
  }

  fn toggle_task(&mut self, id: &TaskId) -> Result<bool, Box<dyn Error>> {
    let changed = self.list.toggle(id);
    self.save_if(changed)
  }

  fn delete_task(&mut self, id: &TaskId) -> Result<bool, Box<dyn Error>> {
    let changed = self.list.delete(id);
    self.save_if(changed)
  }

  fn move_task(&mut self, dragged: &TaskId, target: &TaskId) -> Result<bool, Box<dyn Error>> {
    let changed = self.list.reorder(dragged, target);
    self.save_if(changed)
  }

  fn get_list(&self) -> &TaskList {
    &self.list
  }

  fn get_storage(&self) -> &Self::Storage {
    &self.storage
  }
}
