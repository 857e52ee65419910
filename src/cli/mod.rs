use clap::{Parser, Subcommand};
use std::borrow::{Borrow, BorrowMut};
use std::error::Error;
use std::io::{stderr, stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use crate::engine::{new as new_engine, FileStorage, Filter, Storage, Task, TaskId, Tasklist};

/// Manage a persistent list of tasks
#[derive(Debug, Parser)]
#[command(name = "Tasklist")]
struct Opts {
  #[arg(long, short, default_value = "tasks.json")]
  /// File the task list is loaded from and saved to.
  file: PathBuf,

  #[command(subcommand)]
  cmd: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
  #[command(visible_alias = "ls")]
  /// List tasks
  List {
    #[arg(long, conflicts_with = "pending")]
    /// Only show completed tasks
    completed: bool,

    #[arg(long)]
    /// Only show tasks that are still to do
    pending: bool,
  },

  /// Add a new task
  Add {
    /// Name of the task (read from stdin if missing)
    name: Vec<String>,
  },

  /// Show tasks whose name contains the query, ignoring case
  Search { query: Option<String> },

  /// Rename a task
  Edit {
    id: TaskId,
    /// New name of the task (read from stdin if missing)
    name: Vec<String>,
  },

  /// Complete a task, or mark a completed task as pending again
  Toggle { id: TaskId },

  #[command(visible_alias = "rm")]
  /// Delete a task
  Delete { id: TaskId },

  #[command(visible_alias = "mv")]
  /// Move a task to the position of another task
  Move { id: TaskId, target: TaskId },
}

pub fn cli() -> Result<(), Box<dyn Error>> {
  let opts = Opts::parse();
  handle_command(&opts.cmd, new_engine(FileStorage::new(opts.file)))
}

fn handle_command<S: Storage, A: Tasklist<Storage = S>, B: BorrowMut<A> + Borrow<A>>(
  command: &Option<Cmd>,
  app: B,
) -> Result<(), Box<dyn Error>> {
  let default = Cmd::List {
    completed: false,
    pending: false,
  };
  let cmd = command.as_ref().unwrap_or(&default);
  handle_command_impl(cmd, app, &mut stdin().lock(), &mut stdout())
}

fn handle_command_impl<
  S: Storage,
  A: Tasklist<Storage = S>,
  B: BorrowMut<A> + Borrow<A>,
  R: BufRead,
  W: Write,
>(
  command: &Cmd,
  app: B,
  input: &mut R,
  output: &mut W,
) -> Result<(), Box<dyn Error>> {
  match command {
    Cmd::List { completed, pending } => list_tasks(app, output, *completed, *pending),
    Cmd::Add { name } => add_task(app, input, output, name),
    Cmd::Search { query } => search_tasks(app, output, query.as_deref()),
    Cmd::Edit { id, name } => edit_task(app, input, output, id, name),
    Cmd::Toggle { id } => toggle_task(app, output, id),
    Cmd::Delete { id } => delete_task(app, output, id),
    Cmd::Move { id, target } => move_task(app, output, id, target),
  }
}

fn list_tasks<S: Storage, A: Tasklist<Storage = S>, B: Borrow<A>, W: Write>(
  app: B,
  output: &mut W,
  completed: bool,
  pending: bool,
) -> Result<(), Box<dyn Error>> {
  let filter = if completed {
    Filter::Completed
  } else if pending {
    Filter::Pending
  } else {
    Filter::All
  };
  print_tasks(output, &app.borrow().get_list().filtered(&filter))
}

fn search_tasks<S: Storage, A: Tasklist<Storage = S>, B: Borrow<A>, W: Write>(
  app: B,
  output: &mut W,
  query: Option<&str>,
) -> Result<(), Box<dyn Error>> {
  let filter = query.map_or(Filter::All, |query| Filter::Search(query.into()));
  print_tasks(output, &app.borrow().get_list().filtered(&filter))
}

fn add_task<
  S: Storage,
  A: Tasklist<Storage = S>,
  B: BorrowMut<A> + Borrow<A>,
  R: BufRead,
  W: Write,
>(
  mut app: B,
  input: &mut R,
  output: &mut W,
  name: &[String],
) -> Result<(), Box<dyn Error>> {
  let name = read_name(input, name, "Task: ")?;
  if app.borrow_mut().create_task(&name)?.is_some() {
    print_tasks(output, app.borrow().get_list().tasks())?;
  }
  Ok(())
}

fn edit_task<
  S: Storage,
  A: Tasklist<Storage = S>,
  B: BorrowMut<A> + Borrow<A>,
  R: BufRead,
  W: Write,
>(
  mut app: B,
  input: &mut R,
  output: &mut W,
  id: &TaskId,
  name: &[String],
) -> Result<(), Box<dyn Error>> {
  let name = read_name(input, name, "New name: ")?;
  if app.borrow_mut().rename_task(id, &name)? {
    print_tasks(output, app.borrow().get_list().tasks())?;
  }
  Ok(())
}

fn toggle_task<S: Storage, A: Tasklist<Storage = S>, B: BorrowMut<A> + Borrow<A>, W: Write>(
  mut app: B,
  output: &mut W,
  id: &TaskId,
) -> Result<(), Box<dyn Error>> {
  if app.borrow_mut().toggle_task(id)? {
    print_tasks(output, app.borrow().get_list().tasks())?;
  }
  Ok(())
}

fn delete_task<S: Storage, A: Tasklist<Storage = S>, B: BorrowMut<A> + Borrow<A>, W: Write>(
  mut app: B,
  output: &mut W,
  id: &TaskId,
) -> Result<(), Box<dyn Error>> {
  if app.borrow_mut().delete_task(id)? {
    print_tasks(output, app.borrow().get_list().tasks())?;
  }
  Ok(())
}

fn move_task<S: Storage, A: Tasklist<Storage = S>, B: BorrowMut<A> + Borrow<A>, W: Write>(
  mut app: B,
  output: &mut W,
  id: &TaskId,
  target: &TaskId,
) -> Result<(), Box<dyn Error>> {
  if app.borrow_mut().move_task(id, target)? {
    print_tasks(output, app.borrow().get_list().tasks())?;
  }
  Ok(())
}

fn read_name<R: BufRead>(
  input: &mut R,
  words: &[String],
  prompt: &str,
) -> Result<String, Box<dyn Error>> {
  if words.is_empty() {
    if atty::is(atty::Stream::Stdin) {
      let mut err = stderr();
      write!(err, "{prompt}")?;
      err.flush()?;
    }
    let mut name = String::new();
    input.read_line(&mut name)?;
    Ok(name)
  } else {
    Ok(words.join(" "))
  }
}

fn print_tasks<T: Borrow<Task>, W: Write>(
  output: &mut W,
  tasks: &[T],
) -> Result<(), Box<dyn Error>> {
  if let Some(max_id_len) = tasks
    .iter()
    .map(|task| task.borrow().id.to_string().len())
    .max()
  {
    for task in tasks {
      let task = task.borrow();
      writeln!(
        output,
        "{:width$} {} {}",
        task.id,
        if task.completed { "[x]" } else { "[ ]" },
        task.name,
        width = max_id_len
      )?;
    }
  } else {
    writeln!(output, "No tasks available.")?;
  }
  Ok(())
}
