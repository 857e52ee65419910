use super::Task;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Filter {
  All,
  Completed,
  Pending,
  Search(String),
}

impl Filter {
  #[must_use]
  pub fn matches(&self, task: &Task) -> bool {
    match self {
      Self::All => true,
      Self::Completed => task.completed,
      Self::Pending => !task.completed,
      Self::Search(query) => task.name.to_lowercase().contains(&query.to_lowercase()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Filter;
  use crate::engine::{Task, TaskId};
  use rstest::rstest;

  fn task(name: &str, completed: bool) -> Task {
    Task {
      id: TaskId(1),
      name: name.into(),
      completed,
    }
  }

  #[rstest]
  #[case::all_keeps_pending(Filter::All, false)]
  #[case::all_keeps_completed(Filter::All, true)]
  #[case::completed_keeps_completed(Filter::Completed, true)]
  #[case::pending_keeps_pending(Filter::Pending, false)]
  fn test_matching_states(#[case] filter: Filter, #[case] completed: bool) {
    assert!(filter.matches(&task("Buy milk", completed)));
  }

  #[rstest]
  #[case::completed_drops_pending(Filter::Completed, false)]
  #[case::pending_drops_completed(Filter::Pending, true)]
  fn test_non_matching_states(#[case] filter: Filter, #[case] completed: bool) {
    assert!(!filter.matches(&task("Buy milk", completed)));
  }

  #[rstest]
  #[case::full_name("Buy milk", true)]
  #[case::substring("milk", true)]
  #[case::mixed_case("bUy MiLk", true)]
  #[case::empty_query("", true)]
  #[case::ignores_completion("buy", true)]
  #[case::no_match("dog", false)]
  fn test_search(#[case] query: &str, #[case] matches: bool) {
    assert_eq!(
      Filter::Search(query.into()).matches(&task("Buy milk", true)),
      matches
    );
  }
}
