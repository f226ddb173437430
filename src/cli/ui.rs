use tasklist::{Item, Outcome};

pub const HELP: &str = "\
Commands:
  add <title>       Add a new task            (aliases: a, new)
  list              Show all tasks            (aliases: ls, l)
  toggle <number>   Mark a task done/undone   (aliases: done, t)
  delete <number>   Remove a task             (aliases: del, rm, d)
  help              Show this help            (aliases: h, ?)
  exit              Leave the program         (aliases: quit, q)

Numbers refer to positions shown by 'list'. Run 'list' again after a delete.";

pub fn welcome(location: &str) -> String {
    format!("Tasklist - storing tasks in {location}\nType 'help' for available commands.")
}

pub fn render_item(position: usize, item: &Item) -> String {
    format!("{}. {} {}", position, item.marker(), item.title())
}

pub fn render_list(items: &[Item]) -> Vec<String> {
    if items.is_empty() {
        return vec!["No tasks yet.".to_string()];
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| render_item(i + 1, item))
        .collect()
}

/// Message for the result of a mutating command.
pub fn render_outcome(outcome: Outcome, success: &str) -> String {
    match outcome {
        Outcome::Success => success.to_string(),
        Outcome::IndexNotFound => "No task with that number. Use 'list' to see them.".to_string(),
        Outcome::PersistenceFailed => format!("{success}, but it could not be saved to disk."),
    }
}
