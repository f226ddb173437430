use super::command::{self, Command, ParseError};
use super::ui;
use std::io::{self, BufRead, Write};
use tasklist::{ListManager, Outcome};
use tracing::debug;

/// Interactive shell driving a [`ListManager`].
pub struct App {
    manager: ListManager,
    exit: bool,
}

impl App {
    pub fn new(manager: ListManager) -> Self {
        Self {
            manager,
            exit: false,
        }
    }

    /// Read commands from `input` until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", ui::welcome(&self.manager.store_description()))?;

        let mut lines = input.lines();
        while !self.exit {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            self.handle_line(&line?, &mut output)?;
        }

        writeln!(output, "Goodbye!")?;
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return Ok(()),
            Err(e) => return writeln!(output, "{e}"),
        };
        debug!(?command, "executing");

        match command {
            Command::Add(title) => {
                let outcome = self.manager.add(title);
                writeln!(output, "{}", ui::render_outcome(outcome, "Added"))
            }
            Command::List => {
                for line in ui::render_list(self.manager.items()) {
                    writeln!(output, "{line}")?;
                }
                Ok(())
            }
            Command::Toggle(position) => {
                let outcome = match command::to_zero_based(position) {
                    Some(index) => self.manager.toggle_completion(index),
                    None => Outcome::IndexNotFound,
                };
                writeln!(output, "{}", ui::render_outcome(outcome, "Updated"))
            }
            Command::Delete(position) => {
                let outcome = match command::to_zero_based(position) {
                    Some(index) => self.manager.delete(index),
                    None => Outcome::IndexNotFound,
                };
                writeln!(output, "{}", ui::render_outcome(outcome, "Deleted"))
            }
            Command::Help => writeln!(output, "{}", ui::HELP),
            Command::Exit => {
                self.exit = true;
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub fn manager(&self) -> &ListManager {
        &self.manager
    }
}
