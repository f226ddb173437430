/// Result of a list mutation, reported back to the shell.
///
/// The in-memory change has already happened when `PersistenceFailed` is
/// returned; only the write to the store was lost.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    IndexNotFound,
    PersistenceFailed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}
