use serde::Serialize;

use crate::options::RunnerOption;

/// Named collection of options presented as one selectable level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOption {
    pub name: String,
    pub options: Vec<RunnerOption>,
}

impl GroupOption {
    #[must_use]
    pub fn new(name: impl Into<String>, options: Vec<RunnerOption>) -> Self {
        GroupOption {
            name: name.into(),
            options,
        }
    }

    /// Number of leaf commands reachable from this group
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.options.iter().map(RunnerOption::command_count).sum()
    }
}
