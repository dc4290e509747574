use serde::Serialize;

/// A leaf entry that can be executed directly by the host shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOption {
    pub name: String,
    pub command: String,
}

impl CommandOption {
    #[must_use]
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        CommandOption {
            name: name.into(),
            command: command.into(),
        }
    }
}
