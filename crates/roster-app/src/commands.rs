use std::fmt;

/// Actions raised by widgets and applied by the app once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove(String),
    Clear,
    Save,
    DismissNotification,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add => write!(f, "Add"),
            Command::Remove(name) => write!(f, "Remove({name})"),
            Command::Clear => write!(f, "Clear"),
            Command::Save => write!(f, "Save"),
            Command::DismissNotification => write!(f, "DismissNotification"),
        }
    }
}
