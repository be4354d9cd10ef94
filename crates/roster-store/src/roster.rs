use std::fmt;

/// Ordered list of student names.
///
/// Names keep insertion order and may repeat. Every mutation consumes the
/// roster and hands back the replacement value, so the owner swaps the whole
/// list on each action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits backing-file text into names, one per line. A trailing newline
    /// does not produce an extra empty entry.
    pub fn parse(text: &str) -> Self {
        Self {
            names: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Joins the names with `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.names.join("\n")
    }

    /// Appends `name` unless it is empty or whitespace-only.
    #[must_use]
    pub fn add(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.names.push(name);
        }
        self
    }

    /// Drops every entry equal to `name`, not only the first one.
    #[must_use]
    pub fn remove(mut self, name: &str) -> Self {
        self.names.retain(|entry| entry != name);
        self
    }

    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} student(s)", self.names.len())
    }
}
