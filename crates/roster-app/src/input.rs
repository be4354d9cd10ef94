/// Text typed into the name field before it is added to the roster.
#[derive(Debug, Clone)]
pub struct PendingInput {
    text: String,
    cap: usize,
}

impl PendingInput {
    pub fn new(cap: usize) -> Self {
        Self {
            text: String::new(),
            cap,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer with `candidate` if it fits under the cap.
    /// Over-long edits are rejected whole and the previous text is kept.
    pub fn set(&mut self, candidate: &str) -> bool {
        if candidate.chars().count() > self.cap {
            return false;
        }
        if self.text != candidate {
            self.text.clear();
            self.text.push_str(candidate);
        }
        true
    }

    /// Hands out the typed name and clears the buffer, unless the text is blank
    /// in which case nothing changes.
    pub fn take_name(&mut self) -> Option<String> {
        if self.text.trim().is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.text))
        }
    }
}
