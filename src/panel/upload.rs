//! File selection control for the upload action

use std::path::PathBuf;

/// Path prompt opened when the user picks "upload" on a deliverable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePicker {
    pub is_open: bool,
    pub input: String,
}

impl FilePicker {
    pub fn open(&mut self) {
        self.is_open = true;
        self.input.clear();
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.input.clear();
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Close the picker and return the chosen file, if any was entered
    pub fn take_selection(&mut self) -> Option<PathBuf> {
        let trimmed = self.input.trim();
        let selection = if trimmed.is_empty() {
            None
        } else {
            Some(expand_home(trimmed))
        };
        self.close();
        selection
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_is_none() {
        let mut picker = FilePicker::default();
        picker.open();
        picker.push_char(' ');
        assert_eq!(picker.take_selection(), None);
        assert!(!picker.is_open);
    }

    #[test]
    fn test_selection_trims_and_closes() {
        let mut picker = FilePicker::default();
        picker.open();
        for ch in " /tmp/report.pdf ".chars() {
            picker.push_char(ch);
        }
        assert_eq!(picker.take_selection(), Some(PathBuf::from("/tmp/report.pdf")));
        assert!(!picker.is_open);
        assert!(picker.input.is_empty());
    }

    #[test]
    fn test_reopen_clears_previous_input() {
        let mut picker = FilePicker::default();
        picker.open();
        picker.push_char('a');
        picker.pop_char();
        picker.push_char('b');
        picker.open();
        assert!(picker.input.is_empty());
    }

    #[test]
    fn test_home_expansion() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/docs/a.txt"), home.join("docs/a.txt"));
        }
        assert_eq!(expand_home("relative/a.txt"), PathBuf::from("relative/a.txt"));
    }
}
