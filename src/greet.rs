//! Greeting construction and optional name validation

use crate::constants::{MAX_NAME_LEN, SALUTATION, SUFFIX};
use crate::error::{DemoError, Result};

/// Builds greetings from a fixed salutation and suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    pub salutation: String,
    pub suffix: String,
}

impl Default for Greeter {
    fn default() -> Self {
        Self {
            salutation: SALUTATION.to_string(),
            suffix: SUFFIX.to_string(),
        }
    }
}

impl Greeter {
    /// Create a greeter with a custom salutation and suffix
    pub fn new(salutation: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            salutation: salutation.into(),
            suffix: suffix.into(),
        }
    }

    /// Greet `name`. Any string is accepted, including the empty one.
    pub fn greet(&self, name: &str) -> String {
        let mut out =
            String::with_capacity(self.salutation.len() + name.len() + self.suffix.len());
        out.push_str(&self.salutation);
        out.push_str(name);
        out.push_str(&self.suffix);
        out
    }
}

/// Greet `name` with the default salutation: `Hello, <name>!`
pub fn greet(name: &str) -> String {
    Greeter::default().greet(name)
}

/// Check a user-supplied name before greeting it.
///
/// Empty names pass. Control characters are rejected because a newline in
/// the name would split the greeting across lines.
pub fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(DemoError::NameTooLong {
            len,
            max: MAX_NAME_LEN,
        });
    }

    if name.chars().any(char::is_control) {
        return Err(DemoError::InvalidName(name.to_string()));
    }

    Ok(())
}
