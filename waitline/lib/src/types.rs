//! Core data types for the waitline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A person waiting in line.
///
/// Entrants have no identity beyond their contents: two entrants with the same
/// name and pass are equal, and the same entrant may appear in a line twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant {
    name: String,
    has_priority_pass: bool,
}

impl Entrant {
    /// Creates a new entrant.
    ///
    /// ## Examples
    ///
    /// ```
    /// use waitline_lib::Entrant;
    ///
    /// let entrant = Entrant::new("Frank", true);
    /// assert_eq!(entrant.name(), "Frank");
    /// assert!(entrant.has_priority_pass());
    /// ```
    pub fn new(name: impl Into<String>, has_priority_pass: bool) -> Self {
        Self {
            name: name.into(),
            has_priority_pass,
        }
    }

    /// Creates an entrant without a priority pass.
    pub fn regular(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Creates an entrant holding a priority pass.
    pub fn with_priority_pass(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Returns the entrant's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the entrant may bribe their way into the line.
    pub fn has_priority_pass(&self) -> bool {
        self.has_priority_pass
    }
}

impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
