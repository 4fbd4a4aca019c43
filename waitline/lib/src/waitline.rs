//! The ordered waitline.
//!
//! Insertion order is waiting order: the front of the line is served next.
//! Every operation except [`Waitline::try_insert_at`] is total; emptiness and
//! oversized group requests degrade to empty or clamped results.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::WaitlineError;
use crate::types::Entrant;

/// An ordered line of entrants waiting to be served.
///
/// ## Examples
///
/// ```
/// use waitline_lib::{Entrant, Waitline};
///
/// let mut line = Waitline::new();
/// line.enqueue(Entrant::regular("Alice"));
/// line.enqueue(Entrant::regular("Bob"));
///
/// assert_eq!(line.serve_one(), Some(Entrant::regular("Alice")));
/// assert!(line.insert_at(Entrant::with_priority_pass("Frank"), 0));
/// assert_eq!(line.size(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Waitline {
    entrants: VecDeque<Entrant>,
}

impl Waitline {
    /// Creates an empty waitline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entrant to the back of the line.
    ///
    /// Accepts either an [`Entrant`] or an `Option<Entrant>`; `None` is
    /// ignored and leaves the line unchanged.
    pub fn enqueue(&mut self, entrant: impl Into<Option<Entrant>>) {
        let entrant: Option<Entrant> = entrant.into();
        let Some(entrant) = entrant else {
            debug!("ignored absent entrant");
            return;
        };

        debug!(name = entrant.name(), size = self.entrants.len() + 1, "entrant joined");
        self.entrants.push_back(entrant);
    }

    /// Serves the entrant at the front of the line.
    ///
    /// Returns `None` when nobody is waiting.
    pub fn serve_one(&mut self) -> Option<Entrant> {
        let served = self.entrants.pop_front()?;
        debug!(name = served.name(), size = self.entrants.len(), "served entrant");
        Some(served)
    }

    /// Serves up to `count` entrants from the front of the line.
    ///
    /// Stops early if the line empties. Returns how many were actually served,
    /// which never exceeds the length of the line before the call.
    pub fn serve_many(&mut self, count: usize) -> usize {
        self.serve_many_entrants(count).len()
    }

    /// Serves up to `count` entrants and returns them in front-to-back order.
    ///
    /// Clamps the same way as [`serve_many`](Self::serve_many).
    pub fn serve_many_entrants(&mut self, count: usize) -> Vec<Entrant> {
        let served = count.min(self.entrants.len());
        let group: Vec<Entrant> = self.entrants.drain(..served).collect();
        debug!(requested = count, served, size = self.entrants.len(), "served group");
        group
    }

    /// Inserts an entrant so that exactly `position` entrants precede it.
    ///
    /// Returns `false` and leaves the line untouched if `position` is greater
    /// than the current length. Inserting at the current length is the same
    /// as [`enqueue`](Self::enqueue).
    pub fn insert_at(&mut self, entrant: Entrant, position: usize) -> bool {
        self.try_insert_at(entrant, position).is_ok()
    }

    /// Inserts an entrant at `position`, reporting why an insert was refused.
    ///
    /// ## Errors
    ///
    /// Returns [`WaitlineError::InvalidPosition`] if `position` is greater than
    /// the current length. The line is not modified in that case.
    pub fn try_insert_at(&mut self, entrant: Entrant, position: usize) -> Result<(), WaitlineError> {
        let len = self.entrants.len();

        if position > len {
            warn!(name = entrant.name(), position, len, "rejected out-of-range insert");
            return Err(WaitlineError::InvalidPosition {
                position: i64::try_from(position).unwrap_or(i64::MAX),
                len,
            });
        }

        debug!(name = entrant.name(), position, size = len + 1, "inserted entrant");
        self.entrants.insert(position, entrant);
        Ok(())
    }

    /// Returns the number of entrants waiting.
    pub fn size(&self) -> usize {
        self.entrants.len()
    }

    /// Returns the number of entrants waiting.
    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    /// Returns true if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }

    /// Returns the entrant who will be served next, if any.
    pub fn front(&self) -> Option<&Entrant> {
        self.entrants.front()
    }

    /// Iterates over the line from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Entrant> {
        self.entrants.iter()
    }

    /// Returns the position of the first entrant with the given name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entrants.iter().position(|entrant| entrant.name() == name)
    }
}

impl FromIterator<Entrant> for Waitline {
    fn from_iter<I: IntoIterator<Item = Entrant>>(iter: I) -> Self {
        Self {
            entrants: iter.into_iter().collect(),
        }
    }
}

impl Extend<Entrant> for Waitline {
    fn extend<I: IntoIterator<Item = Entrant>>(&mut self, iter: I) {
        for entrant in iter {
            self.enqueue(entrant);
        }
    }
}

impl<'a> IntoIterator for &'a Waitline {
    type Item = &'a Entrant;
    type IntoIter = std::collections::vec_deque::Iter<'a, Entrant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entrants.iter()
    }
}
