//! Scripted scenarios run against a waitline.
//!
//! A [`Script`] is an ordered list of [`Step`]s. Running it produces one
//! [`Outcome`] per step, which the CLI prints either as prose or as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::types::Entrant;
use crate::waitline::Waitline;

/// A single operation against a waitline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// An entrant joins the back of the line.
    Join(Entrant),
    /// The person at the front gets their ticket.
    ServeOne,
    /// A group at the front gets their tickets together.
    ///
    /// Signed so that negative requests can be expressed; they serve nobody.
    ServeMany(i64),
    /// An entrant tries to bribe their way into a position.
    Bribe {
        /// The entrant asking to be let in.
        entrant: Entrant,
        /// The requested zero-based position. May be out of range.
        position: i64,
    },
    /// Report how many people are still waiting.
    Size,
}

/// What happened when a [`Step`] ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum Outcome {
    /// Someone joined the line.
    Joined {
        /// The name of the new entrant.
        name: String,
        /// The length of the line after joining.
        size: usize,
    },
    /// The person at the front was served.
    Served {
        /// The name of the served entrant.
        name: String,
    },
    /// A single serve was requested but nobody was waiting.
    NobodyWaiting,
    /// A group was served.
    GroupServed {
        /// How many people were actually served.
        count: usize,
        /// Who was served, front first.
        names: Vec<String>,
    },
    /// A bribe succeeded.
    Bribed {
        /// The name of the entrant.
        name: String,
        /// The position they now occupy.
        position: usize,
    },
    /// A bribe was refused.
    BribeRejected {
        /// The name of the entrant.
        name: String,
        /// The position they asked for.
        position: i64,
        /// The length of the line at the time.
        size: usize,
    },
    /// The current length of the line.
    Size {
        /// Number of people still waiting.
        size: usize,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined { name, size } => {
                write!(f, "{name} joined the line ({size} waiting).")
            }
            Self::Served { name } => {
                write!(f, "{name} got their ticket and entered the park.")
            }
            Self::NobodyWaiting => f.write_str("No one is waiting in line."),
            Self::GroupServed { count, .. } => write!(
                f,
                "{count} people got their tickets and entered the park together."
            ),
            Self::Bribed { name, position } => {
                write!(f, "{name} bribed their way into position {position} in the line.")
            }
            Self::BribeRejected { name, position, .. } => {
                write!(f, "Failed to add {name} to the line at position {position}.")
            }
            Self::Size { size } => write!(f, "Number of people still in line: {size}"),
        }
    }
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Creates a script from a list of steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The built-in demonstration.
    ///
    /// Five people join, the first is served, a pair is served together, and
    /// Frank bribes his way to the back at position 2, leaving three waiting.
    ///
    /// ## Examples
    ///
    /// ```
    /// use waitline_lib::{Outcome, Script, Waitline};
    ///
    /// let mut line = Waitline::new();
    /// let outcomes = Script::demo().run(&mut line);
    ///
    /// assert_eq!(outcomes.last(), Some(&Outcome::Size { size: 3 }));
    /// ```
    pub fn demo() -> Self {
        let mut steps: Vec<Step> = ["Alice", "Bob", "Charlie", "David", "Eve"]
            .into_iter()
            .map(|name| Step::Join(Entrant::regular(name)))
            .collect();

        steps.push(Step::ServeOne);
        steps.push(Step::ServeMany(2));
        steps.push(Step::Bribe {
            entrant: Entrant::with_priority_pass("Frank"),
            position: 2,
        });
        steps.push(Step::Size);

        Self::new(steps)
    }

    /// Returns the steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Applies every step to `line`, in order.
    ///
    /// Refused bribes become [`Outcome::BribeRejected`]; a script never stops
    /// partway through.
    #[tracing::instrument(skip_all, fields(steps = self.steps.len()))]
    pub fn run(&self, line: &mut Waitline) -> Vec<Outcome> {
        let outcomes: Vec<Outcome> = self.steps.iter().map(|step| apply(step, line)).collect();
        info!(size = line.size(), "script finished");
        outcomes
    }
}

fn apply(step: &Step, line: &mut Waitline) -> Outcome {
    match step {
        Step::Join(entrant) => {
            line.enqueue(entrant.clone());
            Outcome::Joined {
                name: entrant.name().to_string(),
                size: line.size(),
            }
        }
        Step::ServeOne => match line.serve_one() {
            Some(entrant) => Outcome::Served {
                name: entrant.name().to_string(),
            },
            None => Outcome::NobodyWaiting,
        },
        Step::ServeMany(count) => {
            let count = usize::try_from(*count).unwrap_or(0);
            let names: Vec<String> = line
                .serve_many_entrants(count)
                .into_iter()
                .map(|entrant| entrant.name().to_string())
                .collect();
            Outcome::GroupServed {
                count: names.len(),
                names,
            }
        }
        Step::Bribe { entrant, position } => bribe(entrant, *position, line),
        Step::Size => Outcome::Size { size: line.size() },
    }
}

fn bribe(entrant: &Entrant, position: i64, line: &mut Waitline) -> Outcome {
    let rejected = |size| Outcome::BribeRejected {
        name: entrant.name().to_string(),
        position,
        size,
    };

    if !entrant.has_priority_pass() {
        warn!(name = entrant.name(), position, reason = "no priority pass", "rejected bribe");
        return rejected(line.size());
    }

    let Ok(index) = usize::try_from(position) else {
        warn!(name = entrant.name(), position, reason = "negative position", "rejected bribe");
        return rejected(line.size());
    };

    if line.insert_at(entrant.clone(), index) {
        Outcome::Bribed {
            name: entrant.name().to_string(),
            position: index,
        }
    } else {
        rejected(line.size())
    }
}
