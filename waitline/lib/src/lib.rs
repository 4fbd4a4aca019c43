//! Waitline library for simulating a line of people waiting to be served.
//!
//! People join at the back, are served from the front one at a time or in
//! groups, and priority pass holders can bribe their way into any position.
//!
//! ## Core Types
//!
//! - [`Entrant`] - A person waiting in line
//! - [`Waitline`] - The ordered line itself (front is served next)
//! - [`WaitlineError`] - The single failure mode: an out-of-range position
//!
//! ## Scripted Scenarios
//!
//! - [`Step`] - One operation against a waitline
//! - [`Script`] - An ordered list of steps, including the built-in demo
//! - [`Outcome`] - What happened when a step ran
//! - [`parse_step`] - Parse step strings like `join:Alice` or `bribe:Frank@2`

mod error;
mod parse;
mod script;
mod types;
mod waitline;

pub use error::WaitlineError;
pub use parse::parse_step;
pub use script::{Outcome, Script, Step};
pub use types::Entrant;
pub use waitline::Waitline;
