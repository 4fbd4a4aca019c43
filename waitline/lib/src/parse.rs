//! Step parsing utilities.

use crate::script::Step;
use crate::types::Entrant;

/// Parses a step string into a [`Step`].
///
/// ## Supported Formats
///
/// - `join:NAME` - a regular entrant joins the back of the line
/// - `join+:NAME` - an entrant holding a priority pass joins
/// - `serve` - serve the person at the front
/// - `serve:N` - serve a group of up to `N` people
/// - `bribe:NAME@POS` - a priority pass holder bribes their way to `POS`
/// - `size` - report how many people are waiting
///
/// Keywords are case-insensitive. Names keep their case and inner spaces.
///
/// ## Errors
///
/// Returns an error string if the step cannot be parsed.
///
/// ## Examples
///
/// ```
/// use waitline_lib::{parse_step, Entrant, Step};
///
/// let step = parse_step("join:Alice").unwrap();
/// assert_eq!(step, Step::Join(Entrant::regular("Alice")));
///
/// let step = parse_step("serve:2").unwrap();
/// assert_eq!(step, Step::ServeMany(2));
/// ```
pub fn parse_step(value: &str) -> Result<Step, String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err("step cannot be empty".to_string());
    }

    let (keyword, argument) = match trimmed.split_once(':') {
        Some((keyword, argument)) => (keyword.trim().to_lowercase(), Some(argument.trim())),
        None => (trimmed.to_lowercase(), None),
    };

    match (keyword.as_str(), argument) {
        ("join", Some(name)) => Ok(Step::Join(Entrant::regular(parse_name(name)?))),
        ("join+", Some(name)) => Ok(Step::Join(Entrant::with_priority_pass(parse_name(name)?))),
        ("serve", None) => Ok(Step::ServeOne),
        ("serve", Some(count)) => {
            let count: i64 = count
                .parse()
                .map_err(|_| "serve count must be a number".to_string())?;
            Ok(Step::ServeMany(count))
        }
        ("bribe", Some(argument)) => {
            let (name, position) = argument
                .rsplit_once('@')
                .ok_or_else(|| "expected bribe like bribe:Frank@2".to_string())?;
            let position: i64 = position
                .trim()
                .parse()
                .map_err(|_| "bribe position must be a number".to_string())?;
            Ok(Step::Bribe {
                entrant: Entrant::with_priority_pass(parse_name(name)?),
                position,
            })
        }
        ("size", None) => Ok(Step::Size),
        ("join" | "join+" | "bribe", None) => Err(format!("{keyword} needs a name")),
        ("size", Some(_)) => Err("size takes no argument".to_string()),
        _ => Err("steps must be join, join+, serve, bribe, or size".to_string()),
    }
}

fn parse_name(name: &str) -> Result<String, String> {
    let name = name.trim();

    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_step_accepts_join() {
        let step = parse_step("join:Alice").expect("valid step");
        assert_eq!(step, Step::Join(Entrant::regular("Alice")));
    }

    #[test]
    fn parse_step_accepts_priority_join() {
        let step = parse_step("join+:Frank").expect("valid step");
        assert_eq!(step, Step::Join(Entrant::with_priority_pass("Frank")));
    }

    #[test]
    fn parse_step_keeps_name_case_and_spaces() {
        let step = parse_step("JOIN: Mary Ann ").expect("valid step");
        assert_eq!(step, Step::Join(Entrant::regular("Mary Ann")));
    }

    #[test]
    fn parse_step_accepts_serve_one() {
        assert_eq!(parse_step("serve").expect("valid step"), Step::ServeOne);
    }

    #[test]
    fn parse_step_accepts_negative_serve_count() {
        assert_eq!(parse_step("serve:-2").expect("valid step"), Step::ServeMany(-2));
    }

    #[test]
    fn parse_step_accepts_bribe() {
        let step = parse_step("bribe:Frank@2").expect("valid step");
        assert_eq!(
            step,
            Step::Bribe {
                entrant: Entrant::with_priority_pass("Frank"),
                position: 2,
            }
        );
    }

    #[test]
    fn parse_step_splits_bribe_on_last_at_sign() {
        let step = parse_step("bribe:frank@home@-1").expect("valid step");
        assert_eq!(
            step,
            Step::Bribe {
                entrant: Entrant::with_priority_pass("frank@home"),
                position: -1,
            }
        );
    }

    #[test]
    fn parse_step_accepts_size() {
        assert_eq!(parse_step(" Size ").expect("valid step"), Step::Size);
    }

    #[test]
    fn parse_step_rejects_empty_input() {
        assert!(parse_step("   ").is_err());
    }

    #[test]
    fn parse_step_rejects_empty_name() {
        assert!(parse_step("join:").is_err());
        assert!(parse_step("bribe:@1").is_err());
    }

    #[test]
    fn parse_step_rejects_missing_name() {
        assert_eq!(parse_step("join").unwrap_err(), "join needs a name");
    }

    #[test]
    fn parse_step_rejects_bad_numbers() {
        assert!(parse_step("serve:lots").is_err());
        assert!(parse_step("bribe:Frank@front").is_err());
        assert!(parse_step("bribe:Frank").is_err());
    }

    #[test]
    fn parse_step_rejects_unknown_keyword() {
        assert!(parse_step("cut:Mallory").is_err());
    }
}
