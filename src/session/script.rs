use std::str::FromStr;
use std::time::Duration;

use crate::foundation::core::Viewport;
use crate::foundation::error::{BookError, BookResult};

/// One step of a navigation script.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptStep {
    /// `next`: flip forward and wait for the flip to finish.
    Next,
    /// `prev`: flip backward and wait for the flip to finish.
    Prev,
    /// `first`: jump to the cover.
    First,
    /// `last`: jump to the last page.
    Last,
    /// `to:N`: jump to page `N`.
    To(usize),
    /// `wait:MS`: let time pass.
    Wait(Duration),
    /// `resize:WxH`: new viewport.
    Resize(Viewport),
}

/// Ordered navigation steps, written as `next,next,to:6,wait:200,resize:1280x720`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavScript {
    /// Steps in execution order.
    pub steps: Vec<ScriptStep>,
}

impl NavScript {
    /// Parse a script. Steps are separated by commas and/or whitespace.
    pub fn parse(src: &str) -> BookResult<Self> {
        let steps = src
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(parse_step)
            .collect::<BookResult<Vec<_>>>()?;
        Ok(Self { steps })
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for NavScript {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_step(token: &str) -> BookResult<ScriptStep> {
    let lower = token.to_ascii_lowercase();
    let (op, arg) = match lower.split_once(':') {
        Some((op, arg)) => (op, Some(arg)),
        None => (lower.as_str(), None),
    };

    let step = match (op, arg) {
        ("next", None) => ScriptStep::Next,
        ("prev", None) => ScriptStep::Prev,
        ("first", None) => ScriptStep::First,
        ("last", None) => ScriptStep::Last,
        ("to", Some(arg)) => ScriptStep::To(parse_num(token, arg)?),
        ("wait", Some(arg)) => ScriptStep::Wait(Duration::from_millis(parse_num(token, arg)?)),
        ("resize", Some(arg)) => {
            let (w, h) = arg.split_once('x').ok_or_else(|| {
                BookError::validation(format!("script step '{token}': expected WxH"))
            })?;
            let w: u32 = parse_num(token, w)?;
            let h: u32 = parse_num(token, h)?;
            ScriptStep::Resize(Viewport::new(f64::from(w), f64::from(h)))
        }
        _ => {
            return Err(BookError::validation(format!(
                "unknown script step '{token}'"
            )));
        }
    };
    Ok(step)
}

fn parse_num<N: FromStr>(token: &str, arg: &str) -> BookResult<N> {
    arg.trim().parse::<N>().map_err(|_| {
        BookError::validation(format!("script step '{token}': '{arg}' is not a number"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
