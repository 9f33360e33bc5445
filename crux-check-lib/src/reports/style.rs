use crate::assess::Score;
use owo_colors::OwoColorize;

/// Semantic meaning of a piece of report text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Neutral,
}

impl From<Score> for Outcome {
    fn from(score: Score) -> Self {
        match score {
            Score::Pass => Self::Pass,
            Score::Fail | Score::Error(_) => Self::Fail,
            Score::Unavailable => Self::Neutral,
        }
    }
}

/// Presentation policy mapping an [`Outcome`] to a decoration of the text.
pub trait Decorator {
    fn decorate(&self, text: &str, outcome: Outcome) -> String;
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecorator;

impl Decorator for PlainDecorator {
    fn decorate(&self, text: &str, _outcome: Outcome) -> String {
        text.to_string()
    }
}

/// Paints text with ANSI colors: green for pass, red for fail, white otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDecorator;

impl Decorator for AnsiDecorator {
    fn decorate(&self, text: &str, outcome: Outcome) -> String {
        match outcome {
            Outcome::Pass => text.green().to_string(),
            Outcome::Fail => text.red().to_string(),
            Outcome::Neutral => text.white().to_string(),
        }
    }
}

/// Pick a decorator for the given color preference.
#[must_use]
pub fn decorator(use_colors: bool) -> Box<dyn Decorator> {
    if use_colors { Box::new(AnsiDecorator) } else { Box::new(PlainDecorator) }
}
