//! Pointer session scripts.
//!
//! A script is a list of steps separated by `;` or newlines:
//!
//! ```text
//! down 150 25 @0; up @120
//! down 100 50 @300
//! move 120 40 @340; leave @360; tick @900
//! ```
//!
//! Coordinates are element-local logical pixels, `@t` is milliseconds since
//! the start of the replay. Times must not go backwards.

use std::fmt;
use std::time::Duration;

use relief_engine::coords::Vec2;

/// A malformed script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    pub message: String,
    /// 1-based line of the offending token.
    pub line: usize,
    /// 1-based column of the offending token.
    pub col: usize,
}

impl ScriptError {
    fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "script error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ScriptError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Down(Vec2),
    Move(Vec2),
    /// Release; without coordinates the last known pointer position is used.
    Up(Option<Vec2>),
    Leave,
    /// No input; only lets time pass.
    Tick,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
    pub at: Duration,
    pub action: Action,
    pub line: usize,
    pub col: usize,
}

/// Whitespace-separated word with its 1-based column.
#[derive(Debug, Copy, Clone)]
struct Word<'a> {
    text: &'a str,
    col: usize,
}

pub fn parse_script(src: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps: Vec<Step> = Vec::new();

    for (line_idx, line) in src.lines().enumerate() {
        let line_no = line_idx + 1;
        let mut offset = 0;

        for chunk in line.split(';') {
            let words = split_words(chunk, offset);
            offset += chunk.len() + 1;

            if words.is_empty() {
                continue;
            }

            let step = parse_step(&words, line_no)?;
            if let Some(prev) = steps.last() {
                if step.at < prev.at {
                    return Err(ScriptError::new(
                        format!("time goes backwards ({} ms after {} ms)", step.at.as_millis(), prev.at.as_millis()),
                        step.line,
                        step.col,
                    ));
                }
            }
            steps.push(step);
        }
    }

    Ok(steps)
}

fn split_words(chunk: &str, offset: usize) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in chunk.char_indices() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                words.push(Word { text: &chunk[s..i], col: offset + s + 1 });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(Word { text: &chunk[s..], col: offset + s + 1 });
    }
    words
}

fn parse_step(words: &[Word<'_>], line: usize) -> Result<Step, ScriptError> {
    let head = words[0];

    let (time_word, args) = match words.split_last() {
        Some((last, rest)) if last.text.starts_with('@') && !rest.is_empty() => (*last, &rest[1..]),
        _ => return Err(ScriptError::new(format!("`{}` needs a time like `@120`", head.text), line, head.col)),
    };
    let at = parse_time(time_word, line)?;

    let action = match head.text {
        "down" => Action::Down(parse_point(head, args, line)?),
        "move" => Action::Move(parse_point(head, args, line)?),
        "up" if args.is_empty() => Action::Up(None),
        "up" => Action::Up(Some(parse_point(head, args, line)?)),
        "leave" | "tick" if !args.is_empty() => {
            return Err(ScriptError::new(format!("`{}` takes no coordinates", head.text), line, args[0].col));
        }
        "leave" => Action::Leave,
        "tick" => Action::Tick,
        other => return Err(ScriptError::new(format!("unknown action `{other}`"), line, head.col)),
    };

    Ok(Step { at, action, line, col: head.col })
}

fn parse_time(word: Word<'_>, line: usize) -> Result<Duration, ScriptError> {
    let digits = &word.text[1..];
    digits
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ScriptError::new(format!("bad time `{}`", word.text), line, word.col))
}

fn parse_point(head: Word<'_>, args: &[Word<'_>], line: usize) -> Result<Vec2, ScriptError> {
    let [x, y] = args else {
        return Err(ScriptError::new(format!("`{}` needs x and y", head.text), line, head.col));
    };
    Ok(Vec2::new(parse_coord(*x, line)?, parse_coord(*y, line)?))
}

fn parse_coord(word: Word<'_>, line: usize) -> Result<f32, ScriptError> {
    match word.text.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ScriptError::new(format!("bad coordinate `{}`", word.text), line, word.col)),
    }
}
