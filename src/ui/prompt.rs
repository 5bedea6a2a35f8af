//! Line-based prompting over any reader / writer pair.

use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};

/// Writes `question` (no newline) and reads one answer line.
/// Only the line terminator is stripped.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> AppResult<String> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InputClosed);
    }

    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_string())
}

/// Keeps asking until `parse` accepts the answer. After a rejected answer the
/// next question is built by `retry` from what the user typed.
pub fn ask_until<R, W, T, P, F>(
    input: &mut R,
    out: &mut W,
    question: &str,
    retry: F,
    parse: P,
) -> AppResult<T>
where
    R: BufRead,
    W: Write,
    P: Fn(&str) -> Option<T>,
    F: Fn(&str) -> String,
{
    let mut answer = ask(input, out, question)?;
    loop {
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }
        answer = ask(input, out, &retry(&answer))?;
    }
}
