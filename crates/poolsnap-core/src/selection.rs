//! Picking two snapshots out of the discovered set.
//!
//! The comparison engine never talks to a terminal. Callers pick a pair
//! through a [`PairSelector`]: [`FixedSelector`] for choices known up front
//! (CLI flags), [`PromptSelector`] for an interactive numbered menu over any
//! reader/writer pair.

use crate::diff::human_summary::display_label;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Why no pair could be selected.
///
/// These are reported to the user and end the workflow; they are not crashes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Need at least 2 files to compare (found {available})")]
    TooFewSnapshots { available: usize },

    #[error("Invalid input: '{input}' is not a number")]
    InvalidInput { input: String },

    #[error("Invalid selection: {choice} is not between 1 and {max}")]
    OutOfRange { choice: i64, max: usize },

    #[error("Failed to read selection: {0}")]
    Io(String),
}

/// Capability to pick two of N labelled items.
///
/// Returns 0-based indices into `labels`. The same index may be returned
/// twice.
pub trait PairSelector {
    fn select_pair(&mut self, labels: &[String]) -> Result<(usize, usize), SelectionError>;
}

fn ensure_pair_available(labels: &[String]) -> Result<(), SelectionError> {
    if labels.len() < 2 {
        return Err(SelectionError::TooFewSnapshots {
            available: labels.len(),
        });
    }
    Ok(())
}

fn check_range(choice: i64, len: usize) -> Result<usize, SelectionError> {
    match usize::try_from(choice) {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(SelectionError::OutOfRange { choice, max: len }),
    }
}

/// Parse a 1-based menu choice into a 0-based index.
///
/// Surrounding whitespace is ignored.
pub fn parse_choice(input: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let choice: i64 = trimmed.parse().map_err(|_| SelectionError::InvalidInput {
        input: trimmed.to_string(),
    })?;
    check_range(choice, len)
}

/// Selector for choices given up front, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSelector {
    pub first: i64,
    pub second: i64,
}

impl FixedSelector {
    pub fn new(first: i64, second: i64) -> Self {
        Self { first, second }
    }
}

impl PairSelector for FixedSelector {
    fn select_pair(&mut self, labels: &[String]) -> Result<(usize, usize), SelectionError> {
        ensure_pair_available(labels)?;
        Ok((
            check_range(self.first, labels.len())?,
            check_range(self.second, labels.len())?,
        ))
    }
}

/// Interactive numbered menu over a reader/writer pair.
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was shown
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, SelectionError> {
        let io_err = |e: std::io::Error| SelectionError::Io(e.to_string());
        write!(self.output, "{}", text).map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(io_err)? == 0 {
            return Err(SelectionError::InvalidInput {
                input: String::new(),
            });
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> PairSelector for PromptSelector<R, W> {
    fn select_pair(&mut self, labels: &[String]) -> Result<(usize, usize), SelectionError> {
        ensure_pair_available(labels)?;
        let io_err = |e: std::io::Error| SelectionError::Io(e.to_string());

        writeln!(self.output, "\nAvailable files:").map_err(io_err)?;
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, display_label(label)).map_err(io_err)?;
        }
        writeln!(self.output).map_err(io_err)?;

        let n = labels.len();
        let first = self.prompt(&format!("Select first file (1-{}): ", n))?;
        let second = self.prompt(&format!("Select second file (1-{}): ", n))?;

        Ok((parse_choice(&first, n)?, parse_choice(&second, n)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("snaps/pool_snapshot_{}.txt", i)).collect()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 2\n", 3), Ok(1));
        assert_eq!(parse_choice("1", 1), Ok(0));
        assert_eq!(
            parse_choice("abc", 3),
            Err(SelectionError::InvalidInput {
                input: "abc".to_string()
            })
        );
        assert_eq!(
            parse_choice("0", 3),
            Err(SelectionError::OutOfRange { choice: 0, max: 3 })
        );
        assert_eq!(
            parse_choice("-1", 3),
            Err(SelectionError::OutOfRange { choice: -1, max: 3 })
        );
        assert_eq!(
            parse_choice("4", 3),
            Err(SelectionError::OutOfRange { choice: 4, max: 3 })
        );
    }

    #[test]
    fn test_fixed_selector() {
        let mut selector = FixedSelector::new(2, 1);
        assert_eq!(selector.select_pair(&labels(3)), Ok((1, 0)));
        assert_eq!(
            FixedSelector::new(1, 5).select_pair(&labels(3)),
            Err(SelectionError::OutOfRange { choice: 5, max: 3 })
        );
    }

    #[test]
    fn test_too_few_snapshots_declines_before_prompting() {
        let mut selector = PromptSelector::new(Cursor::new("1\n1\n"), Vec::new());
        assert_eq!(
            selector.select_pair(&labels(1)),
            Err(SelectionError::TooFewSnapshots { available: 1 })
        );
        assert!(selector.into_output().is_empty());
    }

    #[test]
    fn test_prompt_selector_lists_basenames_and_reads_two_choices() {
        let mut selector = PromptSelector::new(Cursor::new("3\n1\n"), Vec::new());
        assert_eq!(selector.select_pair(&labels(3)), Ok((2, 0)));

        let shown = String::from_utf8(selector.into_output()).unwrap();
        assert!(shown.contains("1. pool_snapshot_1.txt\n"));
        assert!(shown.contains("3. pool_snapshot_3.txt\n"));
        assert!(shown.contains("Select first file (1-3): "));
        assert!(shown.contains("Select second file (1-3): "));
    }

    #[test]
    fn test_prompt_selector_eof_is_invalid_input() {
        let mut selector = PromptSelector::new(Cursor::new("2\n"), Vec::new());
        assert!(matches!(
            selector.select_pair(&labels(2)),
            Err(SelectionError::InvalidInput { .. })
        ));
    }
}
