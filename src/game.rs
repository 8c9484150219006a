//! The sportsball substitution game.
//!
//! Drives a [`PriorityQueue`] from a line-oriented reader to a writer.
//! Each input line is either the control token `GO!`, which announces and
//! removes the highest-priority player, or a `name/priority` pair, which
//! enqueues a player. The run aborts on the first malformed priority,
//! reporting its 1-based line number.

use std::io::{self, BufRead, Write};

use crate::pqueue::{PriorityQueue, ResizeHook, DEFAULT_INITIAL_CAPACITY, DEFAULT_STEP_SIZE};
use crate::PqError;

/// Control token that substitutes the next player into the game.
const SUB_PLAYER_TOKEN: &str = "GO!";
/// Delimiter between a player's name and priority on a data line.
const INLINE_DELIMITER: char = '/';
/// Banner title.
const TITLE: &str = "SPORTSBALL!";
/// Column width of the banner and the closing rule.
const OUTPUT_WIDTH: usize = 80;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Error type for game runs.
///
/// Wraps queue errors (`PqError`) and I/O errors, and adds the input
/// parse failure. Kept separate from `PqError` so that `PqError` retains
/// `Clone + PartialEq`.
#[derive(Debug)]
pub enum GameError {
    /// Priority queue error.
    Queue(PqError),
    /// I/O error from `BufRead` or `Write` operations.
    Io(io::Error),
    /// A data line had a missing or malformed priority field.
    BadPriority {
        /// 1-based line number of the offending input line.
        line: usize,
    },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Queue(e) => write!(f, "{}", e),
            GameError::Io(e) => write!(f, "I/O error: {}", e),
            GameError::BadPriority { line } => {
                write!(f, "invalid priority on line {}", line)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Queue(e) => Some(e),
            GameError::Io(e) => Some(e),
            GameError::BadPriority { .. } => None,
        }
    }
}

impl From<PqError> for GameError {
    fn from(e: PqError) -> Self {
        GameError::Queue(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}

/// Result type for game runs.
pub type GameResult<T> = Result<T, GameError>;

// ---------------------------------------------------------------------------
// Game loop
// ---------------------------------------------------------------------------

/// Queue configuration and diagnostics for a game run.
#[derive(Clone)]
pub struct GameOptions {
    /// Starting capacity of the player queue.
    pub initial_capacity: usize,
    /// Capacity increment for queue resizes.
    pub step_size: usize,
    /// Optional resize diagnostics callback, installed on the queue.
    pub resize_hook: Option<ResizeHook>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            step_size: DEFAULT_STEP_SIZE,
            resize_hook: None,
        }
    }
}

/// Totals reported by a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Players still queued when the input ended.
    pub players_left: usize,
    /// Resize count accumulated by the player queue.
    pub num_resizes: u32,
    /// Input lines processed.
    pub lines: usize,
}

/// Run the game from `input` to `output`.
///
/// Reads the input to the end unless a malformed data line aborts the run.
/// The epilogue (player and resize totals) is only written for a clean
/// run.
pub fn play<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: &GameOptions,
) -> GameResult<GameSummary> {
    let mut queue: PriorityQueue<String> =
        PriorityQueue::with_config(options.initial_capacity, options.step_size)?;
    if let Some(hook) = &options.resize_hook {
        queue.set_shared_resize_hook(hook.clone());
    }

    let pad = OUTPUT_WIDTH - TITLE.len() - 5;
    writeln!(output, "### {} {}", TITLE, "#".repeat(pad))?;

    let mut lines = 0usize;
    for line in input.lines() {
        let line = line?;
        lines += 1;

        if line == SUB_PLAYER_TOKEN {
            if let Ok(name) = queue.top() {
                writeln!(output, "{} enters the game.", name)?;
                queue.pop();
            } else {
                writeln!(output, "No one is ready!")?;
            }
        } else {
            let (name, priority) = parse_player(&line, lines)?;
            queue.insert(name, priority)?;
        }
    }

    writeln!(output, "{}", "-".repeat(OUTPUT_WIDTH))?;
    writeln!(
        output,
        "At the end, there were {} players left.",
        queue.len()
    )?;
    writeln!(
        output,
        "The array was resized {} times.",
        queue.num_resizes()
    )?;

    Ok(GameSummary {
        players_left: queue.len(),
        num_resizes: queue.num_resizes(),
        lines,
    })
}

/// Split a `name/priority` data line, attributing failures to
/// `line_number`.
fn parse_player(line: &str, line_number: usize) -> GameResult<(String, i32)> {
    let (name, priority) = line
        .split_once(INLINE_DELIMITER)
        .ok_or(GameError::BadPriority { line: line_number })?;
    let priority: i32 = priority
        .trim()
        .parse()
        .map_err(|_| GameError::BadPriority { line: line_number })?;
    Ok((name.to_string(), priority))
}
