//! Ordering vocabulary for positioned collections.
//!
//! FAQs, reviews, classes and gallery images each carry an integer `position`
//! that is dense within the collection: `N` rows occupy exactly `0..N`. Rows
//! are appended at the end, moved one step at a time by swapping with their
//! neighbour, and (depending on [`GapPolicy`]) the sequence is compacted when a
//! row is deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Position};

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Position a row currently at `current` would occupy after the move.
    ///
    /// Up is towards the head of the list (smaller positions).
    pub fn target(self, current: Position) -> Position {
        match self {
            Direction::Up => current - 1,
            Direction::Down => current + 1,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(CoreError::Validation(
                "Direction must be \"up\" or \"down\"".to_string(),
            )),
        }
    }
}

/// What happens to the positions of surviving rows when a row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Leave the deleted row's position unused. Order is preserved but the
    /// sequence is no longer dense.
    #[default]
    Keep,
    /// Shift every row after the deleted one down by one so the sequence
    /// stays dense.
    Compact,
}

impl FromStr for GapPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(GapPolicy::Keep),
            "compact" => Ok(GapPolicy::Compact),
            other => Err(CoreError::Validation(format!(
                "Unknown gap policy '{other}'. Valid policies: keep, compact"
            ))),
        }
    }
}

/// Result of a single-step move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The row exchanged positions with its neighbour.
    Swapped {
        id: DbId,
        displaced_id: DbId,
        from: Position,
        to: Position,
    },
    /// The row is already first (moving up) or last (moving down). Nothing
    /// was written.
    AtBoundary { id: DbId, position: Position },
}

impl MoveOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, MoveOutcome::AtBoundary { .. })
    }
}

/// Whether `positions` is exactly `{0, 1, .., len - 1}` in any order.
pub fn is_dense(positions: &[Position]) -> bool {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(expected, &actual)| actual == expected as Position)
}
