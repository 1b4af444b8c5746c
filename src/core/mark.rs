//! Player marks and per-mark storage.
//!
//! ## Mark
//!
//! The two player symbols. `X` is the first player (the human), `O` the
//! second (the scripted opponent). A board cell holds `Option<Mark>`.
//!
//! ## MarkMap
//!
//! Fixed two-slot storage indexed by `Mark`, serialized as `{"X": .., "O": ..}`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player.
    X,
    /// Second player (the opponent in bot games).
    O,
}

impl Mark {
    /// Both marks, first player first.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// Returns the other mark.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Slot index used by `MarkMap` and position keys.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Per-mark data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use sliding_ttt::core::{Mark, MarkMap};
///
/// let mut wins: MarkMap<u32> = MarkMap::with_value(0);
/// wins[Mark::O] += 1;
///
/// assert_eq!(wins[Mark::X], 0);
/// assert_eq!(wins[Mark::O], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    #[serde(rename = "X")]
    x: T,
    #[serde(rename = "O")]
    o: T,
}

impl<T> MarkMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Mark) -> T) -> Self {
        Self {
            x: factory(Mark::X),
            o: factory(Mark::O),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            o: value,
        }
    }

    /// Get a reference to a mark's data.
    #[must_use]
    pub fn get(&self, mark: Mark) -> &T {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Get a mutable reference to a mark's data.
    pub fn get_mut(&mut self, mark: Mark) -> &mut T {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Iterate over (Mark, &T) pairs, `X` first.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        [(Mark::X, &self.x), (Mark::O, &self.o)].into_iter()
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        self.get(mark)
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        self.get_mut(mark)
    }
}
