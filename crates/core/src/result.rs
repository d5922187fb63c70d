//! Solver output representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output of a cutting-stock solve: pieces grouped per stock unit plus the
/// total leftover length.
///
/// A plain value record, produced fresh by a solver and never mutated. The
/// solver guarantees consistency with the job it solved (each stock's piece
/// lengths plus cut losses fit the stock length); this type only carries the
/// assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutResult {
    /// Piece lengths cut from each stock unit, in cut order.
    pub stocks: Vec<Vec<u32>>,

    /// Total leftover (wasted) length across all stocks.
    pub trimmings: u64,
}

impl CutResult {
    /// Creates a result from stock assignments and total trimmings.
    pub fn new(stocks: Vec<Vec<u32>>, trimmings: u64) -> Self {
        Self { stocks, trimmings }
    }

    /// Returns the number of stock units used.
    pub fn stock_count(&self) -> usize {
        self.stocks.len()
    }

    /// Returns the total number of pieces across all stocks.
    pub fn piece_count(&self) -> usize {
        self.stocks.iter().map(Vec::len).sum()
    }

    /// Returns true if no stock was used.
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}
