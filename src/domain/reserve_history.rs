//! Append-only log of reserve snapshots.

use core::slice;

use super::ReservePair;

/// Ordered trajectory of pool reserves.
///
/// The first entry is the pool's initial state; every successful trade
/// appends exactly one entry.  Entries are never removed or rewritten, so
/// `len() == 1 + trades executed`.
///
/// Only the owning pool can append; callers get read access for
/// inspection and plotting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveHistory {
    entries: Vec<ReservePair>,
}

impl ReserveHistory {
    /// Starts a history seeded with the initial reserves.
    pub(crate) fn seeded(initial: ReservePair) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub(crate) fn record(&mut self, reserves: ReservePair) {
        self.entries.push(reserves);
    }

    /// Number of recorded snapshots (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history is seeded at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reserves the pool was created with.
    #[must_use]
    pub fn initial(&self) -> Option<&ReservePair> {
        self.entries.first()
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<&ReservePair> {
        self.entries.last()
    }

    /// Snapshot at `index`, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ReservePair> {
        self.entries.get(index)
    }

    /// Number of trades recorded after the initial snapshot.
    #[must_use]
    pub fn trade_count(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Iterates over the snapshots, oldest first.
    pub fn iter(&self) -> slice::Iter<'_, ReservePair> {
        self.entries.iter()
    }

    /// Borrows all snapshots, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[ReservePair] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a ReserveHistory {
    type Item = &'a ReservePair;
    type IntoIter = slice::Iter<'a, ReservePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
