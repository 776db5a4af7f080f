use std::collections::HashMap;

use crate::types::Score;

/// Depth-keyed transposition table: `tt[depth]` maps a Zobrist key reached
/// at that remaining depth to its evaluation. A cached value at remaining
/// depth `d` is only sound for another visit at remaining depth `d`, since
/// deeper searches produce stronger results — hence one map per depth
/// rather than one shared table.
///
/// No aging, no replacement policy, no bound tag (exact/lower/upper): the
/// table is cleared wholesale at the start of every `choose_move` call, and
/// raw scores are stored and reused even though alpha-beta cutoffs make
/// them window-dependent. This is a known, deliberately preserved
/// unsoundness (see DESIGN.md) rather than an oversight.
pub struct TranspositionTable {
    tt: Vec<HashMap<u64, Score>>,
}

impl TranspositionTable {
    /// `max_depth` is the deepest remaining-depth slot ever probed or
    /// stored; depth 0 is included for the frontier.
    pub fn new(max_depth: u8) -> Self {
        TranspositionTable { tt: (0..=max_depth).map(|_| HashMap::new()).collect() }
    }

    pub fn get(&self, depth: u8, key: u64) -> Option<Score> {
        self.tt.get(depth as usize).and_then(|m| m.get(&key)).copied()
    }

    pub fn insert(&mut self, depth: u8, key: u64, score: Score) {
        if let Some(m) = self.tt.get_mut(depth as usize) {
            m.insert(key, score);
        }
    }

    /// Clears every depth slot. Called at the start of every `choose_move`
    /// call and again before each iterative-deepening pass.
    pub fn clear(&mut self) {
        for m in &mut self.tt {
            m.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut tt = TranspositionTable::new(4);
        tt.insert(3, 0xdead_beef, 1.5);
        assert_eq!(tt.get(3, 0xdead_beef), Some(1.5));
    }

    #[test]
    fn test_miss_returns_none() {
        let tt = TranspositionTable::new(4);
        assert_eq!(tt.get(2, 0x1234), None);
    }

    #[test]
    fn test_depth_keying_is_isolated() {
        let mut tt = TranspositionTable::new(4);
        tt.insert(2, 0xaaaa, 1.0);
        assert_eq!(tt.get(3, 0xaaaa), None);
    }

    #[test]
    fn test_clear_empties_all_depths() {
        let mut tt = TranspositionTable::new(4);
        tt.insert(1, 0xbeef, 2.0);
        tt.clear();
        assert_eq!(tt.get(1, 0xbeef), None);
    }
}
