//! Rally bookkeeping: touch counts, possession side, fault detection

use serde::{Deserialize, Serialize};

use super::court::Side;

/// Per-side touch allowance; exceeding it loses the rally
pub const TOUCH_LIMIT: u8 = 3;

/// Touch ledger for the rally in progress.
///
/// Touches belong to a side, not a paddle. The ledger resets whenever the
/// ball's center crosses the net plane (possession change) and on every
/// serve. Consecutive contact frames by the same paddle count once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RallyState {
    /// Consecutive touches for the current possession, `[left, right]`
    pub touches: [u8; 2],
    /// Roster slot that touched last; dedupes continuous contact
    pub last_touch: Option<usize>,
    /// Half the ball's center was in at the last side check
    pub ball_side: Side,
}

impl RallyState {
    pub fn new(ball_side: Side) -> Self {
        Self {
            touches: [0, 0],
            last_touch: None,
            ball_side,
        }
    }

    /// Fresh ledger for a serve; the ball starts on the server's half
    pub fn reset_for_serve(&mut self, server: Side) {
        self.touches = [0, 0];
        self.last_touch = None;
        self.ball_side = server;
    }

    /// Track which half the ball is in; a change is a possession change and
    /// wipes the ledger.
    pub fn update_side(&mut self, now: Side) {
        if now != self.ball_side {
            self.ball_side = now;
            self.touches = [0, 0];
            self.last_touch = None;
        }
    }

    /// Record a paddle contact. Returns whether it counted; a repeat by the
    /// paddle that already touched last does not.
    pub fn register_touch(&mut self, slot: usize, side: Side) -> bool {
        if self.last_touch == Some(slot) {
            return false;
        }
        self.last_touch = Some(slot);
        self.touches[side.index()] += 1;
        true
    }

    #[inline]
    pub fn touches(&self, side: Side) -> u8 {
        self.touches[side.index()]
    }

    /// Side that has gone over the touch allowance, if any
    pub fn fault_side(&self) -> Option<Side> {
        if self.touches[Side::Left.index()] > TOUCH_LIMIT {
            Some(Side::Left)
        } else if self.touches[Side::Right.index()] > TOUCH_LIMIT {
            Some(Side::Right)
        } else {
            None
        }
    }
}
