//! Court geometry
//!
//! The court is a side-view rectangle in a y-down coordinate space: x grows
//! toward the right wall, y grows toward the ground, so gravity is +y and
//! "upward" speeds are negative. A net bisects the court at mid-x, rising
//! from the ground line to `ground_y - net_height`.

use serde::{Deserialize, Serialize};

/// Which half of the court an entity belongs to (or the ball occupies)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposing side
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into `[left, right]` arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Sign of "toward the opponent" along x: +1 for left, -1 for right
    #[inline]
    pub fn outward_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Fixed court geometry, immutable for the lifetime of a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    /// Court width (left wall at x=0, right wall at x=width)
    pub width: f32,
    /// Court height (framing only; the ball has no ceiling)
    pub height: f32,
    /// Net height above the ground line
    pub net_height: f32,
    /// Ground line y
    pub ground_y: f32,
    /// Net half-thickness around mid-x
    pub net_half_width: f32,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 240.0,
            net_height: 64.0,
            ground_y: 208.0,
            net_half_width: 4.0,
        }
    }
}

impl Court {
    /// Midline x, where the net stands
    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }

    /// y of the net's top edge
    #[inline]
    pub fn net_top_y(&self) -> f32 {
        self.ground_y - self.net_height
    }

    /// Side owning an x position. The midline itself counts as right for
    /// ownership; ground scoring treats it separately (no-score column).
    #[inline]
    pub fn side_of(&self, x: f32) -> Side {
        if x < self.mid_x() { Side::Left } else { Side::Right }
    }

    /// Horizontal clamp range for a circle of `radius` confined to `side`
    pub fn half_court_range(&self, side: Side, radius: f32) -> (f32, f32) {
        match side {
            Side::Left => (radius, self.mid_x() - radius),
            Side::Right => (self.mid_x() + radius, self.width - radius),
        }
    }

    /// Whether a circle at `x` overlaps the net band horizontally
    #[inline]
    pub fn in_net_band(&self, x: f32, radius: f32) -> bool {
        (x - self.mid_x()).abs() < radius + self.net_half_width
    }

    /// x of a side's back wall
    #[inline]
    pub fn back_wall_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.width,
        }
    }
}
