use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space rectangle in tile units (min corner + size).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let min = self.min.min(other.min);
        let max = self.max().max(other.max());
        Rect { min, size: max - min }
    }

    pub fn translate(&self, delta: Vec2) -> Rect {
        Rect { min: self.min + delta, size: self.size }
    }
}

/// Entity-local bounding box. `offset` is relative to the entity anchor and may be negative.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb {
    pub offset: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(offset: Vec2, size: Vec2) -> Self {
        Self { offset, size }
    }

    /// Box anchored at the origin (offset `(0,0)`).
    pub fn sized(width: f32, height: f32) -> Self {
        Self { offset: Vec2::ZERO, size: Vec2::new(width, height) }
    }

    /// World-space rectangle with the entity anchor at `anchor`.
    #[inline]
    pub fn at(&self, anchor: Vec2) -> Rect {
        Rect { min: self.offset + anchor, size: self.size }
    }
}

/// Grid axis; doubles as an index into `Vec2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Which axis becomes the fast (unit-stepped) axis when `|dx| == |dy|`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    #[default]
    Horizontal,
    Vertical,
}

/// How a tile map answers queries for cells outside `[0,width) x [0,height)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// The grid boundary is an implicit wall.
    #[default]
    Solid,
    /// Everything outside the grid is empty.
    Open,
    /// Coordinates wrap around toroidally.
    Wrap,
}

/// Sides on which a sweep was stopped by solid tiles.
///
/// `bottom` means the box moved toward +y and hit something beneath it,
/// `top` the opposite; `left`/`right` follow the horizontal direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionSides {
    /// Record a hit on `axis` while moving in the direction of `dir`'s sign.
    pub fn mark(&mut self, axis: Axis, dir: f32) {
        match axis {
            Axis::X if dir > 0.0 => self.right = true,
            Axis::X => self.left = true,
            Axis::Y if dir > 0.0 => self.bottom = true,
            Axis::Y => self.top = true,
        }
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }
}

/// Output of a sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionResult {
    pub sides: CollisionSides,
    /// Furthest legal anchor position; equals the candidate on every axis that did not collide.
    pub resolved: Vec2,
    /// Rectangle-overlap queries issued (1 when the fast path accepted the move).
    pub probes: u32,
}

impl CollisionResult {
    /// Unobstructed move to `to`, settled by the single swept-region query.
    pub fn free(to: Vec2) -> Self {
        Self { sides: CollisionSides::default(), resolved: to, probes: 1 }
    }
}
