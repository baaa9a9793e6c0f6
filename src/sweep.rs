use glam::Vec2;
use log::{debug, trace, warn};

use crate::api::{SweepResolverApi, TileMapApi};
use crate::config::CollisionConfig;
use crate::types::*;

/// Stepwise swept-AABB resolver (DDA-style walk along the dominant axis).
///
/// Stateless apart from its tie-break policy; every call builds its own
/// sweep-local state, so one resolver can serve any number of entities.
#[derive(Copy, Clone, Debug, Default)]
pub struct SweepResolver {
    /// Fast axis when `|dx| == |dy|`.
    pub tie_break: TieBreak,
}

impl SweepResolver {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn from_config(cfg: &CollisionConfig) -> Self {
        Self { tie_break: cfg.tie_break }
    }
}

impl SweepResolverApi for SweepResolver {
    fn resolve<M: TileMapApi + ?Sized>(
        &self,
        map: &M,
        bbox: Aabb,
        previous: Vec2,
        candidate: Vec2,
    ) -> CollisionResult {
        // Nothing solid anywhere in the swept region: accept the move outright.
        let swept = bbox.at(previous).union(&bbox.at(candidate));
        if !map.overlaps_solid(swept) {
            trace!("sweep {:?} -> {:?} clear", previous, candidate);
            return CollisionResult::free(candidate);
        }

        let mut sweep = Sweep::new(previous, candidate, self.tie_break);
        sweep.run(map, bbox);
        sweep.finish()
    }
}

/// Pick the axis stepped by whole units.
fn fast_axis(delta: Vec2, tie_break: TieBreak) -> Axis {
    let (dx, dy) = (delta.x.abs(), delta.y.abs());
    if dx > dy {
        Axis::X
    } else if dy > dx {
        Axis::Y
    } else {
        match tie_break {
            TieBreak::Horizontal => Axis::X,
            TieBreak::Vertical => Axis::Y,
        }
    }
}

/// `+1`, `-1` or `0`; unlike `f32::signum`, zero maps to zero.
#[inline]
fn unit_sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Per-call walk state. `target` shrinks onto `pos` as axes lock.
struct Sweep {
    pos: Vec2,
    target: Vec2,
    step: Vec2,
    /// Original displacement; its signs pick the side flags.
    dir: Vec2,
    fast: Axis,
    slow: Axis,
    sides: CollisionSides,
    probes: u32,
}

impl Sweep {
    fn new(from: Vec2, to: Vec2, tie_break: TieBreak) -> Self {
        let delta = to - from;
        let fast = fast_axis(delta, tie_break);
        let slow = fast.other();

        let mut step = Vec2::ZERO;
        let run = delta[fast.index()].abs();
        if run > 0.0 {
            step[slow.index()] = delta[slow.index()] / run;
        }
        step[fast.index()] = unit_sign(delta[fast.index()]);

        Self {
            pos: from,
            target: to,
            step,
            dir: delta,
            fast,
            slow,
            sides: CollisionSides::default(),
            // The union-rect probe that sent us here.
            probes: 1,
        }
    }

    fn run<M: TileMapApi + ?Sized>(&mut self, map: &M, bbox: Aabb) {
        while self.pos != self.target {
            self.advance(map, bbox, self.fast);
            self.advance(map, bbox, self.slow);
        }
    }

    fn advance<M: TileMapApi + ?Sized>(&mut self, map: &M, bbox: Aabb, axis: Axis) {
        let i = axis.index();
        if self.pos[i] == self.target[i] {
            return;
        }

        let prev = self.pos[i];
        let remaining = self.target[i] - prev;
        let mut next = if remaining.abs() <= self.step[i].abs() {
            self.target[i]
        } else {
            prev + self.step[i]
        };
        if next == prev {
            // Step smaller than half an ulp: creep one ulp so no row is skipped.
            next = if remaining > 0.0 { prev.next_up() } else { prev.next_down() };
        }

        self.pos[i] = next;
        self.probes += 1;
        if !map.overlaps_solid(bbox.at(self.pos)) {
            return;
        }

        self.sides.mark(axis, self.dir[i]);

        let snapped = if next == next.floor() {
            prev.floor()
        } else if self.dir[i] > 0.0 {
            next.floor()
        } else {
            next.ceil()
        };
        self.pos[i] = snapped;

        // Integer-sized boxes always fit at the snapped boundary; fractional
        // sizes may not, in which case the last accepted value stands.
        if snapped != prev {
            self.probes += 1;
            if map.overlaps_solid(bbox.at(self.pos)) {
                warn!(
                    "snap {:?} to {} overlaps solid, keeping {}",
                    axis, snapped, prev
                );
                self.pos[i] = prev;
            }
        }

        debug!(
            "sweep hit on {:?} (dir {}): rejected {}, settled at {}",
            axis, self.dir[i], next, self.pos[i]
        );

        self.target[i] = self.pos[i];
        self.step[i] = 0.0;
        if axis == self.fast {
            let s = self.slow.index();
            self.step[s] = unit_sign(self.step[s]);
        }
    }

    fn finish(self) -> CollisionResult {
        CollisionResult { sides: self.sides, resolved: self.pos, probes: self.probes }
    }
}
