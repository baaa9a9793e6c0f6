use glam::Vec2;

use crate::types::*;

/// Solidity oracle over an integer tile grid.
pub trait TileMapApi {
    /// Solidity of cell `(x, y)`. Every integer pair is a valid query; cells
    /// outside the grid answer according to the map's edge policy.
    fn is_solid(&self, x: i32, y: i32) -> bool;

    /// Conservative hit test: true iff any tile in the outward-rounded span
    /// `[floor(min), ceil(max))` of `rect` is solid. Any fractional reach into
    /// a tile counts; an edge lying flush on a tile boundary does not.
    fn overlaps_solid(&self, rect: Rect) -> bool {
        let x0 = rect.min.x.floor() as i32;
        let y0 = rect.min.y.floor() as i32;
        let max = rect.max();
        let x1 = max.x.ceil() as i32;
        let y1 = max.y.ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                if self.is_solid(x, y) {
                    return true;
                }
            }
        }
        false
    }

    /// True when `bbox` anchored at `anchor` is clear of solid tiles.
    fn can_occupy(&self, bbox: Aabb, anchor: Vec2) -> bool {
        !self.overlaps_solid(bbox.at(anchor))
    }
}

/// Continuous movement resolution against a tile grid.
pub trait SweepResolverApi {
    /// Move `bbox` from `previous` toward `candidate`, stopping each axis at
    /// the last tile boundary before a solid cell.
    fn resolve<M: TileMapApi + ?Sized>(
        &self,
        map: &M,
        bbox: Aabb,
        previous: Vec2,
        candidate: Vec2,
    ) -> CollisionResult;
}
