use log::debug;

use crate::api::TileMapApi;
use crate::error::MapError;
use crate::types::*;

/// Fixed-size grid of solid/empty cells, indexed `y * width + x`.
///
/// Dimensions never change after construction. The map is only read during
/// play, so one instance can be shared by every entity resolving against it.
#[derive(Clone, Debug)]
pub struct TileMap {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    edge: EdgePolicy,
}

impl TileMap {
    /// All-empty map.
    pub fn new(width: u32, height: u32) -> Result<Self, MapError> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
            edge: EdgePolicy::default(),
        })
    }

    /// Map over an existing row-major solidity buffer.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Result<Self, MapError> {
        Self::check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(MapError::CellCountMismatch { expected, actual: cells.len() });
        }
        let map = Self { width, height, cells, edge: EdgePolicy::default() };
        debug!("tile map {}x{} built, {} solid cells", width, height, map.solid_count());
        Ok(map)
    }

    /// Map over a level buffer where any non-zero byte is solid.
    pub fn from_bytes(width: u32, height: u32, solids: &[u8]) -> Result<Self, MapError> {
        Self::from_cells(width, height, solids.iter().map(|&b| b != 0).collect())
    }

    /// Map whose cell `(x, y)` is solid iff `f(x, y)`.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> bool,
    ) -> Result<Self, MapError> {
        Self::check_dimensions(width, height)?;
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self::from_cells(width, height, cells)
    }

    /// Replace the out-of-range policy (default: [`EdgePolicy::Solid`]).
    pub fn with_edge_policy(mut self, edge: EdgePolicy) -> Self {
        self.edge = edge;
        self
    }

    /// Set one cell. Level setup only: never call this while a sweep may be
    /// reading the map. Out-of-range coordinates are ignored.
    pub fn set_solid(&mut self, x: u32, y: u32, solid: bool) {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.cells[idx] = solid;
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s).count()
    }

    fn check_dimensions(width: u32, height: u32) -> Result<(), MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyDimensions { width, height });
        }
        // Cell queries take i32 coordinates.
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(MapError::TooLarge { width, height });
        }
        Ok(())
    }

    #[inline]
    fn cell(&self, x: u32, y: u32) -> bool {
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

impl TileMapApi for TileMap {
    fn is_solid(&self, x: i32, y: i32) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        if x >= 0 && y >= 0 && x < w && y < h {
            return self.cell(x as u32, y as u32);
        }
        match self.edge {
            EdgePolicy::Solid => true,
            EdgePolicy::Open => false,
            EdgePolicy::Wrap => self.cell(x.rem_euclid(w) as u32, y.rem_euclid(h) as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(
            TileMap::new(0, 4).unwrap_err(),
            MapError::EmptyDimensions { width: 0, height: 4 }
        );
        assert_eq!(
            TileMap::from_bytes(2, 2, &[0, 1, 0]).unwrap_err(),
            MapError::CellCountMismatch { expected: 4, actual: 3 }
        );
    }

    #[test]
    fn test_rejects_dimensions_past_i32_range() {
        assert_eq!(
            TileMap::new(u32::MAX, 1).unwrap_err(),
            MapError::TooLarge { width: u32::MAX, height: 1 }
        );
        assert_eq!(
            TileMap::from_cells(1, 1 << 31, Vec::new()).unwrap_err(),
            MapError::TooLarge { width: 1, height: 1 << 31 }
        );
    }

    #[test]
    fn test_set_solid_indexes_row_major() {
        let mut map = TileMap::new(5, 3).unwrap();
        map.set_solid(4, 2, true);
        map.set_solid(0, 1, true);
        map.set_solid(5, 0, true);
        assert!(map.is_solid(4, 2));
        assert!(map.is_solid(0, 1));
        assert!(!map.is_solid(4, 0));
        assert_eq!(map.solid_count(), 2);
    }

    #[test]
    fn test_is_solid_inside_and_boundary_wall() {
        let map = TileMap::from_bytes(3, 2, &[0, 1, 0, 0, 0, 7]).unwrap();
        assert!(!map.is_solid(0, 0));
        assert!(map.is_solid(1, 0));
        assert!(map.is_solid(2, 1));
        assert_eq!(map.solid_count(), 2);
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 2), (i32::MIN, i32::MAX)] {
            assert!(map.is_solid(x, y), "({x},{y}) should be wall");
        }
    }

    #[test]
    fn test_edge_policies() {
        let map = TileMap::from_fn(4, 4, |x, y| x == 0 && y == 0).unwrap();
        let open = map.clone().with_edge_policy(EdgePolicy::Open);
        assert!(!open.is_solid(-1, 0));
        assert!(!open.is_solid(4, 4));
        let wrap = map.with_edge_policy(EdgePolicy::Wrap);
        assert!(wrap.is_solid(4, 0));
        assert!(wrap.is_solid(-4, 8));
        assert!(!wrap.is_solid(-1, 0));
    }

    #[test]
    fn test_overlaps_solid_outward_rounding() {
        let mut map = TileMap::new(10, 10).unwrap();
        map.set_solid(5, 5, true);
        // Any fractional reach into the tile counts.
        assert!(map.overlaps_solid(Rect::new(4.0, 5.0, 1.5, 1.0)));
        assert!(map.overlaps_solid(Rect::new(4.2, 4.2, 1.0, 1.0)));
        // Box flush against the tile (right edge == 5) does not reach it.
        assert!(!map.overlaps_solid(Rect::new(4.0, 5.0, 1.0, 1.0)));
        assert!(!map.overlaps_solid(Rect::new(0.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlaps_solid_outside_grid() {
        let map = TileMap::new(4, 4).unwrap();
        assert!(map.overlaps_solid(Rect::new(10.0, 10.0, 1.0, 1.0)));
        assert!(map.overlaps_solid(Rect::new(-0.5, 0.0, 1.0, 1.0)));
        assert!(!map.overlaps_solid(Rect::new(0.0, 0.0, 4.0, 4.0)));
    }

    #[test]
    fn test_can_occupy_with_offset_box() {
        let map = TileMap::from_fn(20, 20, |_, y| y == 12).unwrap();
        let standing = Aabb::new(Vec2::new(-3.0, -7.0), Vec2::new(7.0, 8.0));
        assert!(map.can_occupy(standing, Vec2::new(10.0, 11.0)));
        assert!(!map.can_occupy(standing, Vec2::new(10.0, 12.0)));
    }
}
