// src/core/types.rs

/// An index into the fixed grid layout.
pub type GridPoint = usize;

/// Number of points in the grid.
pub const GRID_POINT_COUNT: usize = 11;

const RT3: f64 = 1.732_050_807_568_877_2;

// Point indices:
//         0
//   5           1
//      9      6
//         10
//      8      7
//   4           2
//         3
const GRID_LAYOUT: [(f64, f64); GRID_POINT_COUNT] = [
    (0.0, -1.0),
    (RT3 / 2.0, -0.5),
    (RT3 / 2.0, 0.5),
    (0.0, 1.0),
    (-RT3 / 2.0, 0.5),
    (-RT3 / 2.0, -0.5),
    (RT3 / 4.0, -0.25),
    (RT3 / 4.0, 0.25),
    (-RT3 / 4.0, 0.25),
    (-RT3 / 4.0, -0.25),
    (0.0, 0.0),
];

/// Position of a grid point on a pad whose glyph is centred at `center`
/// and spans `radius` pixels. Returns None for an index outside the grid.
pub fn grid_point_position(
    center: (f64, f64),
    radius: f64,
    index: GridPoint,
) -> Option<(f64, f64)> {
    GRID_LAYOUT
        .get(index)
        .map(|&(ux, uy)| (center.0 + radius * ux, center.1 + radius * uy))
}

/// The lowest-indexed grid point within `hit_radius` of `(x, y)`.
pub fn grid_point_at(
    center: (f64, f64),
    radius: f64,
    hit_radius: f64,
    x: f64,
    y: f64,
) -> Option<GridPoint> {
    let hit_radius2 = hit_radius * hit_radius;
    (0..GRID_POINT_COUNT).find(|&index| {
        let (px, py) = grid_point_position(center, radius, index).unwrap_or_default();
        let (dx, dy) = (px - x, py - y);
        dx * dx + dy * dy <= hit_radius2
    })
}

/// Pixel geometry of an input pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadGeometry {
    pub center: (f64, f64),
    pub glyph_radius: f64,
    pub hit_radius: f64,
}

impl PadGeometry {
    /// Geometry of a square pad with edge length `size`.
    pub fn for_size(size: f64) -> Self {
        Self {
            center: (size / 2.0, size / 2.0),
            glyph_radius: size * 80.0 / 200.0,
            hit_radius: size / 20.0,
        }
    }

    pub fn point_at(&self, x: f64, y: f64) -> Option<GridPoint> {
        grid_point_at(self.center, self.glyph_radius, self.hit_radius, x, y)
    }

    pub fn position_of(&self, index: GridPoint) -> Option<(f64, f64)> {
        grid_point_position(self.center, self.glyph_radius, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_point_hits_itself() {
        let geometry = PadGeometry::for_size(300.0);
        for index in 0..GRID_POINT_COUNT {
            let (x, y) = geometry.position_of(index).unwrap();
            assert_eq!(geometry.point_at(x, y), Some(index));
        }
    }

    #[test]
    fn centre_and_corner() {
        let geometry = PadGeometry::for_size(300.0);
        assert_eq!(geometry.point_at(150.0, 150.0), Some(10));
        assert_eq!(geometry.point_at(150.0, 30.0 + 2.0), Some(0));
        assert_eq!(geometry.point_at(0.0, 0.0), None);
    }

    #[test]
    fn out_of_grid_index_has_no_position() {
        assert!(grid_point_position((0.0, 0.0), 1.0, GRID_POINT_COUNT).is_none());
    }
}
