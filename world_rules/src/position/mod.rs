//! Block positions - integer-aligned world coordinates.

use serde::{Deserialize, Serialize};

/// A position aligned to the world's block grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Create a position from block coordinates.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The block containing the given point. Fractional coordinates are
    /// floored, so (-0.5, 0.0, 0.5) lands in block (-1, 0, 0).
    pub fn containing(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
            z: z.floor() as i32,
        }
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_whole_coordinates() {
        assert_eq!(BlockPos::containing(3.0, 64.0, -2.0), BlockPos::new(3, 64, -2));
    }

    #[test]
    fn test_containing_floors_fractions() {
        assert_eq!(BlockPos::containing(3.9, 64.2, 7.5), BlockPos::new(3, 64, 7));
    }

    #[test]
    fn test_containing_floors_negative_fractions() {
        assert_eq!(
            BlockPos::containing(-0.5, -1.1, -0.0),
            BlockPos::new(-1, -2, 0)
        );
    }
}
