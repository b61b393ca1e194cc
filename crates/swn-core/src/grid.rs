//! Grid-cell coordinate types.
//!
//! The simulation places agents on an integer grid; dumps record each agent's
//! cell as a `[x, y]` pair plus an optional per-file `grid` block with the
//! overall dimensions.  The analysis engine itself never interprets these
//! values (they feed the spatial-plotting collaborator), but they are parsed
//! and carried so a dump survives a load/inspect round trip intact.

/// An integer grid-cell coordinate, stored as a JSON `[x, y]` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 2]", into = "[i32; 2]"))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for GridPoint {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for [i32; 2] {
    #[inline]
    fn from(p: GridPoint) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of the simulation grid, as recorded in a dump's `grid` block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub width:  u32,
    pub height: u32,
}

impl GridDims {
    #[inline]
    pub fn cell_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
