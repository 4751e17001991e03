//! The fixed catalog of tile shapes.
//!
//! Every shape is a closed polygon on a 4x4 grid; tiles scale the grid to
//! their pixel size. Indices are the only stable identifiers, codes refer
//! to shapes by index.

/// Side length of the grid that shape vertices live on.
pub const GRID: f64 = 4.0;

/// Number of entries in [`SHAPES`].
pub const SHAPE_COUNT: usize = 16;

/// A polygon on the 4x4 grid. An empty vertex list is a blank tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    points: &'static [(u8, u8)],
}

/// Direction a polygon is traced in, as seen on screen (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// Empty or zero-area outline.
    Degenerate,
}

impl Shape {
    const fn new(name: &'static str, points: &'static [(u8, u8)]) -> Self {
        Self { name, points }
    }

    /// Look up a catalog entry. Indices wrap modulo the catalog size.
    pub fn get(index: usize) -> &'static Shape {
        &SHAPES[index % SHAPE_COUNT]
    }

    /// Vertices in grid units, in path order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .map(|&(x, y)| (f64::from(x), f64::from(y)))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Twice the signed area (shoelace sum). Positive means clockwise on screen.
    pub fn signed_area2(&self) -> i32 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let (x0, y0) = self.points[i];
                let (x1, y1) = self.points[(i + 1) % n];
                i32::from(x0) * i32::from(y1) - i32::from(x1) * i32::from(y0)
            })
            .sum()
    }

    pub fn winding(&self) -> Winding {
        match self.signed_area2() {
            a if a > 0 => Winding::Clockwise,
            a if a < 0 => Winding::CounterClockwise,
            _ => Winding::Degenerate,
        }
    }
}

pub static SHAPES: [Shape; SHAPE_COUNT] = [
    Shape::new("square", &[(0, 0), (4, 0), (4, 4), (0, 4)]),
    Shape::new("corner-triangle", &[(0, 0), (4, 0), (0, 4)]),
    Shape::new("upward-triangle", &[(2, 0), (4, 4), (0, 4)]),
    Shape::new("half-rect", &[(0, 0), (2, 0), (2, 4), (0, 4)]),
    Shape::new("diamond", &[(2, 0), (4, 2), (2, 4), (0, 2)]),
    Shape::new("kite", &[(0, 0), (4, 2), (4, 4), (2, 4)]),
    // outer triangle with the middle cut out, traced as one outline
    Shape::new(
        "notched-triangle",
        &[(2, 0), (4, 4), (2, 4), (3, 2), (1, 2), (2, 4), (0, 4)],
    ),
    Shape::new("sharp-triangle", &[(0, 0), (4, 2), (2, 4)]),
    Shape::new("small-square", &[(1, 1), (3, 1), (3, 3), (1, 3)]),
    // crosses itself at (2, 2): two small triangles
    Shape::new(
        "twin-triangles",
        &[(2, 0), (4, 0), (0, 4), (0, 2), (2, 2)],
    ),
    Shape::new("quarter-square", &[(0, 0), (2, 0), (2, 2), (0, 2)]),
    Shape::new("down-triangle", &[(0, 2), (4, 2), (2, 4)]),
    Shape::new("up-triangle", &[(2, 2), (4, 4), (0, 4)]),
    Shape::new("small-triangle", &[(2, 0), (2, 2), (0, 2)]),
    Shape::new("small-corner-triangle", &[(0, 0), (2, 0), (0, 2)]),
    Shape::new("empty", &[]),
];

/// Catalog indices the center tile may use: square, diamond, small square, empty.
pub const MIDDLE_SHAPES: [usize; 4] = [0, 4, 8, 15];

/// Outline of the full tile used to invert a shape, in grid units.
///
/// Traced top-left, bottom-left, bottom-right, top-right: counter-clockwise on
/// screen, the opposite of every catalog shape.
pub const INVERT_OUTLINE: [(f64, f64); 4] = [(0.0, 0.0), (0.0, GRID), (GRID, GRID), (GRID, 0.0)];
