//! Drawing a single tile of the 3x3 grid.

use crate::types::{Colour, Shape, GRID, INVERT_OUTLINE};

use super::Surface;

/// A cell of the 3x3 grid, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePosition {
    pub x: u32,
    pub y: u32,
}

impl TilePosition {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Everything that varies between the nine tiles of one identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub position: TilePosition,
    /// Quarter turns, reduced modulo 4 when drawn.
    pub turns: u32,
    pub invert: bool,
    /// Catalog index.
    pub shape: usize,
    pub colour: Colour,
}

/// Fill one tile's shape (or its complement when inverted) onto `surface`.
///
/// The surface's transform and path are left exactly as they were.
pub fn draw_tile(surface: &mut Surface, tile: &Tile, tile_size: f64) {
    let shape = Shape::get(tile.shape);
    let unit = tile_size / GRID;

    let mut canvas = surface.save();
    canvas.translate(
        f64::from(tile.position.x) * tile_size,
        f64::from(tile.position.y) * tile_size,
    );
    canvas.rotate_quarter_turns_about(tile.turns % 4, tile_size / 2.0, tile_size / 2.0);

    for (x, y) in shape.points() {
        canvas.line_to(x * unit, y * unit);
    }
    canvas.close_path();

    if tile.invert {
        // Traced against the catalog's winding so the shape cancels out of
        // the square under the nonzero rule.
        let mut outline = INVERT_OUTLINE.iter();
        if let Some(&(x, y)) = outline.next() {
            canvas.move_to(x * unit, y * unit);
        }
        for &(x, y) in outline {
            canvas.line_to(x * unit, y * unit);
        }
        canvas.close_path();
    }

    canvas.set_colour(tile.colour);
    canvas.fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use vello_cpu::kurbo::Affine;

    const INK: Colour = Colour::new(8, 16, 24, 255);
    const CLEAR: [u8; 4] = [0, 0, 0, 0];
    const SOLID: [u8; 4] = [8, 16, 24, 255];

    fn tile(position: TilePosition, turns: u32, invert: bool, shape: usize) -> Tile {
        Tile {
            position,
            turns,
            invert,
            shape,
            colour: INK,
        }
    }

    fn draw(size: u16, tile_size: f64, t: Tile) -> RgbaImage {
        let mut surface = Surface::new(size, size);
        draw_tile(&mut surface, &t, tile_size);
        surface.into_image()
    }

    fn at(image: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
        image.get_pixel(x, y).0
    }

    #[test]
    fn test_full_square_fills_tile() {
        let image = draw(8, 4.0, tile(TilePosition::new(1, 0), 0, false, 0));

        for y in 0..8 {
            for x in 0..8 {
                let expected = if (4..8).contains(&x) && y < 4 { SOLID } else { CLEAR };
                assert_eq!(at(&image, x, y), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_inverted_square_is_empty() {
        let image = draw(4, 4.0, tile(TilePosition::new(0, 0), 0, true, 0));
        assert!(image.pixels().all(|p| p.0 == CLEAR));
    }

    #[test]
    fn test_empty_shape() {
        let image = draw(4, 4.0, tile(TilePosition::new(0, 0), 2, false, 15));
        assert!(image.pixels().all(|p| p.0 == CLEAR));

        // inverting the blank tile fills it
        let image = draw(4, 4.0, tile(TilePosition::new(0, 0), 0, true, 15));
        assert!(image.pixels().all(|p| p.0 == SOLID));
    }

    #[test]
    fn test_small_square_and_its_complement() {
        let plain = draw(4, 4.0, tile(TilePosition::new(0, 0), 0, false, 8));
        let inverted = draw(4, 4.0, tile(TilePosition::new(0, 0), 0, true, 8));

        for y in 0..4 {
            for x in 0..4 {
                let inside = (1..3).contains(&x) && (1..3).contains(&y);
                assert_eq!(at(&plain, x, y), if inside { SOLID } else { CLEAR });
                assert_eq!(at(&inverted, x, y), if inside { CLEAR } else { SOLID });
            }
        }
    }

    #[test]
    fn test_rotation_moves_quarter_square() {
        // shape 10 occupies the top-left quarter of its tile
        let expected = [(0, 0), (2, 0), (2, 2), (0, 2)];
        for (turns, &(qx, qy)) in expected.iter().enumerate() {
            let image = draw(4, 4.0, tile(TilePosition::new(0, 0), turns as u32, false, 10));
            for y in 0..4 {
                for x in 0..4 {
                    let inside = (qx..qx + 2).contains(&x) && (qy..qy + 2).contains(&y);
                    assert_eq!(
                        at(&image, x, y),
                        if inside { SOLID } else { CLEAR },
                        "turns {} at ({}, {})",
                        turns,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_turns_reduced_modulo_four() {
        let a = draw(4, 4.0, tile(TilePosition::new(0, 0), 1, false, 5));
        let b = draw(4, 4.0, tile(TilePosition::new(0, 0), 9, false, 5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_inverted_shape_complements_plain_shape() {
        for shape in 0..16 {
            let plain = draw(8, 8.0, tile(TilePosition::new(0, 0), 0, false, shape));
            let inverted = draw(8, 8.0, tile(TilePosition::new(0, 0), 0, true, shape));

            for (p, i) in plain.pixels().zip(inverted.pixels()) {
                let sum = u16::from(p.0[3]) + u16::from(i.0[3]);
                assert!((253..=257).contains(&sum), "shape {}: {:?} + {:?}", shape, p, i);
            }
        }
    }

    #[test]
    fn test_transform_restored() {
        let mut surface = Surface::new(9, 9);
        draw_tile(&mut surface, &tile(TilePosition::new(2, 1), 3, true, 6), 3.0);
        assert_eq!(surface.transform(), Affine::IDENTITY);
    }
}
