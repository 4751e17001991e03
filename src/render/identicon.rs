//! Composing the nine tiles of an identicon.

use image::RgbaImage;
use log::trace;

use crate::types::{Code, Colour, Recipe, Settings};

use super::tile::{draw_tile, Tile, TilePosition};
use super::Surface;

/// Side tiles, clockwise from the top.
pub const SIDES: [TilePosition; 4] = [
    TilePosition::new(1, 0),
    TilePosition::new(2, 1),
    TilePosition::new(1, 2),
    TilePosition::new(0, 1),
];

/// Corner tiles, clockwise from the top-left.
pub const CORNERS: [TilePosition; 4] = [
    TilePosition::new(0, 0),
    TilePosition::new(2, 0),
    TilePosition::new(2, 2),
    TilePosition::new(0, 2),
];

pub const CENTER: TilePosition = TilePosition::new(1, 1);

/// The three fill colours of an identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Side tiles.
    pub primary: Colour,
    /// Corner tiles.
    pub secondary: Colour,
    pub center: Colour,
}

impl Palette {
    pub fn new(recipe: &Recipe, settings: &Settings) -> Self {
        let primary = Colour::from_channels(recipe.primary, settings.alpha);
        let secondary = if settings.two_color {
            Colour::from_channels(recipe.secondary, settings.alpha)
        } else {
            primary
        };
        let center = if recipe.swap_cross { primary } else { secondary };

        Self {
            primary,
            secondary,
            center,
        }
    }
}

/// The nine tiles of a recipe in drawing order: center, sides, corners.
pub fn layout(recipe: &Recipe, settings: &Settings) -> Vec<Tile> {
    let palette = Palette::new(recipe, settings);

    let center = Tile {
        position: CENTER,
        turns: 0,
        invert: recipe.middle_invert,
        shape: recipe.middle_shape(),
        colour: palette.center,
    };

    // each step around the ring turns one more quarter, matching its position
    let ring = |positions: [TilePosition; 4],
                base_turn: u8,
                shape: usize,
                invert: bool,
                colour: Colour| {
        positions
            .into_iter()
            .enumerate()
            .map(move |(i, position)| Tile {
                position,
                turns: (u32::from(base_turn) + 1 + i as u32) % 4,
                invert,
                shape,
                colour,
            })
    };

    std::iter::once(center)
        .chain(ring(
            SIDES,
            recipe.side.turn,
            recipe.side.shape,
            recipe.side.invert,
            palette.primary,
        ))
        .chain(ring(
            CORNERS,
            recipe.corner.turn,
            recipe.corner.shape,
            recipe.corner.invert,
            palette.secondary,
        ))
        .collect()
}

/// Render the identicon for `code` as a `total_size` x `total_size` RGBA image.
///
/// Sizes divisible by 3 keep tile edges on pixel boundaries; other sizes
/// still render, with anti-aliased seams between tiles. Size 0 gives an
/// empty image.
pub fn render(code: Code, total_size: u16, settings: &Settings) -> RgbaImage {
    let recipe = Recipe::decode(code);
    trace!("rendering {} at {}px: {:?}", code, total_size, recipe);

    let mut surface = Surface::new(total_size, total_size);
    let tile_size = f64::from(total_size) / 3.0;

    for tile in layout(&recipe, settings) {
        draw_tile(&mut surface, &tile, tile_size);
    }

    surface.into_image()
}
