//! Rendering module for identicon.
//!
//! Turns codes into pixels: a small drawing surface over `vello_cpu`, the
//! per-tile renderer, the 3x3 composition, and PNG output.

mod identicon;
mod png;
mod surface;
mod tile;

pub use identicon::{layout, render, Palette, CENTER, CORNERS, SIDES};
pub use png::{encode_png, write_png};
pub use surface::{quarter_turn, Saved, Surface};
pub use tile::{draw_tile, Tile, TilePosition};
