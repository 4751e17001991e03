//! Core domain types for identicon.
//!
//! - `Code` - the 64-bit seed derived from an input string
//! - `Recipe` - shapes, turns, inversions and colours decoded from a code
//! - `Shape` - the fixed tile shape catalog
//! - `Colour` / `Channels` - fill colours and their 5-bit encoded form
//! - `Settings` - per-render options

mod code;
mod colour;
mod recipe;
mod settings;
mod shape;

pub use code::Code;
pub use colour::{scale_channel, Channels, Colour};
pub use recipe::{Recipe, TileSpec, RECIPE_BITS};
pub use settings::Settings;
pub use shape::{Shape, Winding, GRID, INVERT_OUTLINE, MIDDLE_SHAPES, SHAPES, SHAPE_COUNT};
