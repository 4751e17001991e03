//! identicon - Deterministic symmetric identicons
//!
//! Hashes an identifier with SHA-512, decodes the low bits of the digest
//! into a recipe (shapes, rotations, inversions and two colours) and draws
//! it as a 3x3 grid of tiles with fourfold rotational symmetry.
//!
//! ```no_run
//! use identicon::{render, Code, Settings};
//!
//! let image = render(Code::derive("alice"), 420, &Settings::default());
//! identicon::write_png(&image, std::path::Path::new("alice.png"))?;
//! # Ok::<(), identicon::IdenticonError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod server;
pub mod types;

pub use config::Config;
pub use error::{IdenticonError, Result};
pub use render::{encode_png, layout, render, write_png, Palette, Surface, Tile};
pub use server::{ServeOptions, Server};
pub use types::{Channels, Code, Colour, Recipe, Settings, Shape, TileSpec, SHAPES};
