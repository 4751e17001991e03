//! Decoding codes into visual recipes.
//!
//! Bit layout (bit 0 is least significant):
//!
//! | bits  | field          |
//! |-------|----------------|
//! | 0-1   | middle type    |
//! | 2     | middle invert  |
//! | 3-6   | corner type    |
//! | 7     | corner invert  |
//! | 8-9   | corner turn    |
//! | 10-13 | side type      |
//! | 14    | side invert    |
//! | 15-16 | side turn      |
//! | 17-21 | blue           |
//! | 22-26 | green          |
//! | 27-31 | red            |
//! | 32-36 | second red     |
//! | 37-41 | second green   |
//! | 42-46 | second blue    |
//! | 47    | swap cross     |
//!
//! Bits 48-63 are unused.

use serde::Serialize;

use super::colour::Channels;
use super::shape::MIDDLE_SHAPES;
use super::Code;

/// Number of low code bits a recipe is decoded from.
pub const RECIPE_BITS: u32 = 48;

/// One group of tiles (sides or corners) sharing shape, inversion and base turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TileSpec {
    /// Catalog index, 0..16.
    pub shape: usize,
    pub invert: bool,
    /// Base quarter turns, 0..4.
    pub turn: u8,
}

/// Everything needed to draw one identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Recipe {
    /// Index into [`MIDDLE_SHAPES`], 0..4.
    pub middle_type: usize,
    pub middle_invert: bool,
    pub corner: TileSpec,
    pub side: TileSpec,
    pub primary: Channels,
    pub secondary: Channels,
    /// When set the center tile takes the primary colour, otherwise the secondary.
    pub swap_cross: bool,
}

impl Recipe {
    /// Unpack a code. Total: every code decodes.
    pub fn decode(code: Code) -> Self {
        let channel = |offset| code.bits(offset, 5) as u8;

        Self {
            middle_type: code.bits(0, 2) as usize,
            middle_invert: code.flag(2),
            corner: TileSpec {
                shape: code.bits(3, 4) as usize,
                invert: code.flag(7),
                turn: code.bits(8, 2) as u8,
            },
            side: TileSpec {
                shape: code.bits(10, 4) as usize,
                invert: code.flag(14),
                turn: code.bits(15, 2) as u8,
            },
            primary: Channels::new(channel(27), channel(22), channel(17)),
            secondary: Channels::new(channel(32), channel(37), channel(42)),
            swap_cross: code.flag(47),
        }
    }

    /// Pack the fields back into the low 48 bits of a code.
    ///
    /// Out-of-range fields are masked to their bit width.
    pub fn encode(&self) -> Code {
        fn put(value: u64, offset: u32, width: u32) -> u64 {
            (value & ((1 << width) - 1)) << offset
        }

        let bits = put(self.middle_type as u64, 0, 2)
            | put(u64::from(self.middle_invert), 2, 1)
            | put(self.corner.shape as u64, 3, 4)
            | put(u64::from(self.corner.invert), 7, 1)
            | put(u64::from(self.corner.turn), 8, 2)
            | put(self.side.shape as u64, 10, 4)
            | put(u64::from(self.side.invert), 14, 1)
            | put(u64::from(self.side.turn), 15, 2)
            | put(u64::from(self.primary.b), 17, 5)
            | put(u64::from(self.primary.g), 22, 5)
            | put(u64::from(self.primary.r), 27, 5)
            | put(u64::from(self.secondary.r), 32, 5)
            | put(u64::from(self.secondary.g), 37, 5)
            | put(u64::from(self.secondary.b), 42, 5)
            | put(u64::from(self.swap_cross), 47, 1);

        Code(bits)
    }

    /// Catalog index of the center tile's shape.
    pub fn middle_shape(&self) -> usize {
        MIDDLE_SHAPES[self.middle_type % MIDDLE_SHAPES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOW_48: u64 = (1 << RECIPE_BITS) - 1;

    #[test]
    fn test_decode_zero() {
        let recipe = Recipe::decode(Code(0));
        assert_eq!(recipe, Recipe::default());
        assert_eq!(recipe.middle_shape(), 0);
    }

    #[test]
    fn test_decode_swap_cross_only() {
        let recipe = Recipe::decode(Code(1 << 47));
        assert!(recipe.swap_cross);
        assert_eq!(
            Recipe {
                swap_cross: false,
                ..recipe
            },
            Recipe::default()
        );
    }

    #[test]
    fn test_decode_fields() {
        let code = Code(
            0b11 // middle type 3
                | 1 << 2
                | 9 << 3
                | 1 << 7
                | 2 << 8
                | 6 << 10
                | 3 << 15
                | 1 << 17 // blue
                | 2 << 22 // green
                | 31 << 27 // red
                | 4 << 32
                | 5 << 37
                | 6 << 42
                | 0xffff << 48, // unused
        );

        let recipe = Recipe::decode(code);
        assert_eq!(
            recipe,
            Recipe {
                middle_type: 3,
                middle_invert: true,
                corner: TileSpec {
                    shape: 9,
                    invert: true,
                    turn: 2,
                },
                side: TileSpec {
                    shape: 6,
                    invert: false,
                    turn: 3,
                },
                primary: Channels::new(31, 2, 1),
                secondary: Channels::new(4, 5, 6),
                swap_cross: false,
            }
        );
        assert_eq!(recipe.middle_shape(), 15);
    }

    #[test]
    fn test_middle_shape_table() {
        let shapes: Vec<usize> = (0..4).map(|t| Recipe::decode(Code(t)).middle_shape()).collect();
        assert_eq!(shapes, vec![0, 4, 8, 15]);
    }

    #[test]
    fn test_encode_reconstructs_low_48_bits() {
        let samples = [
            0,
            u64::MAX,
            0xa538_327a_f927_da3e,
            0x0000_8000_0000_0000,
            0x1234_5678_9abc_def0,
            0xdef4_6f73_bcde_c043,
        ];
        for value in samples {
            let recipe = Recipe::decode(Code(value));
            assert_eq!(recipe.encode(), Code(value & LOW_48), "code {:016x}", value);
        }

        // Every single bit in the recipe range survives on its own
        for bit in 0..RECIPE_BITS {
            let code = Code(1 << bit);
            assert_eq!(Recipe::decode(code).encode(), code, "bit {}", bit);
        }
    }

    #[test]
    fn test_unused_bits_ignored() {
        assert_eq!(Recipe::decode(Code(0xffff << 48)), Recipe::default());
    }

    #[test]
    fn test_channels_in_range() {
        let recipe = Recipe::decode(Code(u64::MAX));
        for ch in [recipe.primary, recipe.secondary] {
            assert_eq!(ch, Channels::new(31, 31, 31));
        }
        assert_eq!(recipe.corner.turn, 3);
        assert_eq!(recipe.side.shape, 15);
    }
}
