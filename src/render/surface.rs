//! Drawing surface: a transform stack and path builder over a `vello_cpu`
//! render context.
//!
//! Points are mapped through the current transform as they are added, so a
//! path keeps its shape when the transform is restored before the fill.

use std::ops::{Deref, DerefMut};

use image::RgbaImage;
use vello_cpu::kurbo::{Affine, BezPath, Point};
use vello_cpu::peniko::{Color, Fill};
use vello_cpu::{Pixmap, RenderContext};

use crate::types::Colour;

/// Rotation by `turns` quarter turns. One turn maps +x onto +y, which is
/// clockwise on a y-down canvas. The sines are exact so output never
/// depends on the platform's trigonometry.
pub fn quarter_turn(turns: u32) -> Affine {
    let (cos, sin) = match turns % 4 {
        0 => (1.0, 0.0),
        1 => (0.0, 1.0),
        2 => (-1.0, 0.0),
        _ => (0.0, -1.0),
    };
    Affine::new([cos, sin, -sin, cos, 0.0, 0.0])
}

/// An RGBA canvas with a current transform and path, filled with the
/// nonzero winding rule. Starts fully transparent.
pub struct Surface {
    ctx: RenderContext,
    width: u16,
    height: u16,
    transform: Affine,
    path: BezPath,
    /// Whether `path` ends in a subpath that `line_to` may extend.
    open: bool,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        // the context needs at least one pixel; empty surfaces are cropped on output
        let mut ctx = RenderContext::new(width.max(1), height.max(1));
        ctx.set_fill_rule(Fill::NonZero);

        Self {
            ctx,
            width,
            height,
            transform: Affine::IDENTITY,
            path: BezPath::new(),
            open: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Save the transform; it is restored (and any unfilled path dropped)
    /// when the returned guard goes out of scope.
    pub fn save(&mut self) -> Saved<'_> {
        let transform = self.transform;
        Saved {
            surface: self,
            transform,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform * Affine::translate((dx, dy));
    }

    /// Rotate by `turns` quarter turns around the user-space point `(cx, cy)`.
    pub fn rotate_quarter_turns_about(&mut self, turns: u32, cx: f64, cy: f64) {
        let about = Affine::translate((cx, cy))
            * quarter_turn(turns)
            * Affine::translate((-cx, -cy));
        self.transform = self.transform * about;
    }

    /// Start a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to(self.transform * Point::new(x, y));
        self.open = true;
    }

    /// Extend the current subpath, or start one if there is none open.
    pub fn line_to(&mut self, x: f64, y: f64) {
        if !self.open {
            self.move_to(x, y);
            return;
        }
        self.path.line_to(self.transform * Point::new(x, y));
    }

    /// Close the current subpath back to its first point.
    pub fn close_path(&mut self) {
        if self.open {
            self.path.close_path();
            self.open = false;
        }
    }

    pub fn set_colour(&mut self, colour: Colour) {
        let [r, g, b, a] = colour.to_rgba();
        self.ctx.set_paint(Color::from_rgba8(r, g, b, a));
    }

    /// Fill the path with the current colour, then clear it. Open subpaths
    /// are closed implicitly.
    pub fn fill(&mut self) {
        let path = std::mem::take(&mut self.path);
        self.open = false;
        if path.elements().is_empty() {
            return;
        }
        self.ctx.fill_path(&path);
    }

    fn clear_path(&mut self) {
        self.path = BezPath::new();
        self.open = false;
    }

    /// Rasterize everything filled so far into a straight-alpha image.
    pub fn to_image(&mut self) -> RgbaImage {
        self.ctx.flush();
        let mut pixmap = Pixmap::new(self.ctx.width(), self.ctx.height());
        self.ctx.render_to_pixmap(&mut pixmap);

        let stride = usize::from(self.ctx.width()) * 4;
        let data = pixmap.data_as_u8_slice();
        let mut image = RgbaImage::new(u32::from(self.width), u32::from(self.height));
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let i = y as usize * stride + x as usize * 4;
            pixel.0 = unpremultiply([data[i], data[i + 1], data[i + 2], data[i + 3]]);
        }
        image
    }

    /// Finish drawing and take the pixels.
    pub fn into_image(mut self) -> RgbaImage {
        self.to_image()
    }
}

/// Convert a premultiplied pixel to straight alpha. Fully transparent pixels
/// come out as `[0, 0, 0, 0]`.
fn unpremultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let alpha = u32::from(a);
    let channel = |c: u8| ((u32::from(c) * 255 + alpha / 2) / alpha).min(255) as u8;
    [channel(r), channel(g), channel(b), a]
}

/// Scope guard returned by [`Surface::save`].
///
/// Dereferences to the surface. Dropping it restores the saved transform
/// and discards any path that was built but not filled.
pub struct Saved<'a> {
    surface: &'a mut Surface,
    transform: Affine,
}

impl Deref for Saved<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        self.surface
    }
}

impl DerefMut for Saved<'_> {
    fn deref_mut(&mut self) -> &mut Surface {
        self.surface
    }
}

impl Drop for Saved<'_> {
    fn drop(&mut self) {
        self.surface.transform = self.transform;
        self.surface.clear_path();
    }
}
