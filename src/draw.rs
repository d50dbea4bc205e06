//! Pixel-level shape fills on an RGBA canvas.
//!
//! Every shape takes an inclusive bounding box: `right` and `bottom` are the
//! last pixel column and row touched. Pixels are tested at their centers and
//! overwritten (no blending). Anything falling outside the canvas is clipped.

use image::{Rgba, RgbaImage};

/// Inclusive pixel bounds of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Bounds {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left <= right && top <= bottom, "inverted bounds");
        Bounds { left, top, right, bottom }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// Continuous center of the covered area
    fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right + 1) as f32 / 2.0,
            (self.top + self.bottom + 1) as f32 / 2.0,
        )
    }
}

/// Visit every in-canvas pixel of `bounds` with its center coordinates
fn for_each_pixel(
    img: &mut RgbaImage,
    bounds: Bounds,
    mut f: impl FnMut(f32, f32) -> Option<Rgba<u8>>,
) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let right = bounds.right.min(img.width() - 1);
    let bottom = bounds.bottom.min(img.height() - 1);

    for py in bounds.top..=bottom {
        for px in bounds.left..=right {
            if let Some(color) = f(px as f32 + 0.5, py as f32 + 0.5) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Normalized squared distance of (x, y) from an ellipse center
fn ellipse_norm(x: f32, y: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> f32 {
    let nx = (x - cx) / rx;
    let ny = (y - cy) / ry;
    nx * nx + ny * ny
}

/// Fill the ellipse inscribed in `bounds`
pub fn fill_ellipse(img: &mut RgbaImage, bounds: Bounds, color: Rgba<u8>) {
    let (cx, cy) = bounds.center();
    let rx = bounds.width() as f32 / 2.0;
    let ry = bounds.height() as f32 / 2.0;

    for_each_pixel(img, bounds, |x, y| {
        (ellipse_norm(x, y, cx, cy, rx, ry) <= 1.0).then_some(color)
    });
}

/// Stroke the ellipse inscribed in `bounds`, growing inward by `width` pixels
pub fn stroke_ellipse(img: &mut RgbaImage, bounds: Bounds, color: Rgba<u8>, width: u32) {
    if width == 0 {
        return;
    }
    let (cx, cy) = bounds.center();
    let rx = bounds.width() as f32 / 2.0;
    let ry = bounds.height() as f32 / 2.0;
    let inner_rx = rx - width as f32;
    let inner_ry = ry - width as f32;

    // Stroke wider than the radius collapses to a filled ellipse
    if inner_rx <= 0.0 || inner_ry <= 0.0 {
        fill_ellipse(img, bounds, color);
        return;
    }

    for_each_pixel(img, bounds, |x, y| {
        let outside_inner = ellipse_norm(x, y, cx, cy, inner_rx, inner_ry) > 1.0;
        let inside_outer = ellipse_norm(x, y, cx, cy, rx, ry) <= 1.0;
        (inside_outer && outside_inner).then_some(color)
    });
}

/// Fill a rectangle whose four corners are rounded by `radius`
pub fn fill_rounded_rect(img: &mut RgbaImage, bounds: Bounds, radius: u32, color: Rgba<u8>) {
    let max_radius = bounds.width().min(bounds.height()) / 2;
    let r = radius.min(max_radius) as f32;

    // Corner circle centers sit `r` in from each continuous edge
    let inner_left = bounds.left as f32 + r;
    let inner_right = (bounds.right + 1) as f32 - r;
    let inner_top = bounds.top as f32 + r;
    let inner_bottom = (bounds.bottom + 1) as f32 - r;

    for_each_pixel(img, bounds, |x, y| {
        let dx = (inner_left - x).max(x - inner_right).max(0.0);
        let dy = (inner_top - y).max(y - inner_bottom).max(0.0);
        (dx * dx + dy * dy <= r * r).then_some(color)
    });
}
