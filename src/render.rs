use crate::constants::{layout, palette};
use crate::draw::{self, Bounds};
use image::RgbaImage;

const BAR_COUNT: u32 = palette::BARS.len() as u32;

/// Integer layout of every shape for one edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub edge_length: u32,
    pub padding: u32,
    pub ring_width: u32,
    pub bar_height: u32,
    pub bar_width: u32,
    pub gap: u32,
    /// Height of all bars plus the gaps between them
    pub stack_height: u32,
    /// Top-left corner of the first bar
    pub start_x: u32,
    pub start_y: u32,
    pub corner_radius: u32,
}

impl IconGeometry {
    pub fn for_edge(edge_length: u32) -> Self {
        let padding = (edge_length / layout::PADDING_DIVISOR).max(layout::MIN_PADDING);
        let ring_width = (edge_length / layout::RING_WIDTH_DIVISOR).max(layout::MIN_RING_WIDTH);
        let bar_height = (edge_length / layout::BAR_HEIGHT_DIVISOR).max(layout::MIN_BAR_HEIGHT);
        let bar_width = (edge_length as f64 * layout::BAR_WIDTH_FRACTION).round() as u32;
        let gap = (edge_length / layout::GAP_DIVISOR).max(layout::MIN_GAP);

        let stack_height = BAR_COUNT * bar_height + (BAR_COUNT - 1) * gap;

        IconGeometry {
            edge_length,
            padding,
            ring_width,
            bar_height,
            bar_width,
            gap,
            stack_height,
            start_x: edge_length.saturating_sub(bar_width) / 2,
            start_y: edge_length.saturating_sub(stack_height) / 2,
            corner_radius: bar_height / 2,
        }
    }

    /// Box of the background disc, or None when the padding eats the whole canvas
    pub fn disc_bounds(&self) -> Option<Bounds> {
        let far = self.edge_length.checked_sub(self.padding + 1)?;
        (self.padding <= far).then(|| Bounds::new(self.padding, self.padding, far, far))
    }

    /// Boxes of the bars, top to bottom
    pub fn bar_bounds(&self) -> [Bounds; palette::BARS.len()] {
        std::array::from_fn(|i| {
            let y = self.start_y + i as u32 * (self.bar_height + self.gap);
            Bounds::new(
                self.start_x,
                y,
                self.start_x + self.bar_width,
                y + self.bar_height,
            )
        })
    }
}

/// Draw the icon at `edge_length` x `edge_length` on a transparent canvas
pub fn render(edge_length: u32) -> RgbaImage {
    debug_assert!(edge_length > 0, "icon edge length must be positive");

    let geometry = IconGeometry::for_edge(edge_length);
    let mut img = RgbaImage::from_pixel(edge_length, edge_length, palette::TRANSPARENT);

    if let Some(disc) = geometry.disc_bounds() {
        draw::fill_ellipse(&mut img, disc, palette::DISC);
        draw::stroke_ellipse(&mut img, disc, palette::RING, geometry.ring_width);
    }

    for (bounds, color) in geometry.bar_bounds().into_iter().zip(palette::BARS) {
        draw::fill_rounded_rect(&mut img, bounds, geometry.corner_radius, color);
    }

    img
}
