/// Fixed proportions and colors used to draw the icon set

pub mod layout {
    /// Disc inset is edge / 32, never less than one pixel
    pub const PADDING_DIVISOR: u32 = 32;
    pub const MIN_PADDING: u32 = 1;

    /// Accent ring stroke is edge / 16
    pub const RING_WIDTH_DIVISOR: u32 = 16;
    pub const MIN_RING_WIDTH: u32 = 1;

    /// Bars are edge / 8 tall, at least two pixels
    pub const BAR_HEIGHT_DIVISOR: u32 = 8;
    pub const MIN_BAR_HEIGHT: u32 = 2;

    /// Bars span half the icon width
    pub const BAR_WIDTH_FRACTION: f64 = 0.5;

    pub const GAP_DIVISOR: u32 = 16;
    pub const MIN_GAP: u32 = 1;
}

pub mod palette {
    use image::Rgba;

    /// Near-black background disc
    pub const DISC: Rgba<u8> = Rgba([15, 20, 25, 255]);

    /// Accent ring (#1D9BF0)
    pub const RING: Rgba<u8> = Rgba([29, 155, 240, 255]);

    /// Bar colors, top to bottom: red, blue, green
    pub const BARS: [Rgba<u8>; 3] = [
        Rgba([239, 68, 68, 255]),
        Rgba([29, 155, 240, 255]),
        Rgba([0, 186, 124, 255]),
    ];

    pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
}

pub mod output {
    /// Edge lengths written on every run; the largest is the master render
    pub const SIZES: [u32; 5] = [16, 32, 48, 64, 128];

    /// Sized files are `icon-<size>.png`, the canonical copy is `icon.png`
    pub const FILE_STEM: &str = "icon";
    pub const EXTENSION: &str = "png";

    /// Output location relative to the crate root
    pub const DIR: &str = "src/images";
}
