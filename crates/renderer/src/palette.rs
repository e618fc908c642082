//! Color palettes for temperature bucketing.

use heatmap_common::Color;

/// Eleven-step Spectral scheme ordered cool to warm.
pub const SPECTRAL_11_COOL_TO_WARM: [Color; 11] = [
    Color::rgb(0x5e, 0x4f, 0xa2),
    Color::rgb(0x32, 0x88, 0xbd),
    Color::rgb(0x66, 0xc2, 0xa5),
    Color::rgb(0xab, 0xdd, 0xa4),
    Color::rgb(0xe6, 0xf5, 0x98),
    Color::rgb(0xff, 0xff, 0xbf),
    Color::rgb(0xfe, 0xe0, 0x8b),
    Color::rgb(0xfd, 0xae, 0x61),
    Color::rgb(0xf4, 0x6d, 0x43),
    Color::rgb(0xd5, 0x3e, 0x4f),
    Color::rgb(0x9e, 0x01, 0x42),
];

/// Default palette for the heat map.
pub fn default_palette() -> Vec<Color> {
    SPECTRAL_11_COOL_TO_WARM.to_vec()
}
