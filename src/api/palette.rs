use crate::render::Color;

/// Categorical palette used for species strokes.
pub const TABLEAU10: [Color; 10] = [
    Color::from_rgb8(0x4e, 0x79, 0xa7),
    Color::from_rgb8(0xf2, 0x8e, 0x2c),
    Color::from_rgb8(0xe1, 0x57, 0x59),
    Color::from_rgb8(0x76, 0xb7, 0xb2),
    Color::from_rgb8(0x59, 0xa1, 0x4f),
    Color::from_rgb8(0xed, 0xc9, 0x49),
    Color::from_rgb8(0xaf, 0x7a, 0xa1),
    Color::from_rgb8(0xff, 0x9d, 0xa7),
    Color::from_rgb8(0x9c, 0x75, 0x5f),
    Color::from_rgb8(0xba, 0xb0, 0xab),
];

/// Sequential seven-step blue ramp, lightest first.
pub const BLUES7: [Color; 7] = [
    Color::from_rgb8(0xef, 0xf3, 0xff),
    Color::from_rgb8(0xc6, 0xdb, 0xef),
    Color::from_rgb8(0x9e, 0xca, 0xe1),
    Color::from_rgb8(0x6b, 0xae, 0xd6),
    Color::from_rgb8(0x42, 0x92, 0xc6),
    Color::from_rgb8(0x21, 0x71, 0xb5),
    Color::from_rgb8(0x08, 0x45, 0x94),
];

pub const INK: Color = Color::from_rgb8(0x00, 0x00, 0x00);
pub const GRID: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);
pub const BORDER: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
pub const GRATICULE: Color = Color::rgba(0xcb as f64 / 255.0, 0xd5 as f64 / 255.0, 0xf5 as f64 / 255.0, 0.35);
