use once_cell::sync::Lazy;
use crate::color::{Color, Palette};

// ===== Canvas =====
pub const WIDTH: f64 = 1100.0;
pub const HEIGHT: f64 = 600.0;
pub const PADDING: f64 = 50.0;
pub const PADDING_BOTTOM: f64 = 100.0;

// ===== Axes =====
pub const AXIS_TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
pub const YEAR_TICK_COUNT: usize = 10;
pub const MONTHS_PER_YEAR: usize = 12;

// ===== Legend =====
pub const LEGEND_WIDTH: f64 = 400.0;
pub const LEGEND_TICK_SIZE: f64 = 10.0;

// ===== Tooltip =====
pub const TOOLTIP_OFFSET_X: f64 = 30.0;
pub const TOOLTIP_OFFSET_Y: f64 = 5.0;
pub const TOOLTIP_OPACITY: f64 = 0.9;
pub const FADE_DURATION_MS: u64 = 200;

pub const CELSIUS_GLYPH: char = '\u{2103}';

/// RdBu diverging scheme, warm (index 0) to cold (last index).
pub const RD_BU_11: [Color; 11] = [
    Color::rgb(0x67, 0x00, 0x1f),
    Color::rgb(0xb2, 0x18, 0x2b),
    Color::rgb(0xd6, 0x60, 0x4d),
    Color::rgb(0xf4, 0xa5, 0x82),
    Color::rgb(0xfd, 0xdb, 0xc7),
    Color::rgb(0xf7, 0xf7, 0xf7),
    Color::rgb(0xd1, 0xe5, 0xf0),
    Color::rgb(0x92, 0xc5, 0xde),
    Color::rgb(0x43, 0x93, 0xc3),
    Color::rgb(0x21, 0x66, 0xac),
    Color::rgb(0x05, 0x30, 0x61),
];

pub static DEFAULT_PALETTE: Lazy<Palette> = Lazy::new(|| Palette::from(RD_BU_11.to_vec()));
