/// The sky shifts left one cell every this many ticks.
pub const CLOUD_STEP_TICKS: u32 = 6;
/// Chance that a freshly scrolled-in sky cell holds a cloud glyph.
pub const CLOUD_DENSITY: f32 = 0.02;

pub const CLOUDS: [char; 3] = ['☁', '~', '-'];
