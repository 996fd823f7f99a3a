/// Default loop rates. Physics and animation advance on ticks, drawing on frames.
pub const TICK_RATE: f64 = 30.0;
pub const FRAME_RATE: f64 = 60.0;

/// The world is measured in virtual pixels rather than terminal cells; one
/// cell covers CELL_WIDTH x CELL_HEIGHT world units, making the playfield
/// 50 x 40 cells.
pub const WORLD_WIDTH: f32 = 500.0;
pub const WORLD_HEIGHT: f32 = 800.0;
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;

pub const BIRD_START_X: f32 = 200.0;
pub const BIRD_START_Y: f32 = 200.0;

/// Upward impulse applied on a flap. y grows downward, so negative is up.
pub const JUMP_VELOCITY: f32 = -10.5;
/// Constant downward acceleration, units/tick^2.
pub const ACCELERATION: f32 = 3.0;
/// Per-tick displacement never exceeds this while falling.
pub const TERMINAL_DISPLACEMENT: f32 = 16.0;
/// Extra upward displacement while still ascending.
pub const ASCENT_BOOST: f32 = 2.0;

/// Tilt in degrees: nose-up cap, per-tick nose-down step, nose-down floor.
pub const MAX_ROTATION: f32 = 25.0;
pub const ROTATION_VELOCITY: f32 = 20.0;
pub const MIN_ROTATION: f32 = -90.0;
/// The bird keeps its nose up until it has fallen this far past the height
/// recorded at the last flap.
pub const TILT_UP_WINDOW: f32 = 50.0;
/// At or below this tilt the bird is diving and the wings stop flapping.
pub const DIVE_TILT: f32 = -80.0;
/// At or above this tilt the climb pose is drawn.
pub const CLIMB_TILT: f32 = 15.0;
/// Ticks per animation frame step.
pub const ANIMATION_TIME: u32 = 5;

/// Vertical opening between the halves of a pipe pair.
pub const PIPE_GAP: f32 = 200.0;
pub const PIPE_VELOCITY: f32 = 5.0;
/// The gap's top edge is sampled uniformly from [PIPE_GAP_MIN, PIPE_GAP_MAX).
pub const PIPE_GAP_MIN: i32 = 50;
pub const PIPE_GAP_MAX: i32 = 450;
/// New pipes appear here, off the right edge of the world.
pub const PIPE_SPAWN_X: f32 = 600.0;
/// Horizontal distance between consecutive pipes.
pub const PIPE_SPACING: f32 = 300.0;

/// Top edge of the ground strip; touching it is a crash.
pub const BASE_Y: f32 = 730.0;
pub const BASE_VELOCITY: f32 = 5.0;
