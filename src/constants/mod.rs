pub mod background;
pub mod game;
pub mod sprites;

/// Outer size of the playfield box in terminal cells, border included.
pub const WIDTH: u16 = 52;
pub const HEIGHT: u16 = 42;
