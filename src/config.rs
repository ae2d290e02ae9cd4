use std::time::Duration;

/// Side of one grid cell in pixels.
pub const GRID_SIZE: u32 = 20;
/// Cells per axis; the grid is square.
pub const GRID_COUNT: u32 = 30;

pub const WIDTH: u32 = GRID_SIZE * GRID_COUNT;
pub const HEIGHT: u32 = GRID_SIZE * GRID_COUNT;

/// Simulation period. Fixed; there is no speed scaling.
pub const TICK: Duration = Duration::from_millis(100);

pub type Rgba = [u8; 4];

pub const BACKGROUND: Rgba = [0x00, 0x00, 0x00, 0xff];
pub const GRID_LINE: Rgba = [0x28, 0x28, 0x28, 0xff];

/// Body colors, head first; repeats every five segments.
pub const SNAKE_PALETTE: [Rgba; 5] = [
    [0x00, 0xff, 0x00, 0xff],
    [0x00, 0x00, 0xff, 0xff],
    [0x00, 0xff, 0xff, 0xff],
    [0x80, 0x00, 0x80, 0xff],
    [0xff, 0xff, 0x00, 0xff],
];

pub const FOOD_PALETTE: [Rgba; 5] = [
    [0xff, 0x00, 0x00, 0xff],
    [0x00, 0x00, 0xff, 0xff],
    [0x80, 0x00, 0x80, 0xff],
    [0xff, 0xff, 0x00, 0xff],
    [0x00, 0xff, 0xff, 0xff],
];
