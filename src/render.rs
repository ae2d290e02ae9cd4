//! Software renderer over the pixels RGBA frame. Redraws the whole frame
//! every tick: background, grid lines, snake, food, score board, and the
//! welcome overlay until the game starts.

use crate::config::{
    Rgba, BACKGROUND, GRID_COUNT, GRID_LINE, GRID_SIZE, HEIGHT, SNAKE_PALETTE, WIDTH,
};
use crate::game::{Game, Phase};
use crate::pos::Pos;

const TEXT_SCALE: u32 = 2;
const SCORE_COLOR: Rgba = [0xe6, 0xe6, 0xe6, 0xff];
const HIGH_COLOR: Rgba = [0xc8, 0xc8, 0xc8, 0xff];
const WELCOME_COLOR: Rgba = [0xb4, 0xdc, 0xff, 0xff];

/// Text sink for the two score readouts. Holds formatted strings so the
/// frame loop only re-renders them; callers push new values on change.
pub struct ScoreBoard {
    score: String,
    high: String,
}

impl ScoreBoard {
    pub fn new() -> Self {
        let mut board = Self {
            score: String::new(),
            high: String::new(),
        };
        board.set(0, 0);
        board
    }

    pub fn set(&mut self, score: u32, high_score: u32) {
        self.score = format!("SCORE: {score}");
        self.high = format!("HIGH: {high_score}");
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one full frame of the current state.
pub fn draw(frame: &mut [u8], game: &Game, board: &ScoreBoard) {
    clear(frame, BACKGROUND);
    draw_grid(frame);

    for (i, pos) in game.snake.segments().enumerate() {
        fill_cell(frame, pos, SNAKE_PALETTE[i % SNAKE_PALETTE.len()]);
    }
    fill_cell(frame, game.food.position, game.food.color);

    draw_text(frame, &board.score, 8, 8, TEXT_SCALE, SCORE_COLOR);
    draw_text(frame, &board.high, 8, 26, TEXT_SCALE, HIGH_COLOR);

    if game.phase == Phase::NotStarted {
        draw_welcome(frame);
    }
}

fn clear(frame: &mut [u8], color: Rgba) {
    for px in frame.chunks_exact_mut(4) {
        px.copy_from_slice(&color);
    }
}

fn set_pixel(frame: &mut [u8], x: u32, y: u32, color: Rgba) {
    if x >= WIDTH || y >= HEIGHT {
        return;
    }
    let idx = ((y * WIDTH + x) * 4) as usize;
    frame[idx..idx + 4].copy_from_slice(&color);
}

fn blend_pixel(frame: &mut [u8], x: u32, y: u32, color: Rgba) {
    if x >= WIDTH || y >= HEIGHT {
        return;
    }
    let idx = ((y * WIDTH + x) * 4) as usize;
    let a = color[3] as u16;
    let ia = 255 - a;
    for c in 0..3 {
        let src = color[c] as u16;
        let dst = frame[idx + c] as u16;
        frame[idx + c] = ((src * a + dst * ia) / 255) as u8;
    }
    frame[idx + 3] = 255;
}

fn fill_rect(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, color: Rgba) {
    let x2 = (x + w).min(WIDTH);
    let y2 = (y + h).min(HEIGHT);
    for py in y..y2 {
        for px in x..x2 {
            set_pixel(frame, px, py, color);
        }
    }
}

fn blend_rect(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, color: Rgba) {
    let x2 = (x + w).min(WIDTH);
    let y2 = (y + h).min(HEIGHT);
    for py in y..y2 {
        for px in x..x2 {
            blend_pixel(frame, px, py, color);
        }
    }
}

fn stroke_vline(frame: &mut [u8], x: u32, color: Rgba) {
    for y in 0..HEIGHT {
        set_pixel(frame, x, y, color);
    }
}

fn stroke_hline(frame: &mut [u8], y: u32, color: Rgba) {
    for x in 0..WIDTH {
        set_pixel(frame, x, y, color);
    }
}

/// One line per cell boundary, GRID_COUNT + 1 of each; the outermost pair
/// falls on the frame edge and is clipped.
fn draw_grid(frame: &mut [u8]) {
    for i in 0..=GRID_COUNT {
        stroke_vline(frame, i * GRID_SIZE, GRID_LINE);
        stroke_hline(frame, i * GRID_SIZE, GRID_LINE);
    }
}

/// A cell is drawn one pixel short of the cell size so the grid shows
/// through between neighbors.
fn fill_cell(frame: &mut [u8], pos: Pos, color: Rgba) {
    let x = pos.x as u32 * GRID_SIZE;
    let y = pos.y as u32 * GRID_SIZE;
    fill_rect(frame, x, y, GRID_SIZE - 1, GRID_SIZE - 1, color);
}

fn draw_welcome(frame: &mut [u8]) {
    let text = "PRESS SPACE TO START";
    let text_w = text.len() as u32 * 6 * TEXT_SCALE;
    let panel_w = text_w + 40;
    let panel_h = 7 * TEXT_SCALE + 32;
    let panel_x = (WIDTH - panel_w) / 2;
    let panel_y = HEIGHT / 2 - panel_h / 2;
    blend_rect(frame, panel_x, panel_y, panel_w, panel_h, [0, 0, 0, 160]);
    draw_text(
        frame,
        text,
        panel_x + 20,
        panel_y + 16,
        TEXT_SCALE,
        WELCOME_COLOR,
    );
}

/// 5x7 bitmap glyphs for the few characters the HUD needs. Unknown
/// characters render as blanks of the same advance width.
fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    Some(match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        ' ' => [0b00000; 7],
        _ => return None,
    })
}

fn draw_char(frame: &mut [u8], ch: char, x: u32, y: u32, scale: u32, color: Rgba) -> u32 {
    if let Some(rows) = glyph_5x7(ch) {
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..5u32 {
                if (row >> (4 - rx)) & 1 == 1 {
                    fill_rect(
                        frame,
                        x + rx * scale,
                        y + ry as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
    6 * scale
}

fn draw_text(frame: &mut [u8], text: &str, x: u32, y: u32, scale: u32, color: Rgba) {
    let mut cx = x;
    for ch in text.chars() {
        cx += draw_char(frame, ch, cx, y, scale, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Dir;

    fn blank_frame() -> Vec<u8> {
        vec![0u8; (WIDTH * HEIGHT * 4) as usize]
    }

    fn pixel_at(frame: &[u8], x: u32, y: u32) -> Rgba {
        let idx = ((y * WIDTH + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn cells_leave_a_one_pixel_gap() {
        let mut frame = blank_frame();
        let red: Rgba = [0xff, 0, 0, 0xff];
        fill_cell(&mut frame, Pos::new(2, 3), red);

        let x0 = 2 * GRID_SIZE;
        let y0 = 3 * GRID_SIZE;
        assert_eq!(pixel_at(&frame, x0, y0), red);
        assert_eq!(pixel_at(&frame, x0 + GRID_SIZE - 2, y0 + GRID_SIZE - 2), red);
        // Last row and column of the cell stay background.
        assert_eq!(pixel_at(&frame, x0 + GRID_SIZE - 1, y0), [0, 0, 0, 0]);
        assert_eq!(pixel_at(&frame, x0, y0 + GRID_SIZE - 1), [0, 0, 0, 0]);
    }

    #[test]
    fn grid_lines_sit_on_cell_boundaries() {
        let mut frame = blank_frame();
        draw_grid(&mut frame);
        assert_eq!(pixel_at(&frame, 0, 5), GRID_LINE);
        assert_eq!(pixel_at(&frame, GRID_SIZE, 5), GRID_LINE);
        assert_eq!(pixel_at(&frame, 5, GRID_SIZE * 2), GRID_LINE);
        // Interior of a cell is untouched.
        assert_eq!(pixel_at(&frame, GRID_SIZE / 2, GRID_SIZE / 2), [0, 0, 0, 0]);
    }

    #[test]
    fn full_frame_draws_snake_head_in_first_palette_color() {
        let mut game = crate::game::Game::new(3);
        // Start first; the welcome overlay would otherwise blend over the
        // centered snake.
        game.apply(crate::input::InputAction::Start);
        // Food is drawn last and may legally overlap a segment; park it in
        // a corner so the palette check is stable.
        game.food.position = Pos::new(0, 0);
        let board = ScoreBoard::new();
        let mut frame = blank_frame();
        draw(&mut frame, &game, &board);

        let head = game.snake.head();
        let hx = head.x as u32 * GRID_SIZE + 2;
        let hy = head.y as u32 * GRID_SIZE + 2;
        assert_eq!(pixel_at(&frame, hx, hy), SNAKE_PALETTE[0]);

        // Second segment sits left of the head and wears the next color.
        let neck = head.stepped(Dir::Left);
        let nx = neck.x as u32 * GRID_SIZE + 2;
        let ny = neck.y as u32 * GRID_SIZE + 2;
        assert_eq!(pixel_at(&frame, nx, ny), SNAKE_PALETTE[1]);
    }

    #[test]
    fn background_fills_everywhere_else() {
        let mut game = crate::game::Game::new(3);
        game.food.position = Pos::new(0, 0);
        let board = ScoreBoard::new();
        let mut frame = blank_frame();
        draw(&mut frame, &game, &board);
        // A point strictly inside a far-corner cell, clear of the HUD, the
        // welcome overlay, the snake and the grid lines.
        let px = 28 * GRID_SIZE + 5;
        let py = 2 * GRID_SIZE + 5;
        assert_eq!(pixel_at(&frame, px, py), BACKGROUND);
    }
}
