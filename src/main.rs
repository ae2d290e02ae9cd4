use std::time::Instant;

use anyhow::Result;
use pixels::{Pixels, SurfaceTexture};
use tracing::info;
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

mod config;
mod food;
mod game;
mod input;
mod pos;
mod render;
mod snake;

use config::{HEIGHT, TICK, WIDTH};
use game::{Game, Phase};
use render::ScoreBoard;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wrapsnake=info")),
        )
        .init();

    let event_loop = EventLoop::new();
    let mut keyboard = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title("Wrapsnake")
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH, HEIGHT, surface_texture)?
    };

    let mut game = Game::new(rand::random());
    let mut board = ScoreBoard::new();
    let mut last_tick = Instant::now();

    info!(grid = config::GRID_COUNT, cell = config::GRID_SIZE, "starting");

    // First frame goes up before any input arrives.
    window.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::RedrawRequested(_) = event {
            render::draw(pixels.frame_mut(), &game, &board);
            if pixels.render().is_err() {
                *control_flow = ControlFlow::Exit;
            }
        }

        if keyboard.update(&event) {
            if keyboard.key_pressed(VirtualKeyCode::Escape)
                || keyboard.close_requested()
                || keyboard.destroyed()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }

            for key in input::BOUND_KEYS {
                if keyboard.key_pressed(key) {
                    let was_running = game.phase == Phase::Running;
                    if let Some(action) = input::action_for(key) {
                        game.apply(action);
                    }
                    if !was_running && game.phase == Phase::Running {
                        // The transition arms the tick timer.
                        last_tick = Instant::now();
                    }
                }
            }

            if game.phase == Phase::Running && last_tick.elapsed() >= TICK {
                let outcome = game.tick();
                // Advance by the period, not to now, so the cadence holds.
                last_tick += TICK;
                if outcome.score_changed() {
                    board.set(game.score, game.high_score);
                }
            }

            window.request_redraw();
        }
    });
}
