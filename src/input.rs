use winit::event::VirtualKeyCode;

use crate::pos::Dir;

/// A recognized keypress. Everything else is dropped before it reaches
/// the game; phase gating happens in `Game::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Start,
    Turn(Dir),
}

/// Keys the game listens for, in dispatch order.
pub const BOUND_KEYS: [VirtualKeyCode; 5] = [
    VirtualKeyCode::Space,
    VirtualKeyCode::Up,
    VirtualKeyCode::Down,
    VirtualKeyCode::Left,
    VirtualKeyCode::Right,
];

pub fn action_for(key: VirtualKeyCode) -> Option<InputAction> {
    match key {
        VirtualKeyCode::Space => Some(InputAction::Start),
        VirtualKeyCode::Up => Some(InputAction::Turn(Dir::Up)),
        VirtualKeyCode::Down => Some(InputAction::Turn(Dir::Down)),
        VirtualKeyCode::Left => Some(InputAction::Turn(Dir::Left)),
        VirtualKeyCode::Right => Some(InputAction::Turn(Dir::Right)),
        _ => None,
    }
}
