use crate::components::body::KinematicBody;
use crate::input::queue::InputEvent;

/// Decision hook for non-player entities.
///
/// The world calls `make_decision` once per tick, right after the body has
/// been integrated. Decisions are expressed as the same movement events the
/// player's input produces, pushed into `out`.
pub trait Behavior {
    fn make_decision(&mut self, body: &KinematicBody, out: &mut Vec<InputEvent>);
}

/// A behavior that never acts. Used by test monsters and placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Behavior for Idle {
    fn make_decision(&mut self, _body: &KinematicBody, _out: &mut Vec<InputEvent>) {}
}
