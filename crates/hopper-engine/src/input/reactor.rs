//! Input reactor: movement commands → acceleration, flags and facing.

use crate::api::config::PhysicsConfig;
use crate::api::types::MoveCommand;
use crate::components::entity::Entity;
use crate::input::queue::InputEvent;

impl Entity {
    /// Start a movement command. Repeating the same command is a no-op.
    pub fn start_move(&mut self, command: MoveCommand, config: &PhysicsConfig) {
        let body = &mut self.body;
        match command {
            MoveCommand::Right => {
                body.accel.x = config.x_acceleration;
                body.moving_x = true;
            }
            MoveCommand::Left => {
                body.accel.x = -config.x_acceleration;
                body.moving_x = true;
            }
            MoveCommand::Up => body.accel.y = -config.y_acceleration,
            MoveCommand::Down => body.accel.y = config.y_acceleration,
            MoveCommand::Jump => {
                body.accel.y = -config.jump_acceleration;
                body.jumping = true;
            }
        }

        // Acceleration pointing against the facing means the entity turned.
        if body.accel.x * body.direction.sign() < 0.0 {
            log::debug!("entity {:?} turned, accel.x={}", self.id, body.accel.x);
            self.sprite.mirror();
            body.direction = body.direction.reversed();
        }
    }

    /// Stop a movement command. Left/right only halt the entity if it was
    /// actually heading that way.
    pub fn stop_move(&mut self, command: MoveCommand) {
        let body = &mut self.body;
        match command {
            MoveCommand::Right => {
                if body.speed.x > 0.0 || body.accel.x > 0.0 {
                    body.speed.x = 0.0;
                    body.accel.x = 0.0;
                }
                body.moving_x = false;
            }
            MoveCommand::Left => {
                if body.speed.x < 0.0 || body.accel.x < 0.0 {
                    body.speed.x = 0.0;
                    body.accel.x = 0.0;
                }
                body.moving_x = false;
            }
            MoveCommand::Down => {
                body.speed.y = 0.0;
                body.accel.y = 0.0;
            }
            MoveCommand::Up | MoveCommand::Jump => {}
        }
    }

    /// Dispatch one input event.
    pub fn apply_input(&mut self, event: InputEvent, config: &PhysicsConfig) {
        match event {
            InputEvent::Move(command) => self.start_move(command, config),
            InputEvent::StopMove(command) => self.stop_move(command),
        }
    }
}
