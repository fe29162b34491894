use macroquad::input::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, mouse_position,
};

use crate::game::{Command, Difficulty, GameMode};
use crate::geometry::Direction;
use crate::layout::{Button, button_at};

const WATCHED_KEYS: [KeyCode; 11] = [
    KeyCode::S,
    KeyCode::W,
    KeyCode::P,
    KeyCode::A,
    KeyCode::D,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Space,
    KeyCode::Escape,
];

/// Maps a key press to a command for the current screen.
pub fn command_for_key(mode: GameMode, key: KeyCode) -> Option<Command> {
    match mode {
        GameMode::Welcome => match key {
            KeyCode::S => Some(Command::SelectDifficulty(Difficulty::Slug)),
            KeyCode::W => Some(Command::SelectDifficulty(Difficulty::Worm)),
            KeyCode::P => Some(Command::SelectDifficulty(Difficulty::Python)),
            _ => None,
        },
        GameMode::Playing => {
            let direction = match key {
                KeyCode::Up | KeyCode::W => Direction::Up,
                KeyCode::Down | KeyCode::S => Direction::Down,
                KeyCode::Left | KeyCode::A => Direction::Left,
                KeyCode::Right | KeyCode::D => Direction::Right,
                _ => return None,
            };
            Some(Command::SetDirection(direction))
        }
        GameMode::GameOver => match key {
            KeyCode::Space => Some(Command::Restart),
            _ => None,
        },
    }
}

/// Turns window events into game commands and tracks the hovered button.
#[derive(Debug, Default)]
pub struct InputTranslator {
    hovered: Option<Difficulty>,
    quit: bool,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<Difficulty> {
        self.hovered
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Reads this frame's keyboard and mouse state.
    pub fn poll(&mut self, mode: GameMode, buttons: &[Button]) -> Vec<Command> {
        let mut commands: Vec<Command> = WATCHED_KEYS
            .into_iter()
            .filter(|key| is_key_pressed(*key))
            .filter_map(|key| {
                if key == KeyCode::Escape {
                    self.quit = true;
                }
                command_for_key(mode, key)
            })
            .collect();

        let (x, y) = mouse_position();
        self.pointer_moved(mode, buttons, x, y);
        if is_mouse_button_pressed(MouseButton::Left) {
            commands.extend(self.clicked(mode, buttons, x, y));
        }
        commands
    }

    pub fn pointer_moved(&mut self, mode: GameMode, buttons: &[Button], x: f32, y: f32) {
        self.hovered = match mode {
            GameMode::Welcome => button_at(buttons, x, y),
            _ => None,
        };
    }

    pub fn clicked(&self, mode: GameMode, buttons: &[Button], x: f32, y: f32) -> Option<Command> {
        if mode != GameMode::Welcome {
            return None;
        }
        button_at(buttons, x, y).map(Command::SelectDifficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::welcome_buttons;

    fn buttons() -> [Button; 3] {
        welcome_buttons(600.0, 600.0, |text| text.len() as f32 * 20.0)
    }

    #[test]
    fn welcome_keys_pick_difficulty() {
        assert_eq!(
            command_for_key(GameMode::Welcome, KeyCode::P),
            Some(Command::SelectDifficulty(Difficulty::Python))
        );
        assert_eq!(command_for_key(GameMode::Welcome, KeyCode::Up), None);
        assert_eq!(command_for_key(GameMode::Welcome, KeyCode::Space), None);
    }

    #[test]
    fn arrows_steer_only_while_playing() {
        assert_eq!(
            command_for_key(GameMode::Playing, KeyCode::Left),
            Some(Command::SetDirection(Direction::Left))
        );
        assert_eq!(
            command_for_key(GameMode::Playing, KeyCode::S),
            Some(Command::SetDirection(Direction::Down))
        );
        assert_eq!(command_for_key(GameMode::GameOver, KeyCode::Left), None);
    }

    #[test]
    fn space_restarts_after_game_over() {
        assert_eq!(
            command_for_key(GameMode::GameOver, KeyCode::Space),
            Some(Command::Restart)
        );
        assert_eq!(command_for_key(GameMode::Playing, KeyCode::Space), None);
    }

    #[test]
    fn clicks_select_on_welcome_only() {
        let buttons = buttons();
        let input = InputTranslator::new();
        assert_eq!(
            input.clicked(GameMode::Welcome, &buttons, 250.0, 350.0),
            Some(Command::SelectDifficulty(Difficulty::Worm))
        );
        assert_eq!(input.clicked(GameMode::Playing, &buttons, 250.0, 350.0), None);
    }

    #[test]
    fn hover_clears_off_welcome() {
        let buttons = buttons();
        let mut input = InputTranslator::new();
        input.pointer_moved(GameMode::Welcome, &buttons, 120.0, 350.0);
        assert_eq!(input.hovered(), Some(Difficulty::Slug));
        input.pointer_moved(GameMode::Playing, &buttons, 120.0, 350.0);
        assert_eq!(input.hovered(), None);
    }
}
