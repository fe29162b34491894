use macroquad::math::{Rect, vec2};

use crate::game::Difficulty;

pub const BUTTON_FONT_SIZE: u16 = 30;
const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_SPACING: f32 = 60.0;
/// Buttons start this far below the vertical centre of the window.
const BUTTON_OFFSET_Y: f32 = 40.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Button {
    pub difficulty: Difficulty,
    pub rect: Rect,
}

impl Button {
    pub fn label(&self) -> &'static str {
        self.difficulty.label()
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(vec2(x, y))
    }
}

/// Lays out the difficulty buttons in one centred row. `measure` returns the
/// rendered width of a label.
pub fn welcome_buttons(width: f32, height: f32, measure: impl Fn(&str) -> f32) -> [Button; 3] {
    let widths = Difficulty::ALL.map(|d| measure(d.label()));
    let total = widths.iter().sum::<f32>() + BUTTON_SPACING * 2.0;
    let y = height / 2.0 + BUTTON_OFFSET_Y;

    let mut x = (width - total) / 2.0;
    let mut buttons = [Button {
        difficulty: Difficulty::Slug,
        rect: Rect::default(),
    }; 3];
    for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        buttons[i] = Button {
            difficulty,
            rect: Rect::new(x, y, widths[i], BUTTON_HEIGHT),
        };
        x += widths[i] + BUTTON_SPACING;
    }
    buttons
}

pub fn button_at(buttons: &[Button], x: f32, y: f32) -> Option<Difficulty> {
    buttons.iter().find(|b| b.contains(x, y)).map(|b| b.difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 20px per glyph stands in for real font metrics
    fn fixed_width(text: &str) -> f32 {
        text.len() as f32 * 20.0
    }

    #[test]
    fn buttons_are_centred_in_order() {
        let buttons = welcome_buttons(600.0, 600.0, fixed_width);
        let labels: Vec<_> = buttons.iter().map(Button::label).collect();
        assert_eq!(labels, vec!["SLUG", "WORM", "PYTHON"]);

        // 80 + 80 + 120 + 2 * 60 = 400 wide, so the row starts at 100
        assert_eq!(buttons[0].rect.x, 100.0);
        assert_eq!(buttons[1].rect.x, 240.0);
        assert_eq!(buttons[2].rect.x, 380.0);
        assert!(buttons.iter().all(|b| b.rect.y == 340.0));
    }

    #[test]
    fn hit_testing() {
        let buttons = welcome_buttons(600.0, 600.0, fixed_width);
        assert_eq!(button_at(&buttons, 120.0, 360.0), Some(Difficulty::Slug));
        assert_eq!(button_at(&buttons, 400.0, 350.0), Some(Difficulty::Python));
        assert_eq!(button_at(&buttons, 200.0, 360.0), None);
        assert_eq!(button_at(&buttons, 120.0, 100.0), None);
    }
}
