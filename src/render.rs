use macroquad::prelude::*;

use crate::game::{Difficulty, GameMode, Snapshot};
use crate::geometry::{Cell, GridGeometry};
use crate::layout::{BUTTON_FONT_SIZE, Button, welcome_buttons};

// Olive handheld palette
const BACKGROUND_COLOR: Color = Color::new(155.0 / 255.0, 186.0 / 255.0, 90.0 / 255.0, 1.0);
const TEXT_COLOR: Color = Color::new(43.0 / 255.0, 51.0 / 255.0, 26.0 / 255.0, 1.0);
const SNAKE_COLOR: Color = TEXT_COLOR;
const FOOD_COLOR: Color = Color::new(220.0 / 255.0, 20.0 / 255.0, 60.0 / 255.0, 1.0);

const TITLE_FONT_SIZE: u16 = 90;
const SCORE_FONT_SIZE: u16 = 20;
const SCORE_MARGIN: f32 = 10.0;

/// Draws snapshots. Holds only layout, never game state.
pub struct Renderer {
    geometry: GridGeometry,
    buttons: [Button; 3],
}

impl Renderer {
    /// Needs a live window: button widths come from font metrics.
    pub fn new(geometry: GridGeometry) -> Self {
        let buttons = welcome_buttons(
            geometry.width() as f32,
            geometry.height() as f32,
            |label| measure_text(label, None, BUTTON_FONT_SIZE, 1.0).width,
        );
        Self { geometry, buttons }
    }

    pub fn buttons(&self) -> &[Button; 3] {
        &self.buttons
    }

    pub fn draw(&self, snapshot: &Snapshot, hovered: Option<Difficulty>) {
        clear_background(BACKGROUND_COLOR);
        match snapshot.mode {
            GameMode::Welcome => self.draw_welcome(hovered),
            GameMode::Playing => self.draw_board(snapshot),
            GameMode::GameOver => self.draw_game_over(snapshot),
        }
        self.draw_scores(snapshot);
    }

    fn draw_welcome(&self, hovered: Option<Difficulty>) {
        let mid = self.geometry.height() as f32 / 2.0;
        self.draw_centered("snake", mid - 60.0, TITLE_FONT_SIZE);
        self.draw_centered("CHOOSE LEVEL:", mid, SCORE_FONT_SIZE);
        for button in &self.buttons {
            draw_button(button, hovered == Some(button.difficulty));
        }
    }

    fn draw_board(&self, snapshot: &Snapshot) {
        self.fill_cell(snapshot.food, FOOD_COLOR);
        for cell in &snapshot.snake {
            self.fill_cell(*cell, SNAKE_COLOR);
        }
    }

    fn draw_game_over(&self, snapshot: &Snapshot) {
        let mid = self.geometry.height() as f32 / 2.0;
        let banner = if snapshot.new_high_score { "best score!" } else { "game over!" };
        self.draw_centered(banner, mid, TITLE_FONT_SIZE);
        self.draw_centered("Press Space to Restart", mid + 60.0, SCORE_FONT_SIZE);
    }

    fn draw_scores(&self, snapshot: &Snapshot) {
        let y = self.geometry.score_bar_baseline();
        let size = SCORE_FONT_SIZE as f32;
        draw_text(&format!("Score: {}", snapshot.score), SCORE_MARGIN, y, size, TEXT_COLOR);

        let high = format!("High Score: {}", snapshot.high_score);
        let width = measure_text(&high, None, SCORE_FONT_SIZE, 1.0).width;
        let x = self.geometry.width() as f32 - width - SCORE_MARGIN;
        draw_text(&high, x, y, size, TEXT_COLOR);
    }

    fn fill_cell(&self, cell: Cell, color: Color) {
        let rect = self.geometry.cell_rect(cell);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn draw_centered(&self, text: &str, y: f32, font_size: u16) {
        let width = measure_text(text, None, font_size, 1.0).width;
        let x = (self.geometry.width() as f32 - width) / 2.0;
        draw_text(text, x, y, font_size as f32, TEXT_COLOR);
    }
}

fn draw_button(button: &Button, hovered: bool) {
    let (fill, ink) = if hovered {
        (TEXT_COLOR, BACKGROUND_COLOR)
    } else {
        (BACKGROUND_COLOR, TEXT_COLOR)
    };
    let r = button.rect;
    draw_rectangle(r.x - 5.0, r.y - 5.0, r.w + 30.0, r.h + 5.0, fill);
    draw_text(button.label(), r.x + 10.0, r.y + r.h - 10.0, BUTTON_FONT_SIZE as f32, ink);
}
