use cgmath::*;

use crate::rendering::Quad;

use super::{
    constants::{colors, hud},
    game_state::GameState,
};

// ---------------------------------------------------------------------------------------------------------------------

const GLYPH_COLUMNS: usize = 3;
const GLYPH_ROWS: usize = 5;
/// Glyph pixels per text line height
const LINE_HEIGHT_PIXELS: f32 = 7.0;
/// Horizontal advance per character, in glyph pixels
const ADVANCE_PIXELS: f32 = 4.0;

/// Each row is a 3-bit mask, most significant bit leftmost. Text is matched case-insensitively;
/// characters without a glyph render as blanks.
fn glyph(c: char) -> [u8; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        _ => [0; GLYPH_ROWS],
    }
}

/// Lays out `text` as quads in screen pixels, one quad per lit glyph pixel.
pub fn layout_text(text: &str, origin: Point2<f32>, font_px: f32, color: [f32; 4]) -> Vec<Quad> {
    let pixel = font_px / LINE_HEIGHT_PIXELS;
    let mut quads = vec![];
    for (i, c) in text.chars().enumerate() {
        let glyph_origin = origin + vec2(i as f32 * ADVANCE_PIXELS * pixel, 0.0);
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                    quads.push(Quad::new(
                        glyph_origin + vec2(col as f32 * pixel, row as f32 * pixel),
                        vec2(pixel, pixel),
                        color,
                    ));
                }
            }
        }
    }
    quads
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn ammo_text(ammo: i32) -> String {
    format!("Ammo: {}", ammo)
}

// ---------------------------------------------------------------------------------------------------------------------

/// The score and ammo readouts. Fixed to the screen; they do not scroll with the camera.
/// Text is rebuilt only when the counters it shows change.
#[derive(Default)]
pub struct GameUi {
    score: Option<u32>,
    ammo: Option<i32>,
    score_quads: Vec<Quad>,
    ammo_quads: Vec<Quad>,
}

impl GameUi {
    pub fn update(&mut self, game_state: &GameState) {
        let score = game_state.score();
        if self.score != Some(score) {
            self.score = Some(score);
            self.score_quads = layout_text(
                &score_text(score),
                hud::SCORE_ORIGIN.into(),
                hud::SCORE_FONT_PX,
                colors::SCORE_TEXT,
            );
        }

        let ammo = game_state.ammo();
        if self.ammo != Some(ammo) {
            self.ammo = Some(ammo);
            self.ammo_quads = layout_text(
                &ammo_text(ammo),
                hud::AMMO_ORIGIN.into(),
                hud::AMMO_FONT_PX,
                colors::AMMO_TEXT,
            );
        }
    }

    pub fn draw(&self, quads: &mut Vec<Quad>) {
        quads.extend_from_slice(&self.score_quads);
        quads.extend_from_slice(&self.ammo_quads);
    }
}

#[cfg(test)]
mod game_ui_tests {
    use super::*;

    fn lit_pixels(text: &str) -> usize {
        text.chars()
            .map(|c| glyph(c).iter().map(|r| r.count_ones() as usize).sum::<usize>())
            .sum()
    }

    #[test]
    fn texts_are_formatted() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(ammo_text(30), "Ammo: 30");
        assert_eq!(ammo_text(-1), "Ammo: -1");
    }

    #[test]
    fn every_hud_character_has_a_glyph() {
        for c in "Score: Ammo: -0123456789".chars().filter(|c| *c != ' ') {
            assert!(glyph(c).iter().any(|r| *r != 0), "missing glyph {:?}", c);
        }
    }

    #[test]
    fn layout_emits_one_quad_per_lit_pixel() {
        let quads = layout_text("-1", point2(0.0, 0.0), 7.0, [0.0; 4]);
        assert_eq!(quads.len(), lit_pixels("-1"));
        // '-' is a single row of 3 pixels in the middle of the cell
        assert_eq!(quads[0].origin, [0.0, 2.0]);
        assert_eq!(quads[0].extent, [1.0, 1.0]);
        // second character is advanced by 4 pixels
        assert!(quads[3..].iter().all(|q| q.origin[0] >= 4.0));
    }

    #[test]
    fn hud_follows_score_and_ammo() {
        let mut state = GameState::new(&crate::Options {
            debug_overlay: false,
            seed: Some(1),
        });
        let mut ui = GameUi::default();
        let mut quads = vec![];

        ui.update(&state);
        ui.draw(&mut quads);
        assert_eq!(quads.len(), lit_pixels("Score: 0") + lit_pixels("Ammo: 30"));

        state.cast_spell(crate::entities::util::Facing::Right);
        ui.update(&state);
        quads.clear();
        ui.draw(&mut quads);
        assert_eq!(quads.len(), lit_pixels("Score: 0") + lit_pixels("Ammo: 29"));

        // ammo text sits below the score text, in screen space
        let ammo_top = quads[lit_pixels("Score: 0")..]
            .iter()
            .map(|q| q.origin[1])
            .fold(f32::MAX, f32::min);
        assert!(ammo_top >= hud::AMMO_ORIGIN.1);
    }

    #[test]
    fn blank_characters_emit_nothing() {
        assert!(layout_text("  ", point2(5.0, 5.0), 14.0, [0.0; 4]).is_empty());
    }
}
