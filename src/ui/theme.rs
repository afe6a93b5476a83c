//! Colors and sizes for the Gobang GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_LINE: Color32 = Color32::from_rgb(220, 30, 30);

pub fn hover_stone(stone: crate::board::Stone) -> Option<Color32> {
    match stone {
        crate::board::Stone::Black => Some(Color32::from_rgba_unmultiplied(20, 20, 20, 80)),
        crate::board::Stone::White => Some(Color32::from_rgba_unmultiplied(240, 240, 240, 80)),
        crate::board::Stone::Empty => None,
    }
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Thinking timer
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const STONE_RADIUS_RATIO: f32 = 0.4;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const WIN_LINE_WIDTH: f32 = 3.0;

/// Star points for a board, 3 from each edge plus the center, only on
/// boards large enough for them to be apart.
pub fn star_points(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    if rows < 13 || cols < 13 {
        return vec![(rows / 2, cols / 2)];
    }
    let rs = [3, rows / 2, rows - 4];
    let cs = [3, cols / 2, cols - 4];
    rs.iter()
        .flat_map(|&r| cs.iter().map(move |&c| (r, c)))
        .collect()
}
