//! Board canvas for the Gobang GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Pos, Stone};
use crate::rules::WinLine;

use super::theme::*;

/// Renders the board and turns clicks into board positions
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
    rows: usize,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 25.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

/// What the canvas should show besides the stones
pub struct Overlay {
    /// Stone to preview under the pointer, `None` disables clicking
    pub input: Option<Stone>,
    pub last_move: Option<Pos>,
    pub win_line: Option<WinLine>,
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay) -> Option<Pos> {
        self.rows = board.rows();
        self.cols = board.cols();

        let available = ui.available_size();
        let spans = Vec2::new((self.cols - 1) as f32, (self.rows - 1) as f32);
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / spans.x)
            .min((available.y - 2.0 * BOARD_MARGIN) / spans.y)
            .max(8.0);
        let size = spans * self.cell_size + Vec2::splat(2.0 * BOARD_MARGIN);

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = overlay.win_line {
            let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_LINE);
            painter.line_segment([self.board_to_screen(line.start), self.board_to_screen(line.end)], stroke);
        }

        let stone = overlay.input?;
        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = board.is_empty(board_pos);

        let color = if is_valid {
            hover_stone(stone)?
        } else {
            hover_invalid()
        };
        painter.circle_filled(self.board_to_screen(board_pos), self.stone_radius(), color);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn stone_radius(&self) -> f32 {
        self.cell_size * STONE_RADIUS_RATIO
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let width = (self.cols - 1) as f32 * self.cell_size;
        let height = (self.rows - 1) as f32 * self.cell_size;
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);

        for col in 0..self.cols {
            let x = col as f32 * self.cell_size;
            painter.line_segment([origin + Vec2::new(x, 0.0), origin + Vec2::new(x, height)], stroke);
        }
        for row in 0..self.rows {
            let y = row as f32 * self.cell_size;
            painter.line_segment([origin + Vec2::new(0.0, y), origin + Vec2::new(width, y)], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in star_points(self.rows, self.cols) {
            let center = self.board_to_screen(Pos::new(row as u8, col as u8));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Row and column numbers, 0-based like console input
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);
        let edge = BOARD_MARGIN * 0.45;

        for col in 0..self.cols {
            let x = self.board_to_screen(Pos::new(0, col as u8)).x;
            for y in [self.board_rect.min.y + edge, self.board_rect.max.y - edge] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, col, font.clone(), GRID_LINE);
            }
        }
        for row in 0..self.rows {
            let y = self.board_to_screen(Pos::new(row as u8, 0)).y;
            for x in [self.board_rect.min.x + edge, self.board_rect.max.x - edge] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, row, font.clone(), GRID_LINE);
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for idx in 0..board.area() {
            let stone = board.at(idx);
            if stone != Stone::Empty {
                self.draw_stone(painter, board.pos_of(idx), stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(center - Vec2::splat(radius * 0.3), radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    /// Nearest grid intersection to a screen point, if on the board
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;

        let inside = (0..self.rows as i32).contains(&row) && (0..self.cols as i32).contains(&col);
        inside.then(|| Pos::new(row as u8, col as u8))
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
