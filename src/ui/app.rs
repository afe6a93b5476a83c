//! Main window of the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};

use super::board_view::{BoardView, Overlay};
use super::session::Session;
use super::theme::*;
use crate::agent::AgentKind;
use crate::board::Stone;
use crate::config::GameConfig;
use crate::game::{GameState, Outcome, RepeatCount};

pub struct GobangApp {
    session: Session,
    board_view: BoardView,
    repeat: RepeatCount,
    show_debug: bool,
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            board_view: BoardView::default(),
            repeat: RepeatCount::None,
            show_debug: false,
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Start (Ctrl+P)").clicked() {
                        self.session.start();
                        ui.close_menu();
                    }
                    if ui.button("Restart (Ctrl+R)").clicked() {
                        self.session.restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Repeat", |ui| {
                        for repeat in RepeatCount::ALL {
                            if ui.radio_value(&mut self.repeat, repeat, repeat.label()).clicked() {
                                self.session.set_repeat(repeat);
                                ui.close_menu();
                            }
                        }
                    });
                });

                ui.menu_button("Option", |ui| {
                    for (seat, label) in ["Player 0", "Player 1"].into_iter().enumerate() {
                        ui.menu_button(label, |ui| {
                            for kind in AgentKind::ALL {
                                if ui.radio_value(&mut self.session.seat_kinds[seat], kind, kind.name()).clicked() {
                                    ui.close_menu();
                                }
                            }
                        });
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let [black, white] = self.session.seat_kinds;
                    ui.label(format!("{black} vs {white}"));
                });
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(10.0);

                self.render_status_card(ui);
                ui.add_space(8.0);
                self.render_score_card(ui);

                if self.show_debug {
                    ui.add_space(8.0);
                    self.render_search_card(ui);
                }

                ui.add_space(8.0);
                self.render_log(ui);
            });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        let game = &self.session.game;
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            let turn = match game.state() {
                GameState::Running => format!("{} to move", game.current_stone().name()),
                GameState::Idle => "Idle".to_string(),
                GameState::Over => "Game Over".to_string(),
            };
            ui.label(RichText::new(turn).size(18.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new(&self.session.message).size(12.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("Move #{}", game.step())).size(11.0).color(TEXT_MUTED));

            if let Some(elapsed) = self.session.thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("thinking {secs:.2}s")).size(14.0).color(color));
            } else if let Some(time) = self.session.last_think_time {
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let score = self.session.game.scoreboard();
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("WINS").size(10.0).color(TEXT_MUTED));
            for stone in [Stone::Black, Stone::White] {
                ui.label(
                    RichText::new(format!("{}: {}", stone.name(), score.wins(stone)))
                        .size(14.0)
                        .color(TEXT_PRIMARY),
                );
            }
            let total = match self.session.game.repeat().games() {
                Some(n) => format!("Draws: {}  Games: {}/{n}", score.draws(), score.games()),
                None => format!("Draws: {}  Games: {}", score.draws(), score.games()),
            };
            ui.label(RichText::new(total).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_search_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
            match &self.session.last_search {
                Some(result) => {
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).color(TIMER_NORMAL));
                    ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_SECONDARY));
                    if let Some(pos) = result.best_move {
                        ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(TEXT_PRIMARY));
                    }
                }
                None => {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_log(&self, ui: &mut egui::Ui) {
        ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
            for line in &self.session.log {
                ui.label(RichText::new(line).size(11.0).monospace().color(TEXT_SECONDARY));
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let game = &self.session.game;
            let win_line = match game.outcome() {
                Some(Outcome::Win { line, .. }) => Some(line),
                _ => None,
            };
            let overlay = Overlay {
                input: self.session.click_stone(),
                last_move: game.last_move(),
                win_line,
            };

            if let Some(pos) = self.board_view.show(ui, game.board(), &overlay) {
                self.session.click(pos);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (start, restart, toggle_debug) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::P),
                i.modifiers.command && i.key_pressed(egui::Key::R),
                !i.modifiers.command && i.key_pressed(egui::Key::D),
            )
        });
        if start {
            self.session.start();
        }
        if restart {
            self.session.restart();
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.poll();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_thinking() || self.session.game.wants_rematch() {
            ctx.request_repaint();
        }
    }
}
