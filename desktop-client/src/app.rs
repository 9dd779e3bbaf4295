use std::time::{Duration, Instant};

use engine::{GameRng, GameState, GameStatus, Mark};

use crate::config::Config;
use crate::game_ui::BoardUi;
use crate::log;

pub struct GameApp {
    game: GameState,
    rng: GameRng,
    board_ui: BoardUi,
    bot_delay: Duration,
    bot_deadline: Option<Instant>,
}

impl GameApp {
    pub fn new(config: &Config) -> Self {
        Self {
            game: GameState::new(),
            rng: GameRng::from_entropy(),
            board_ui: BoardUi::new(),
            bot_delay: Duration::from_millis(config.game.bot_delay_ms),
            bot_deadline: None,
        }
    }

    fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Turn: {}", self.game.turn()),
            GameStatus::XWon => "X Wins!".to_string(),
            GameStatus::OWon => "O Wins!".to_string(),
            GameStatus::Tie => "It's a Tie!".to_string(),
        }
    }

    /// Runs the delayed automated move. The deadline is armed when the turn
    /// passes to O and fires on the first frame past it; a stale deadline
    /// after reset would no-op anyway since a fresh game has X to move.
    fn advance_bot(&mut self, ctx: &egui::Context) {
        if self.game.status() != GameStatus::InProgress || self.game.turn() != Mark::O {
            self.bot_deadline = None;
            return;
        }

        match self.bot_deadline {
            None => {
                self.bot_deadline = Some(Instant::now() + self.bot_delay);
                ctx.request_repaint_after(self.bot_delay);
            }
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    self.game.automated_move(&mut self.rng);
                    self.bot_deadline = None;
                    if let Some(cell) = self.game.last_move() {
                        log!("O (bot) placed at cell {}", cell);
                    }
                } else {
                    ctx.request_repaint_after(deadline - now);
                }
            }
        }
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.bot_deadline = None;
        log!("New game started");
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_bot(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic-Tac-Toe");
                ui.add_space(8.0);

                let human_turn = self.game.status() == GameStatus::InProgress
                    && self.game.turn() == Mark::X;

                if let Some(cell) = self.board_ui.render_board(ui, &self.game, human_turn) {
                    self.game.apply_move(cell);
                    log!("X placed at cell {}", cell);
                }

                ui.add_space(8.0);

                let status = self.status_text();
                if self.game.status().is_terminal() {
                    ui.label(egui::RichText::new(status).size(18.0).strong());
                } else {
                    ui.label(egui::RichText::new(status).size(18.0));
                }

                ui.add_space(8.0);

                if ui.button("New Game").clicked() {
                    self.new_game();
                }
            });
        });
    }
}
