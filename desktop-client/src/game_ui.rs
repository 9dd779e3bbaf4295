use engine::{GameState, Mark, winning_triple};

pub struct BoardUi {
    last_hover: Option<usize>,
}

impl BoardUi {
    const GRID_SIZE: usize = 3;
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_width = available_width / Self::GRID_SIZE as f32;
        let cell_height = available_height / Self::GRID_SIZE as f32;

        cell_width
            .min(cell_height)
            .clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Paints the board and returns the cell the player clicked, if any.
    /// Hover highlighting and clicks only apply while `interactive`.
    pub fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        game: &GameState,
        interactive: bool,
    ) -> Option<usize> {
        // Leave room below the board for the status line and button.
        let cell_size =
            Self::calculate_cell_size(ui.available_width(), ui.available_height() - 80.0);
        let board_size = cell_size * Self::GRID_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=Self::GRID_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );

            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (index, &mark) in game.board().cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, index, cell_size);
            match mark {
                Mark::X => Self::draw_x(painter, cell_rect),
                Mark::O => Self::draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        let mut clicked_cell = None;

        if interactive {
            self.last_hover = response.hover_pos().and_then(|hover_pos| {
                let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
                let row = ((hover_pos.y - rect.top()) / cell_size) as usize;
                if col >= Self::GRID_SIZE || row >= Self::GRID_SIZE {
                    return None;
                }
                let index = row * Self::GRID_SIZE + col;
                game.board().is_valid_move(index).then_some(index)
            });

            if let Some(index) = self.last_hover {
                let hover_rect = Self::cell_rect(rect, index, cell_size);
                painter.rect_filled(
                    hover_rect,
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
            }

            if response.clicked() {
                clicked_cell = self.last_hover;
            }
        } else {
            self.last_hover = None;
        }

        if game.status().is_terminal()
            && let Some((triple, _)) = winning_triple(game.board())
        {
            let start = Self::cell_rect(rect, triple[0], cell_size).center();
            let end = Self::cell_rect(rect, triple[2], cell_size).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        clicked_cell
    }

    fn cell_rect(board_rect: egui::Rect, index: usize, cell_size: f32) -> egui::Rect {
        let col = index % Self::GRID_SIZE;
        let row = index / Self::GRID_SIZE;

        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
