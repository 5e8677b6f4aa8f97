pub mod layout;
pub mod views;

use crate::app::{QuizApp, QuizPhase};
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge el resultado de la descarga por defecto, si ya llegó.
        self.poll_default_fetch();
        if self.loading_default {
            // sin esto el poll no corre hasta el siguiente evento de usuario
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views/
        match self.state {
            AppState::TestViewer => views::test_viewer::ui_test_viewer(self, ctx),
            AppState::Quiz => match self.phase() {
                QuizPhase::Empty => views::empty::ui_sin_preguntas(self, ctx),
                QuizPhase::InProgress => views::quiz::ui_quiz(self, ctx),
                QuizPhase::Finished => views::finished::ui_fin_del_test(self, ctx),
            },
        }

        if self.load_dialog.is_some() {
            views::load_dialog::ui_load_dialog(self, ctx);
        }
    }
}
