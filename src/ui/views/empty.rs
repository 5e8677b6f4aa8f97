use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_sin_preguntas(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 160.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Carga preguntas para empezar el test");
            if app.loading_default {
                ui.add_space(10.0);
                ui.spinner();
                ui.label("Descargando el test por defecto…");
            }
            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}
