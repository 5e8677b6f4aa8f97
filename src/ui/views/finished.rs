use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::Context;

pub fn ui_fin_del_test(app: &mut QuizApp, ctx: &Context) {
    let resultado = app.score_text();

    centered_panel(ctx, 220.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("¡Fin del test!");
            ui.add_space(10.0);
            ui.label(format!("Tu resultado: {resultado}"));
            ui.add_space(20.0);

            let (reiniciar, por_defecto) =
                two_button_row(ui, 400.0, "🔄 Reiniciar test", "⬇ Test por defecto");
            if reiniciar {
                app.reiniciar_test();
            }
            if por_defecto {
                app.cargar_test_por_defecto();
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}
