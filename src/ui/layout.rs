use crate::QuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

/// Barra de navegación superior: cambiar de vista, reiniciar, cargar el test
/// por defecto o un fichero propio.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("Testownik");
            ui.separator();

            let etiqueta_vista = match app.state {
                AppState::Quiz => "📋 Test completo",
                AppState::TestViewer => "▶ Uno a uno",
            };
            if ui
                .add_enabled(app.session.is_some(), Button::new(etiqueta_vista))
                .clicked()
            {
                app.alternar_vista();
            }

            if ui
                .add_enabled(app.session.is_some(), Button::new("🔄 Reiniciar test"))
                .clicked()
            {
                app.reiniciar_test();
            }

            if ui
                .add_enabled(!app.loading_default, Button::new("⬇ Test por defecto"))
                .clicked()
            {
                app.cargar_test_por_defecto();
            }

            if ui.button("📂 Cargar preguntas…").clicked() {
                app.abrir_dialogo_carga();
            }

            if app.loading_default {
                ui.spinner();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado verticalmente, con un ancho máximo de contenido y un
/// bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
