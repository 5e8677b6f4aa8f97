use crate::QuizApp;
use egui::{CentralPanel, Color32, Context, RichText, ScrollArea};

/// Visor del test completo: todas las preguntas ordenadas por id, con las
/// opciones correctas resaltadas.
pub fn ui_test_viewer(app: &mut QuizApp, ctx: &Context) {
    let filas = app.filas_del_visor();

    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_width(ui.available_width().min(700.0));

            if filas.is_empty() {
                ui.add_space(40.0);
                ui.label("No hay preguntas cargadas.");
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                for fila in &filas {
                    ui.add_space(8.0);
                    ui.label(RichText::new(format!("Pregunta {}", fila.numero_1based)).weak());
                    ui.heading(&fila.enunciado);
                    if let Some(img) = &fila.img {
                        ui.hyperlink_to("🖼 Imagen", img);
                    }
                    for (texto, correcta) in &fila.opciones {
                        if *correcta {
                            ui.label(
                                RichText::new(texto)
                                    .strong()
                                    .color(Color32::from_rgb(60, 160, 60)),
                            );
                        } else {
                            ui.label(texto);
                        }
                    }
                    ui.add_space(8.0);
                    ui.separator();
                }
            });
        });
    });
}
