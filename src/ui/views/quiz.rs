use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = &app.session else {
        return;
    };
    let Some(q) = session.current_question().cloned() else {
        return;
    };
    let numero = session.current + 1;
    let total = session.questions.len();
    let seleccion = session.selected;
    let revelada = session.show_answer;
    let correcta = q
        .answer
        .first()
        .and_then(|&i| q.options.get(i))
        .cloned()
        .unwrap_or_default();

    centered_panel(ctx, 420.0, 650.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Pregunta {numero} de {total}"));
            ui.add_space(10.0);

            if let Some(img) = &q.img {
                ui.hyperlink_to("🖼 Imagen de la pregunta", img);
                ui.add_space(5.0);
            }

            // Enunciado con scroll acotado
            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                ui.label(&q.question);
            });
            ui.add_space(10.0);

            // Con la respuesta revelada las opciones quedan bloqueadas
            ui.add_enabled_ui(!revelada, |ui| {
                for (idx, opt) in q.options.iter().enumerate() {
                    if ui.radio(seleccion == Some(idx), opt).clicked() {
                        app.seleccionar_opcion(idx);
                    }
                }
            });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let enviar = ui.add_enabled(
                    seleccion.is_some() && !revelada,
                    Button::new("Enviar respuesta"),
                );
                if enviar.clicked() {
                    app.enviar_respuesta();
                }
                if revelada && ui.button("Siguiente pregunta").clicked() {
                    app.siguiente_pregunta();
                }
            });

            if revelada {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("❌ Incorrecto. Respuesta correcta: {correcta}"))
                        .color(Color32::from_rgb(200, 60, 60)),
                );
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
