use crate::QuizApp;
use crate::app::LoadDialog;
use crate::ui::layout::two_button_row;
use egui::{Context, DragValue, Window};

enum Accion {
    Nada,
    Leer(String),
    Confirmar,
    Cancelar,
}

/// Diálogo modal de carga: primero la ruta del fichero, después el rango de
/// preguntas a quedarse. Se saca el diálogo del app mientras se pinta para
/// poder despachar la acción con `&mut QuizApp` al final.
pub fn ui_load_dialog(app: &mut QuizApp, ctx: &Context) {
    let Some(mut dialog) = app.load_dialog.take() else {
        return;
    };
    let mut accion = Accion::Nada;

    Window::new("Cargar preguntas")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| match &mut dialog {
            LoadDialog::PickFile { path } => {
                ui.label("Ruta del fichero JSON de preguntas:");
                ui.text_edit_singleline(path);
                ui.add_space(8.0);
                let (cargar, cancelar) = two_button_row(ui, 300.0, "Cargar", "Cancelar");
                if cargar && !path.trim().is_empty() {
                    accion = Accion::Leer(path.trim().to_owned());
                }
                if cancelar {
                    accion = Accion::Cancelar;
                }
            }
            LoadDialog::PickRange {
                questions,
                start,
                count,
            } => {
                let total = questions.len();
                ui.label(format!("Preguntas en el fichero: {total}"));
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label("Índice de la primera (desde 0):");
                    ui.add(DragValue::new(start).range(0..=total.saturating_sub(1)));
                });
                ui.horizontal(|ui| {
                    ui.label("Número de preguntas:");
                    ui.add(DragValue::new(count).range(1..=total));
                });
                ui.add_space(8.0);
                let (confirmar, cancelar) = two_button_row(ui, 300.0, "Cargar", "Cancelar");
                if confirmar {
                    accion = Accion::Confirmar;
                }
                if cancelar {
                    accion = Accion::Cancelar;
                }
            }
        });

    app.load_dialog = Some(dialog);
    match accion {
        Accion::Nada => {}
        Accion::Leer(path) => app.cargar_archivo(&path),
        Accion::Confirmar => app.confirmar_carga(),
        Accion::Cancelar => app.cancelar_carga(),
    }
}
