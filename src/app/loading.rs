use super::*;
use crate::data::{fetch_default_questions, parse_questions};
use crate::shuffle::shuffle_questions;
use std::sync::mpsc;

impl QuizApp {
    /// Lanza la descarga del test por defecto en un hilo aparte; el resultado
    /// se recoge en `poll_default_fetch` desde el bucle de la UI. Mientras
    /// está en marcha, el botón que la dispara queda deshabilitado; no hay
    /// cancelación, si se cruzan dos cargas gana la última en llegar.
    pub fn cargar_test_por_defecto(&mut self) {
        if self.loading_default {
            return;
        }
        self.loading_default = true;
        let (tx, rx) = mpsc::channel();
        self.default_rx = Some(rx);
        std::thread::spawn(move || {
            let _ = tx.send(fetch_default_questions());
        });
    }

    /// Recoge, si ya llegó, el resultado de la descarga por defecto. Un
    /// fallo se muestra como mensaje y deja la sesión actual intacta.
    pub fn poll_default_fetch(&mut self) {
        let resultado = self.default_rx.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(resultado) = resultado {
            self.default_rx = None;
            self.loading_default = false;
            match resultado {
                Ok(questions) => {
                    self.message.clear();
                    self.aplicar_preguntas(questions);
                }
                Err(e) => self.message = format!("⚠ {e}"),
            }
        }
    }

    /// Abre el diálogo de carga en el paso de elegir fichero.
    pub fn abrir_dialogo_carga(&mut self) {
        self.load_dialog = Some(LoadDialog::PickFile {
            path: String::new(),
        });
    }

    /// Lee y parsea el fichero elegido; si es válido pasa al paso de rango
    /// con todo el fichero preseleccionado, si no cierra el diálogo con un
    /// mensaje de error.
    pub fn cargar_archivo(&mut self, path: &str) {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                self.message = format!("⚠ No se pudo leer el fichero: {e}");
                self.load_dialog = None;
                return;
            }
        };
        match parse_questions(&raw) {
            Ok(questions) => {
                self.message.clear();
                let total = questions.len();
                self.load_dialog = Some(LoadDialog::PickRange {
                    questions,
                    start: 0,
                    count: total,
                });
            }
            Err(e) => {
                self.message = format!("⚠ {e}");
                self.load_dialog = None;
            }
        }
    }

    /// Confirma el rango elegido: recorta a [start, start+count) con los
    /// límites saneados y lo convierte en la sesión activa.
    pub fn confirmar_carga(&mut self) {
        let Some(LoadDialog::PickRange {
            questions,
            start,
            count,
        }) = self.load_dialog.take()
        else {
            return;
        };
        if questions.is_empty() {
            return;
        }
        let start = start.min(questions.len() - 1);
        let end = (start + count.max(1)).min(questions.len());
        self.aplicar_preguntas(questions[start..end].to_vec());
    }

    /// Descarta el fichero parseado sin tocar la sesión actual.
    pub fn cancelar_carga(&mut self) {
        self.load_dialog = None;
    }

    /// Sustituye la sesión entera por una recién barajada sobre `questions`.
    pub fn aplicar_preguntas(&mut self, questions: Vec<Question>) {
        self.session = Some(Session::new(shuffle_questions(questions)));
        self.persist();
    }
}
