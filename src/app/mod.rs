use crate::data::LoadError;
use crate::model::{AppState, Question};
use crate::session::Session;
use crate::storage::SessionStore;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod queries;
pub mod view_models;

pub use queries::QuizPhase;
pub use view_models::QuestionRow;

/// Diálogo de carga de fichero, en dos pasos: elegir el fichero y acotar el
/// rango de preguntas a cargar. Cancelar en cualquier paso descarta todo sin
/// tocar la sesión actual.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadDialog {
    PickFile {
        path: String,
    },
    PickRange {
        questions: Vec<Question>,
        start: usize,
        count: usize,
    },
}

pub struct QuizApp {
    pub session: Option<Session>,
    pub store: SessionStore,
    pub state: AppState,
    pub message: String,
    pub load_dialog: Option<LoadDialog>,
    pub loading_default: bool,
    pub(crate) default_rx: Option<Receiver<Result<Vec<Question>, LoadError>>>,
}

impl QuizApp {
    /// Arranca recuperando la sesión guardada; si no hay ninguna (o está
    /// corrupta), lanza la descarga del test por defecto.
    pub fn new() -> Self {
        let store = SessionStore::new();
        let session = store.load();
        let mut app = Self {
            session,
            store,
            state: AppState::Quiz,
            message: String::new(),
            load_dialog: None,
            loading_default: false,
            default_rx: None,
        };
        if app.session.is_none() {
            app.cargar_test_por_defecto();
        }
        app
    }

    /// Guarda la sesión tras cada mutación. El fallo de cuota produce como
    /// mucho un aviso por proceso; nada de esto interrumpe el flujo.
    pub(crate) fn persist(&mut self) {
        if let Some(session) = &self.session {
            if let Some(aviso) = self.store.save(session) {
                self.message = aviso;
            }
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// App sin sesión y sin fetch en marcha, persistiendo en un fichero
    /// temporal propio de cada test.
    pub fn app_de_prueba(nombre: &str) -> QuizApp {
        let ruta = std::env::temp_dir().join(format!(
            "testownik-app-{}-{nombre}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&ruta);
        QuizApp {
            session: None,
            store: SessionStore::with_path(ruta),
            state: AppState::Quiz,
            message: String::new(),
            load_dialog: None,
            loading_default: false,
            default_rx: None,
        }
    }

    pub fn banco(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| Question {
                id: format!("q-{i}"),
                question: format!("pregunta {i}"),
                options: vec!["mal".to_owned(), "bien".to_owned()],
                answer: vec![1],
                img: None,
            })
            .collect()
    }

    /// Índice de una opción correcta de la pregunta actual. Necesario porque
    /// `aplicar_preguntas` baraja las opciones.
    pub fn indice_correcto(app: &QuizApp) -> usize {
        let q = app.session.as_ref().unwrap().current_question().unwrap();
        q.answer[0]
    }

    /// Índice de una opción incorrecta de la pregunta actual.
    pub fn indice_incorrecto(app: &QuizApp) -> usize {
        let q = app.session.as_ref().unwrap().current_question().unwrap();
        (0..q.options.len()).find(|i| !q.answer.contains(i)).unwrap()
    }
}
