use super::*;
use crate::shuffle::shuffle_questions;

impl QuizApp {
    /// Marca una opción de la pregunta actual.
    pub fn seleccionar_opcion(&mut self, idx: usize) {
        if let Some(session) = &mut self.session {
            if session.select_option(idx) {
                self.persist();
            }
        }
    }

    /// Envía la opción marcada: un acierto avanza directamente, un fallo
    /// revela la respuesta correcta hasta que el usuario pida la siguiente.
    pub fn enviar_respuesta(&mut self) {
        if let Some(session) = &mut self.session {
            if session.submit() {
                self.persist();
            }
        }
    }

    /// Pasa a la siguiente pregunta tras un fallo revelado.
    pub fn siguiente_pregunta(&mut self) {
        if let Some(session) = &mut self.session {
            if session.advance() {
                self.persist();
            }
        }
    }

    /// Vuelve a barajar el banco actual (preguntas y opciones) y empieza el
    /// intento de cero.
    pub fn reiniciar_test(&mut self) {
        if let Some(session) = &self.session {
            let questions = session.questions.clone();
            self.session = Some(Session::new(shuffle_questions(questions)));
            self.message.clear();
            self.persist();
        }
    }

    /// Alterna entre el test secuencial y el visor del test completo.
    pub fn alternar_vista(&mut self) {
        self.state = match self.state {
            AppState::Quiz => AppState::TestViewer,
            AppState::TestViewer => AppState::Quiz,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app_de_prueba, banco, indice_correcto};
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn cada_mutacion_deja_la_sesion_en_disco() {
        let mut app = app_de_prueba("persiste");
        app.aplicar_preguntas(banco(3));

        let correcta = indice_correcto(&app);
        app.seleccionar_opcion(correcta);
        app.enviar_respuesta();

        let guardada = app.store.load().unwrap();
        assert_eq!(guardada, app.session.clone().unwrap());
        assert_eq!(guardada.current, 1);
    }

    #[test]
    fn reiniciar_conserva_los_ids_y_resetea_el_progreso() {
        let mut app = app_de_prueba("reinicia");
        app.aplicar_preguntas(banco(5));
        app.seleccionar_opcion(1);
        app.enviar_respuesta();

        let ids_antes: BTreeSet<String> = app
            .session
            .as_ref()
            .unwrap()
            .questions
            .iter()
            .map(|q| q.id.clone())
            .collect();

        app.reiniciar_test();

        let session = app.session.as_ref().unwrap();
        let ids_despues: BTreeSet<String> =
            session.questions.iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids_antes, ids_despues);
        assert_eq!(session.current, 0);
        assert_eq!(session.selected, None);
        assert!(!session.show_answer);
        assert!(session.correct_answers.is_empty());
    }

    #[test]
    fn reiniciar_sin_sesion_no_hace_nada() {
        let mut app = app_de_prueba("sin-sesion");
        app.reiniciar_test();
        assert!(app.session.is_none());
        assert_eq!(app.store.load(), None);
    }

    #[test]
    fn alternar_vista_va_y_vuelve() {
        let mut app = app_de_prueba("vista");
        assert_eq!(app.state, AppState::Quiz);
        app.alternar_vista();
        assert_eq!(app.state, AppState::TestViewer);
        app.alternar_vista();
        assert_eq!(app.state, AppState::Quiz);
    }
}
