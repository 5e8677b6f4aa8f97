use super::*;

/// Fase del test secuencial, derivada de la sesión en vez de reconstruida
/// con booleanos sueltos en cada vista.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Empty,
    InProgress,
    Finished,
}

impl QuizApp {
    pub fn phase(&self) -> QuizPhase {
        match &self.session {
            None => QuizPhase::Empty,
            Some(s) if s.is_finished() => QuizPhase::Finished,
            Some(_) => QuizPhase::InProgress,
        }
    }

    /// Resultado final con el formato "aciertos / total".
    pub fn score_text(&self) -> String {
        match &self.session {
            Some(s) => {
                let (aciertos, total) = s.score();
                format!("{aciertos} / {total}")
            }
            None => "0 / 0".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app_de_prueba, banco, indice_correcto, indice_incorrecto};
    use super::*;

    #[test]
    fn la_fase_se_deriva_de_la_sesion() {
        let mut app = app_de_prueba("fase");
        assert_eq!(app.phase(), QuizPhase::Empty);

        app.aplicar_preguntas(banco(1));
        assert_eq!(app.phase(), QuizPhase::InProgress);

        let correcta = indice_correcto(&app);
        app.seleccionar_opcion(correcta);
        app.enviar_respuesta();
        assert_eq!(app.phase(), QuizPhase::Finished);
    }

    #[test]
    fn score_text_formatea_aciertos_sobre_total() {
        let mut app = app_de_prueba("score");
        assert_eq!(app.score_text(), "0 / 0");

        app.aplicar_preguntas(banco(1));
        let correcta = indice_correcto(&app);
        app.seleccionar_opcion(correcta);
        app.enviar_respuesta();
        assert_eq!(app.score_text(), "1 / 1");
    }

    #[test]
    fn score_text_tras_fallar_la_unica_pregunta() {
        let mut app = app_de_prueba("score-fallo");
        app.aplicar_preguntas(banco(1));
        let incorrecta = indice_incorrecto(&app);
        app.seleccionar_opcion(incorrecta);
        app.enviar_respuesta();
        app.siguiente_pregunta();
        assert_eq!(app.phase(), QuizPhase::Finished);
        assert_eq!(app.score_text(), "0 / 1");
    }
}
