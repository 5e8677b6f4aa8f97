use crate::model::Question;
use serde::{Deserialize, Serialize};

/// Estado completo de un intento de test. Se serializa tal cual al
/// almacenamiento (claves camelCase) para poder retomar la sesión.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub questions: Vec<Question>,
    /// Posición actual; puede valer `questions.len()` para señalar el fin.
    pub current: usize,
    pub selected: Option<usize>,
    pub show_answer: bool,
    /// Posiciones respondidas correctamente, en orden.
    pub correct_answers: Vec<usize>,
}

impl Session {
    /// Sesión recién empezada sobre un banco de preguntas ya barajado.
    /// Barajar es responsabilidad de quien llama (ver `app::loading`).
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            show_answer: false,
            correct_answers: Vec::new(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// (aciertos, total)
    pub fn score(&self) -> (usize, usize) {
        (self.correct_answers.len(), self.questions.len())
    }

    /// Marca una opción antes de enviar. Se puede cambiar de opción tantas
    /// veces como se quiera; con la respuesta ya revelada no hace nada.
    /// Devuelve `true` si el estado cambió.
    pub fn select_option(&mut self, idx: usize) -> bool {
        if self.show_answer {
            return false;
        }
        let Some(q) = self.current_question() else {
            return false;
        };
        if idx >= q.options.len() {
            return false;
        }
        self.selected = Some(idx);
        true
    }

    /// Evalúa la opción marcada. Si es correcta, apunta la posición y avanza
    /// directamente (no hay pausa de "correcto"); si no, revela la respuesta
    /// y bloquea la pregunta hasta `advance`. Sin selección o con la
    /// respuesta ya revelada no hace nada.
    pub fn submit(&mut self) -> bool {
        if self.show_answer {
            return false;
        }
        let Some(sel) = self.selected else {
            return false;
        };
        let Some(q) = self.current_question() else {
            return false;
        };
        if q.is_correct(sel) {
            self.correct_answers.push(self.current);
            self.selected = None;
            self.show_answer = false;
            self.current += 1;
        } else {
            self.show_answer = true;
        }
        true
    }

    /// Pasa a la siguiente pregunta tras una respuesta revelada (fallada),
    /// sin apuntar la posición como acierto.
    pub fn advance(&mut self) -> bool {
        if !self.show_answer {
            return false;
        }
        self.show_answer = false;
        self.selected = None;
        self.current += 1;
        true
    }
}
