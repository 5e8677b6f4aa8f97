use serde::{Deserialize, Serialize};

/// Pregunta de tipo test, tal como viene en el fichero JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub question: String, // Enunciado
    pub options: Vec<String>,
    pub answer: Vec<usize>, // Índices (0-based) de las opciones correctas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl Question {
    /// Ordinal numérico embebido en el id ("q-12" -> 12); 0 si no se puede extraer.
    pub fn ordinal(&self) -> usize {
        self.id
            .split('-')
            .nth(1)
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }

    /// ¿Es `idx` una de las opciones correctas?
    pub fn is_correct(&self, idx: usize) -> bool {
        self.answer.contains(&idx)
    }
}

/// Modo de presentación activo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Quiz,       // una pregunta cada vez
    TestViewer, // listado completo con las respuestas marcadas
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Quiz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: &str) -> Question {
        Question {
            id: id.to_owned(),
            question: "¿2+2?".to_owned(),
            options: vec!["3".to_owned(), "4".to_owned()],
            answer: vec![1],
            img: None,
        }
    }

    #[test]
    fn ordinal_extrae_el_numero_del_id() {
        assert_eq!(q("q-12").ordinal(), 12);
        assert_eq!(q("q-1").ordinal(), 1);
    }

    #[test]
    fn ordinal_cae_a_cero_con_ids_raros() {
        assert_eq!(q("pregunta").ordinal(), 0);
        assert_eq!(q("q-abc").ordinal(), 0);
        assert_eq!(q("").ordinal(), 0);
    }

    #[test]
    fn img_ausente_no_se_serializa() {
        let json = serde_json::to_string(&q("q-1")).unwrap();
        assert!(!json.contains("img"));
    }
}
