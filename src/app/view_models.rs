use super::*;

/// Fila del visor de test completo: la pregunta con sus opciones y cuáles
/// son correctas, lista para pintar sin volver a mirar la sesión.
#[derive(Clone, Debug)]
pub struct QuestionRow {
    pub numero_1based: usize,
    pub enunciado: String,
    pub img: Option<String>,
    pub opciones: Vec<(String, bool)>, // (texto, es correcta)
}

impl QuizApp {
    /// Filas del visor, ordenadas por el ordinal del id ("q-7" antes que
    /// "q-12") en lugar del orden barajado de la sesión.
    pub fn filas_del_visor(&self) -> Vec<QuestionRow> {
        let Some(session) = &self.session else {
            return Vec::new();
        };

        let mut ordenadas: Vec<&Question> = session.questions.iter().collect();
        ordenadas.sort_by_key(|q| q.ordinal());

        ordenadas
            .into_iter()
            .enumerate()
            .map(|(i, q)| QuestionRow {
                numero_1based: i + 1,
                enunciado: q.question.clone(),
                img: q.img.clone(),
                opciones: q
                    .options
                    .iter()
                    .enumerate()
                    .map(|(idx, opt)| (opt.clone(), q.is_correct(idx)))
                    .collect(),
            })
            .collect()
    }
}
