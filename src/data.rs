use crate::model::Question;
use thiserror::Error;

/// Recurso fijo con el banco de preguntas por defecto.
pub const DEFAULT_QUESTIONS_URL: &str =
    "https://testownik-app.github.io/questions/unique.json";

/// Fallos al cargar un banco de preguntas, del fetch por defecto o de un
/// fichero del usuario. Ninguno es fatal: se muestran al usuario y la sesión
/// actual queda intacta.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no se pudo descargar el test por defecto: {0}")]
    Fetch(String),
    #[error("el contenido no es un JSON válido de preguntas")]
    Parse(#[from] serde_json::Error),
    #[error("el fichero no contiene ninguna pregunta")]
    Empty,
}

/// Parsea un banco de preguntas: debe ser un array JSON no vacío.
/// No se validan los índices de respuesta contra las opciones; un índice
/// fuera de rango deja la pregunta sin acierto posible, como en el original.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(questions)
}

/// Descarga y parsea el banco por defecto. Bloqueante: se llama desde un
/// hilo aparte (ver `app::loading`).
pub fn fetch_default_questions() -> Result<Vec<Question>, LoadError> {
    let resp = reqwest::blocking::get(DEFAULT_QUESTIONS_URL)
        .map_err(|e| LoadError::Fetch(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(LoadError::Fetch(format!("HTTP {}", resp.status())));
    }
    let body = resp.text().map_err(|e| LoadError::Fetch(e.to_string()))?;
    parse_questions(&body)
}
