use crate::session::Session;
use std::fs;
use std::path::PathBuf;

/// Clave fija bajo la que se persiste la sesión en curso.
pub const STORAGE_KEY: &str = "testownik-state-v1";

/// Techo de tamaño del almacén, como la cuota de localStorage del navegador.
const MAX_SESSION_BYTES: usize = 5 * 1024 * 1024;

/// Adaptador de persistencia sobre un fichero JSON con límite de capacidad.
/// Guardar es "best-effort": un fallo nunca llega al que llama. Si se supera
/// la cuota se avisa al usuario una sola vez por proceso; los fallos
/// siguientes se silencian, aunque el intento de guardado se repite igual.
pub struct SessionStore {
    path: PathBuf,
    max_bytes: usize,
    quota_warned: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(format!("{STORAGE_KEY}.json")))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            max_bytes: MAX_SESSION_BYTES,
            quota_warned: false,
        }
    }

    /// Serializa y guarda la sesión. Devuelve un aviso para el usuario como
    /// mucho una vez (cuota superada); cualquier otro fallo se registra en el
    /// log y se ignora.
    pub fn save(&mut self, session: &Session) -> Option<String> {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("no se pudo serializar la sesión: {e}");
                return None;
            }
        };

        if json.len() > self.max_bytes {
            if !self.quota_warned {
                self.quota_warned = true;
                return Some(
                    "⚠ No se pudo guardar la sesión: se superó el límite de almacenamiento."
                        .to_owned(),
                );
            }
            return None;
        }

        if let Err(e) = fs::write(&self.path, json) {
            log::warn!("no se pudo guardar la sesión en {:?}: {e}", self.path);
        }
        None
    }

    /// Recupera la sesión guardada. Un fichero inexistente, ilegible o que no
    /// cuadre con el esquema se trata igual: no hay sesión.
    pub fn load(&self) -> Option<Session> {
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn ruta_temporal(nombre: &str) -> PathBuf {
        std::env::temp_dir().join(format!("testownik-{}-{nombre}.json", std::process::id()))
    }

    fn sesion() -> Session {
        Session::new(vec![Question {
            id: "q-1".to_owned(),
            question: "2+2?".to_owned(),
            options: vec!["3".to_owned(), "4".to_owned()],
            answer: vec![1],
            img: None,
        }])
    }

    #[test]
    fn guardar_y_recuperar_devuelve_la_misma_sesion() {
        let ruta = ruta_temporal("roundtrip");
        let mut store = SessionStore::with_path(ruta.clone());
        let mut s = sesion();
        s.select_option(0);
        s.submit();

        assert_eq!(store.save(&s), None);
        assert_eq!(store.load(), Some(s));
        let _ = fs::remove_file(ruta);
    }

    #[test]
    fn sin_fichero_no_hay_sesion() {
        let store = SessionStore::with_path(ruta_temporal("inexistente"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn contenido_corrupto_se_trata_como_ausente() {
        let ruta = ruta_temporal("corrupto");
        fs::write(&ruta, "{esto no es una sesión").unwrap();
        let store = SessionStore::with_path(ruta.clone());
        assert_eq!(store.load(), None);
        let _ = fs::remove_file(ruta);
    }

    #[test]
    fn esquema_distinto_se_trata_como_ausente() {
        let ruta = ruta_temporal("esquema");
        fs::write(&ruta, r#"{"questions": "no soy un array"}"#).unwrap();
        let store = SessionStore::with_path(ruta.clone());
        assert_eq!(store.load(), None);
        let _ = fs::remove_file(ruta);
    }

    #[test]
    fn la_cuota_avisa_una_sola_vez_y_sigue_intentando() {
        let ruta = ruta_temporal("cuota");
        let mut store = SessionStore {
            path: ruta.clone(),
            max_bytes: 8, // cualquier sesión real supera esto
            quota_warned: false,
        };
        let s = sesion();

        assert!(store.save(&s).is_some());
        // los intentos siguientes se suprimen de cara al usuario
        assert_eq!(store.save(&s), None);
        assert_eq!(store.save(&s), None);
        // y nunca se llegó a escribir nada
        assert!(!ruta.exists());
    }

    #[test]
    fn un_guardado_normal_no_avisa() {
        let ruta = ruta_temporal("normal");
        let mut store = SessionStore::with_path(ruta.clone());
        assert_eq!(store.save(&sesion()), None);
        let _ = fs::remove_file(ruta);
    }
}
