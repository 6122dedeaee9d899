//! Historial de puntuaciones: la única pieza que sobrevive al cierre de la
//! app. Se inyecta en [`crate::app::ExamApp`] para poder sustituirlo por un
//! almacén en memoria en los tests.

/// Contrato del almacén: cargar, añadir y borrar. Un almacén roto o ausente
/// nunca es un error para el llamante, se trata como historial vacío.
pub trait HistoryStore {
    fn load(&self) -> Vec<u32>;
    /// Añade una puntuación, persiste y devuelve la secuencia actualizada.
    fn append(&mut self, score: u32) -> Vec<u32>;
    fn clear(&mut self);
}

/// Almacén local: fichero JSON en nativo, `localStorage` en la web.
pub struct LocalStore {
    name: String,
}

impl LocalStore {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn path(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(format!("{}.json", self.name))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_raw(&self) -> Option<String> {
        std::fs::read_to_string(self.path()).ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write_raw(&self, data: &str) {
        // Escritura "fire and forget": un fallo no debe bloquear la entrega
        if let Err(e) = std::fs::write(self.path(), data) {
            log::warn!("no se pudo guardar el historial: {e}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn delete_raw(&self) {
        let _ = std::fs::remove_file(self.path());
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    #[cfg(target_arch = "wasm32")]
    fn read_raw(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(&self.name).ok().flatten())
    }

    #[cfg(target_arch = "wasm32")]
    fn write_raw(&self, data: &str) {
        if let Some(s) = Self::storage() {
            if s.set_item(&self.name, data).is_err() {
                log::warn!("no se pudo guardar el historial en localStorage");
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn delete_raw(&self) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(&self.name);
        }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new("score_history")
    }
}

impl HistoryStore for LocalStore {
    fn load(&self) -> Vec<u32> {
        match self.read_raw() {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("historial corrupto, se ignora: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    fn append(&mut self, score: u32) -> Vec<u32> {
        let mut history = self.load();
        history.push(score);
        match serde_json::to_string(&history) {
            Ok(json) => self.write_raw(&json),
            Err(e) => log::warn!("no se pudo serializar el historial: {e}"),
        }
        history
    }

    fn clear(&mut self) {
        self.delete_raw();
    }
}

/// Almacén en memoria para tests (y para plataformas sin almacenamiento).
#[derive(Default)]
pub struct MemoryStore {
    scores: Vec<u32>,
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Vec<u32> {
        self.scores.clone()
    }

    fn append(&mut self, score: u32) -> Vec<u32> {
        self.scores.push(score);
        self.scores.clone()
    }

    fn clear(&mut self) {
        self.scores.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_appends_in_order() {
        let mut store = MemoryStore::default();
        assert!(store.load().is_empty());
        assert_eq!(store.append(40), vec![40]);
        assert_eq!(store.append(47), vec![40, 47]);
        assert_eq!(store.load(), vec![40, 47]);
    }

    #[test]
    fn clearing_an_empty_store_is_a_noop() {
        let mut store = MemoryStore::default();
        store.clear();
        assert!(store.load().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_loads_as_empty_history() {
        let base = std::env::temp_dir().join("mock_exam_corrupt_history");
        let store = LocalStore::new(base.to_str().expect("ruta utf-8"));
        std::fs::write(store.path(), "esto no es JSON").expect("fichero de prueba");

        assert!(store.load().is_empty());

        std::fs::remove_file(store.path()).ok();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn local_store_round_trip_and_clear() {
        let base = std::env::temp_dir().join("mock_exam_history_rt");
        let mut store = LocalStore::new(base.to_str().expect("ruta utf-8"));
        store.clear();

        assert!(store.load().is_empty());
        assert_eq!(store.append(33), vec![33]);
        assert_eq!(store.load(), vec![33]);

        store.clear();
        assert!(store.load().is_empty());
        // Borrar sin nada guardado tampoco falla
        store.clear();
    }
}
