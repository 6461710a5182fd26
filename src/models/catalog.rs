use std::collections::HashMap;

pub const UNSPECIFIED_SERVICE: &str = "Не указана";

const SERVICES: &[(&str, &str)] = &[
    ("wedding", "Свадебный макияж"),
    ("event", "Макияж для мероприятий"),
    ("photo", "Макияж для фотосессии"),
    ("lesson", "Уроки макияжа"),
    ("theater", "Грим для театра и кино"),
    ("evening", "Вечерний макияж"),
    ("business", "Деловой макияж"),
    ("graduation", "Выпускной макияж"),
];

/// Read-only mapping from the short service keys used in the form's select
/// to the labels sent to the backend.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    labels: HashMap<&'static str, &'static str>,
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self {
            labels: SERVICES.iter().copied().collect(),
        }
    }

    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.labels.get(key).copied()
    }

    /// Known key → label, unknown key → unchanged, empty or missing →
    /// [`UNSPECIFIED_SERVICE`].
    pub fn resolve(&self, key: Option<&str>) -> String {
        match key.filter(|k| !k.trim().is_empty()) {
            None => UNSPECIFIED_SERVICE.to_string(),
            Some(k) => self.label(k).unwrap_or(k).to_string(),
        }
    }
}
