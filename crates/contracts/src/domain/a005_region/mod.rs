use serde::{Deserialize, Serialize};

/// Муниципалитет
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    /// UF
    pub state: String,
}

impl Region {
    /// "Belo Horizonte / MG"
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.name, self.state)
    }
}
