use crate::shared::options::CodeTable;
use serde::{Deserialize, Serialize};

/// Porte da empresa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeBand {
    NotInformed,
    Micro,
    Small,
    Other,
}

impl CodeTable for SizeBand {
    const CATEGORY: &'static str = "Porte";

    fn all() -> &'static [Self] {
        &[
            SizeBand::NotInformed,
            SizeBand::Micro,
            SizeBand::Small,
            SizeBand::Other,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            SizeBand::NotInformed => "00",
            SizeBand::Micro => "01",
            SizeBand::Small => "03",
            SizeBand::Other => "05",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SizeBand::NotInformed => "Não informado",
            SizeBand::Micro => "Microempresa",
            SizeBand::Small => "Empresa de Pequeno Porte",
            SizeBand::Other => "Demais",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::assert_code_table;

    #[test]
    fn test_labels() {
        assert_eq!(SizeBand::label_for("01"), "Microempresa");
        assert_eq!(SizeBand::label_for("03"), "Empresa de Pequeno Porte");
        assert_eq!(SizeBand::label_for("02"), "Porte 02");
    }

    // Новый вариант ломает компиляцию этого match, пока не попадёт в all()
    fn ordinal(v: SizeBand) -> usize {
        match v {
            SizeBand::NotInformed => 0,
            SizeBand::Micro => 1,
            SizeBand::Small => 2,
            SizeBand::Other => 3,
        }
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_code_table::<SizeBand>(4);
        for (i, v) in SizeBand::all().iter().enumerate() {
            assert_eq!(ordinal(*v), i);
        }
    }
}
