use crate::shared::options::CodeTable;
use serde::{Deserialize, Serialize};

/// Situação cadastral estabelecimento (коды Receita Federal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    Null,
    Active,
    Suspended,
    Unfit,
    Closed,
}

impl CodeTable for RegistrationStatus {
    const CATEGORY: &'static str = "Situação";

    fn all() -> &'static [Self] {
        &[
            RegistrationStatus::Null,
            RegistrationStatus::Active,
            RegistrationStatus::Suspended,
            RegistrationStatus::Unfit,
            RegistrationStatus::Closed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            RegistrationStatus::Null => "01",
            RegistrationStatus::Active => "02",
            RegistrationStatus::Suspended => "03",
            RegistrationStatus::Unfit => "04",
            RegistrationStatus::Closed => "08",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Null => "Nula",
            RegistrationStatus::Active => "Ativa",
            RegistrationStatus::Suspended => "Suspensa",
            RegistrationStatus::Unfit => "Inapta",
            RegistrationStatus::Closed => "Baixada",
        }
    }
}

impl RegistrationStatus {
    /// Вариант бейджа в карточке
    pub fn badge_variant(&self) -> &'static str {
        match self {
            RegistrationStatus::Active => "success",
            RegistrationStatus::Suspended | RegistrationStatus::Unfit => "warning",
            RegistrationStatus::Null | RegistrationStatus::Closed => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::assert_code_table;

    #[test]
    fn test_known_codes() {
        assert_eq!(RegistrationStatus::label_for("02"), "Ativa");
        assert_eq!(RegistrationStatus::label_for("08"), "Baixada");
        assert_eq!(RegistrationStatus::from_code("04"), Some(RegistrationStatus::Unfit));
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(RegistrationStatus::label_for("99"), "Situação 99");
    }

    #[test]
    fn test_options_sorted_by_label() {
        let labels: Vec<_> = RegistrationStatus::options()
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["Ativa", "Baixada", "Inapta", "Nula", "Suspensa"]);
    }

    // Новый вариант ломает компиляцию этого match, пока не попадёт в all()
    fn ordinal(v: RegistrationStatus) -> usize {
        match v {
            RegistrationStatus::Null => 0,
            RegistrationStatus::Active => 1,
            RegistrationStatus::Suspended => 2,
            RegistrationStatus::Unfit => 3,
            RegistrationStatus::Closed => 4,
        }
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_code_table::<RegistrationStatus>(5);
        for (i, v) in RegistrationStatus::all().iter().enumerate() {
            assert_eq!(ordinal(*v), i);
        }
    }
}
