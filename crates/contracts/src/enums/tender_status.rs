use crate::shared::options::CodeTable;
use serde::{Deserialize, Serialize};

/// Статус лицитации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenderStatus {
    Open,
    InProgress,
    Suspended,
    Closed,
    Cancelled,
}

impl CodeTable for TenderStatus {
    const CATEGORY: &'static str = "Status";

    fn all() -> &'static [Self] {
        &[
            TenderStatus::Open,
            TenderStatus::InProgress,
            TenderStatus::Suspended,
            TenderStatus::Closed,
            TenderStatus::Cancelled,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            TenderStatus::Open => "aberta",
            TenderStatus::InProgress => "em_andamento",
            TenderStatus::Suspended => "suspensa",
            TenderStatus::Closed => "encerrada",
            TenderStatus::Cancelled => "cancelada",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TenderStatus::Open => "Aberta",
            TenderStatus::InProgress => "Em andamento",
            TenderStatus::Suspended => "Suspensa",
            TenderStatus::Closed => "Encerrada",
            TenderStatus::Cancelled => "Cancelada",
        }
    }
}

impl TenderStatus {
    pub fn badge_variant(&self) -> &'static str {
        match self {
            TenderStatus::Open => "success",
            TenderStatus::InProgress => "primary",
            TenderStatus::Suspended => "warning",
            TenderStatus::Closed | TenderStatus::Cancelled => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::options::assert_code_table;

    #[test]
    fn test_labels() {
        assert_eq!(TenderStatus::label_for("aberta"), "Aberta");
        assert_eq!(TenderStatus::label_for("homologada"), "Status homologada");
    }

    #[test]
    fn test_badge_variant() {
        assert_eq!(TenderStatus::Open.badge_variant(), "success");
        assert_eq!(TenderStatus::Closed.badge_variant(), "error");
    }

    // Новый вариант ломает компиляцию этого match, пока не попадёт в all()
    fn ordinal(v: TenderStatus) -> usize {
        match v {
            TenderStatus::Open => 0,
            TenderStatus::InProgress => 1,
            TenderStatus::Suspended => 2,
            TenderStatus::Closed => 3,
            TenderStatus::Cancelled => 4,
        }
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_code_table::<TenderStatus>(5);
        for (i, v) in TenderStatus::all().iter().enumerate() {
            assert_eq!(ordinal(*v), i);
        }
    }
}
