use crate::enums::TenderStatus;
use crate::shared::options::CodeTable;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор лицитации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenderId(pub i64);

impl TenderId {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .ok()
            .filter(|v| *v > 0)
            .map(TenderId)
            .ok_or_else(|| format!("Invalid tender id: {}", s))
    }
}

// ============================================================================
// Records
// ============================================================================

/// Лицитация (Licitação)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tender {
    pub id: i64,
    pub number: String,
    /// Órgão
    pub agency: String,
    /// Objeto
    pub object: String,
    pub modality: String,
    pub status: String,
    pub estimated_value: Option<f64>,
    /// ISO-8601
    pub opening_at: String,
    pub closing_at: Option<String>,
    pub description: Option<String>,
}

impl Tender {
    pub fn status_kind(&self) -> Option<TenderStatus> {
        TenderStatus::from_code(&self.status)
    }

    pub fn status_label(&self) -> String {
        TenderStatus::label_for(&self.status)
    }

    /// Дата открытия без времени (YYYY-MM-DD)
    pub fn opening_date(&self) -> &str {
        self.opening_at.get(..10).unwrap_or(&self.opening_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderDocument {
    pub id: i64,
    pub tender_id: i64,
    pub name: String,
    pub kind: String,
    pub url: String,
    pub size_bytes: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderProposal {
    pub id: i64,
    pub tender_id: i64,
    pub value: f64,
    pub status: String,
    pub sent_at: String,
    pub company_cnpj: Option<String>,
}

/// Карточка лицитации со связанными документами и предложениями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderDetail {
    pub tender: Tender,
    pub documents: Vec<TenderDocument>,
    pub proposals: Vec<TenderProposal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tender_id_parse() {
        assert_eq!(TenderId::from_string("42"), Ok(TenderId(42)));
        assert!(TenderId::from_string("abc").is_err());
        assert!(TenderId::from_string("0").is_err());
        assert!(TenderId::from_string("-3").is_err());
    }

    #[test]
    fn test_opening_date() {
        let tender = Tender {
            id: 1,
            number: "PE 12/2024".into(),
            agency: "Prefeitura".into(),
            object: "Merenda".into(),
            modality: "Pregão Eletrônico".into(),
            status: "aberta".into(),
            estimated_value: None,
            opening_at: "2024-05-10T09:00:00".into(),
            closing_at: None,
            description: None,
        };
        assert_eq!(tender.opening_date(), "2024-05-10");
        assert_eq!(tender.status_label(), "Aberta");
        assert_eq!(tender.status_kind(), Some(TenderStatus::Open));
    }
}
