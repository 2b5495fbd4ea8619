use crate::enums::{RegistrationStatus, SizeBand};
use crate::shared::cnpj::format_cnpj;
use crate::shared::compact_date::format_compact;
use crate::shared::options::CodeTable;
use serde::{Deserialize, Serialize};

/// Строка результата поиска: estabelecimento + компания + CNAE + муниципалитет.
///
/// Поля из JOIN равны None, если связанная запись не найдена.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstablishmentRow {
    pub id: i64,
    pub cnpj: String,
    pub trade_name: Option<String>,
    pub legal_name: Option<String>,
    pub status: Option<String>,
    pub activity_start: Option<i64>,
    pub sector_code: Option<String>,
    pub sector_name: Option<String>,
    pub region_name: Option<String>,
    pub state: Option<String>,
    pub size_band: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EstablishmentRow {
    /// Nome fantasia → razão social → CNPJ
    pub fn display_name(&self) -> String {
        [self.trade_name.as_deref(), self.legal_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.formatted_cnpj())
    }

    pub fn formatted_cnpj(&self) -> String {
        format_cnpj(&self.cnpj)
    }

    pub fn status_label(&self) -> Option<String> {
        self.status.as_deref().map(RegistrationStatus::label_for)
    }

    pub fn status_kind(&self) -> Option<RegistrationStatus> {
        self.status.as_deref().and_then(RegistrationStatus::from_code)
    }

    pub fn size_band_label(&self) -> Option<String> {
        self.size_band.as_deref().map(SizeBand::label_for)
    }

    pub fn activity_start_label(&self) -> Option<String> {
        self.activity_start.and_then(format_compact)
    }

    /// "Belo Horizonte / MG", только UF или None
    pub fn location_label(&self) -> Option<String> {
        match (self.region_name.as_deref(), self.state.as_deref()) {
            (Some(city), Some(uf)) => Some(format!("{} / {}", city, uf)),
            (Some(city), None) => Some(city.to_string()),
            (None, Some(uf)) => Some(uf.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> EstablishmentRow {
        EstablishmentRow {
            id: 1,
            cnpj: "12345678000195".into(),
            trade_name: None,
            legal_name: None,
            status: Some("02".into()),
            activity_start: Some(20100415),
            sector_code: None,
            sector_name: None,
            region_name: None,
            state: Some("SP".into()),
            size_band: Some("07".into()),
            email: None,
            phone: None,
        }
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let mut r = row();
        assert_eq!(r.display_name(), "12.345.678/0001-95");
        r.legal_name = Some("ACME LTDA".into());
        assert_eq!(r.display_name(), "ACME LTDA");
        r.trade_name = Some("Acme".into());
        assert_eq!(r.display_name(), "Acme");
    }

    #[test]
    fn test_labels() {
        let r = row();
        assert_eq!(r.status_label().as_deref(), Some("Ativa"));
        assert_eq!(r.size_band_label().as_deref(), Some("Porte 07"));
        assert_eq!(r.activity_start_label().as_deref(), Some("15/04/2010"));
        assert_eq!(r.location_label().as_deref(), Some("SP"));
    }
}
