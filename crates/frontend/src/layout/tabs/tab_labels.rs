use super::keys;

/// Заголовок таба по ключу
pub fn tab_label_for_key(key: &str) -> String {
    let label = match key {
        keys::OVERVIEW => "Visão geral",
        keys::TENDERS => "Licitações",
        keys::ESTABLISHMENTS => "Empresas",
        keys::PROFILE => "Meu perfil",
        keys::SETTINGS => "Configurações",
        other => {
            return match keys::parse_tender_detail(other) {
                Some(id) => format!("Licitação #{}", id.value()),
                None => "Não encontrada".to_string(),
            }
        }
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(tab_label_for_key("a001_tenders"), "Licitações");
        assert_eq!(tab_label_for_key("a003_establishments"), "Empresas");
        assert_eq!(tab_label_for_key("a001_tender_detail_7"), "Licitação #7");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(tab_label_for_key("p900_sales_register"), "Não encontrada");
    }
}
