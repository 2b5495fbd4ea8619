//! Понижение регистра, одинаковое для терма поиска (Rust) и колонки (SQL).
//!
//! SQLite `LOWER()` понижает только ASCII. Буквы с диакритикой из таблицы
//! ниже понижаются через вложенные `REPLACE`, терм проходит ту же таблицу,
//! поэтому обе стороны сравнения совпадают.

/// Заглавные буквы с диакритикой (португальский и соседние латинские)
pub const ACCENTED_UPPER: &[(char, char)] = &[
    ('Á', 'á'),
    ('À', 'à'),
    ('Â', 'â'),
    ('Ã', 'ã'),
    ('Ä', 'ä'),
    ('É', 'é'),
    ('È', 'è'),
    ('Ê', 'ê'),
    ('Ë', 'ë'),
    ('Í', 'í'),
    ('Ì', 'ì'),
    ('Î', 'î'),
    ('Ï', 'ï'),
    ('Ó', 'ó'),
    ('Ò', 'ò'),
    ('Ô', 'ô'),
    ('Õ', 'õ'),
    ('Ö', 'ö'),
    ('Ú', 'ú'),
    ('Ù', 'ù'),
    ('Û', 'û'),
    ('Ü', 'ü'),
    ('Ç', 'ç'),
    ('Ñ', 'ñ'),
];

fn fold_char(ch: char) -> char {
    if ch.is_ascii_uppercase() {
        return ch.to_ascii_lowercase();
    }
    ACCENTED_UPPER
        .iter()
        .find(|(upper, _)| *upper == ch)
        .map(|(_, lower)| *lower)
        .unwrap_or(ch)
}

/// Терм поиска в той же форме, что и `fold_case_sql(column)`
pub fn fold_case(term: &str) -> String {
    term.chars().map(fold_char).collect()
}

/// SQL-выражение колонки: `LOWER(REPLACE(...REPLACE(col, 'Á', 'á')...))`
pub fn fold_case_sql(column: &str) -> String {
    let replaced = ACCENTED_UPPER
        .iter()
        .fold(column.to_string(), |expr, (upper, lower)| {
            format!("REPLACE({}, '{}', '{}')", expr, upper, lower)
        });
    format!("LOWER({})", replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_handles_portuguese_capitals() {
        assert_eq!(fold_case("CONSTRUÇÃO São JOSÉ"), "construção são josé");
        assert_eq!(fold_case("PÃES"), "pães");
        assert_eq!(fold_case("12.345/0001"), "12.345/0001");
    }

    #[test]
    fn test_fold_case_leaves_unlisted_letters() {
        // буквы вне таблицы не трогаем ни в Rust, ни в SQL
        assert_eq!(fold_case("ŁÓDŹ"), "ŁódŹ");
    }

    #[test]
    fn test_fold_case_sql_wraps_every_letter() {
        let sql = fold_case_sql("e.trade_name");
        assert!(sql.starts_with("LOWER(REPLACE("));
        assert!(sql.contains("e.trade_name, 'Á', 'á')"));
        assert!(sql.ends_with(", 'Ñ', 'ñ'))"));
        assert_eq!(sql.matches("REPLACE(").count(), ACCENTED_UPPER.len());
    }

    #[test]
    fn test_table_pairs_agree_with_unicode_lowercase() {
        for (upper, lower) in ACCENTED_UPPER {
            assert_eq!(upper.to_lowercase().collect::<String>(), lower.to_string());
        }
    }
}
