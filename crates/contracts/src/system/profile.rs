use serde::{Deserialize, Serialize};

/// Тип профиля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    #[default]
    Consultor,
    Empresa,
}

impl ProfileKind {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileKind::Consultor => "consultor",
            ProfileKind::Empresa => "empresa",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileKind::Consultor => "Consultor",
            ProfileKind::Empresa => "Empresa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "consultor" => Some(ProfileKind::Consultor),
            "empresa" => Some(ProfileKind::Empresa),
            _ => None,
        }
    }

    pub fn all() -> [ProfileKind; 2] {
        [ProfileKind::Consultor, ProfileKind::Empresa]
    }
}

/// Профиль пользователя (одна запись на пользователя)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    /// E-mail из учётной записи, только для чтения
    pub email: String,
    pub full_name: Option<String>,
    pub kind: ProfileKind,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub email_notifications: bool,
    pub updated_at: Option<String>,
}

/// Данные формы профиля для upsert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub kind: ProfileKind,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub email_notifications: bool,
}

impl UpdateProfileDto {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.full_name {
            if name.chars().count() > 120 {
                return Err("Nome muito longo (máximo 120 caracteres).".to_string());
            }
        }
        if let Some(bio) = &self.bio {
            if bio.chars().count() > 1000 {
                return Err("Bio muito longa (máximo 1000 caracteres).".to_string());
            }
        }
        if let Some(url) = self.avatar_url.as_deref().filter(|u| !u.trim().is_empty()) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err("URL do avatar deve começar com http:// ou https://".to_string());
            }
        }
        Ok(())
    }

    /// Пустые строки формы превращаются в None
    pub fn normalized(self) -> Self {
        fn clean(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }
        Self {
            full_name: clean(self.full_name),
            kind: self.kind,
            bio: clean(self.bio),
            avatar_url: clean(self.avatar_url),
            email_notifications: self.email_notifications,
        }
    }
}

impl From<&Profile> for UpdateProfileDto {
    fn from(p: &Profile) -> Self {
        Self {
            full_name: p.full_name.clone(),
            kind: p.kind,
            bio: p.bio.clone(),
            avatar_url: p.avatar_url.clone(),
            email_notifications: p.email_notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> UpdateProfileDto {
        UpdateProfileDto {
            full_name: Some("  Ana  ".into()),
            kind: ProfileKind::Empresa,
            bio: Some("".into()),
            avatar_url: None,
            email_notifications: true,
        }
    }

    #[test]
    fn test_normalized_trims_and_drops_empty() {
        let d = dto().normalized();
        assert_eq!(d.full_name.as_deref(), Some("Ana"));
        assert_eq!(d.bio, None);
    }

    #[test]
    fn test_validate_avatar_url() {
        let mut d = dto();
        assert!(d.validate().is_ok());
        d.avatar_url = Some("ftp://x".into());
        assert!(d.validate().is_err());
        d.avatar_url = Some("https://cdn.licitax.com.br/a.png".into());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_kind_codes() {
        for kind in ProfileKind::all() {
            assert_eq!(ProfileKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(
            serde_json::to_string(&ProfileKind::Empresa).unwrap(),
            "\"empresa\""
        );
    }
}
