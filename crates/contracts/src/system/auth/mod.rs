use serde::{Deserialize, Serialize};

/// Минимальная длина пароля
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

impl UserInfo {
    /// Имя для шапки: full_name или e-mail
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub email: String,
    pub is_admin: bool,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

/// Проверка нового пароля и подтверждения (форма регистрации и настройки)
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password != confirmation {
        return Err("As senhas não coincidem.".to_string());
    }
    validate_password_length(password)
}

pub fn validate_password_length(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "A senha deve ter pelo menos {} caracteres.",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

/// Минимальная проверка формата e-mail
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("E-mail inválido.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_new_password() {
        assert!(validate_new_password("segredo", "segredo").is_ok());
        assert_eq!(
            validate_new_password("segredo", "segredo1"),
            Err("As senhas não coincidem.".to_string())
        );
        assert!(validate_new_password("12345", "12345").is_err());
        assert!(validate_new_password("123456", "123456").is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@licitax.com.br").is_ok());
        assert!(validate_email("ana").is_err());
        assert!(validate_email("@licitax.com").is_err());
        assert!(validate_email("ana@localhost").is_err());
    }

    #[test]
    fn test_display_name() {
        let mut user = UserInfo {
            id: "1".into(),
            email: "ana@licitax.com.br".into(),
            full_name: Some(" ".into()),
            is_admin: false,
        };
        assert_eq!(user.display_name(), "ana@licitax.com.br");
        user.full_name = Some("Ana Souza".into());
        assert_eq!(user.display_name(), "Ana Souza");
    }
}
