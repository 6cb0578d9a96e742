use std::fmt;

/// Taxonomía de fallos del API Client. Cada variante lleva el mensaje
/// legible del servidor (campo "detail") o del transporte, que las
/// páginas muestran tal cual en un toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Credenciales inválidas o token ausente.
    Auth(String),
    /// Entrada malformada o rechazada por el servidor.
    Validation(String),
    /// Id inexistente (obsoleto).
    NotFound(String),
    /// Fallo de transporte antes de recibir respuesta.
    Network(String),
    /// 5xx u otro estado inesperado.
    Server(String),
}

impl ApiError {
    /// Clasifica una respuesta HTTP no-ok según su código de estado.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            401 | 403 => ApiError::Auth(detail),
            400 | 422 => ApiError::Validation(detail),
            404 => ApiError::NotFound(detail),
            _ => ApiError::Server(detail),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Auth(msg)
            | ApiError::Validation(msg)
            | ApiError::NotFound(msg)
            | ApiError::Network(msg)
            | ApiError::Server(msg) => msg,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_failures() {
        let err = ApiError::from_status(401, "Incorrect email or password".into());
        assert_eq!(err, ApiError::Auth("Incorrect email or password".into()));
        assert!(matches!(ApiError::from_status(403, String::new()), ApiError::Auth(_)));
    }

    #[test]
    fn classifies_validation_failures() {
        assert!(matches!(
            ApiError::from_status(400, "Email already registered".into()),
            ApiError::Validation(_)
        ));
        assert!(matches!(ApiError::from_status(422, String::new()), ApiError::Validation(_)));
    }

    #[test]
    fn classifies_not_found() {
        let err = ApiError::from_status(404, "Product with id x not found".into());
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn everything_else_is_a_server_error() {
        assert!(matches!(ApiError::from_status(500, String::new()), ApiError::Server(_)));
        assert!(matches!(ApiError::from_status(503, String::new()), ApiError::Server(_)));
        assert!(matches!(ApiError::from_status(418, String::new()), ApiError::Server(_)));
    }

    #[test]
    fn display_surfaces_the_server_detail_verbatim() {
        let err = ApiError::from_status(404, "Product with id 42 not found".into());
        assert_eq!(err.to_string(), "Product with id 42 not found");
    }
}
