use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de login del backend. El token es opaco: el cliente no lo
/// valida ni lo refresca, solo lo adjunta como Bearer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserResponse {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
}
