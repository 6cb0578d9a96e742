// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend.
// Las llamadas autenticadas adjuntan el token Bearer leído de storage;
// si no hay token se corta en corto con ApiError::Auth, sin red.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::models::{
    LoginRequest, LoginResponse, Product, ProductCreate, ProductUpdate, RegisterRequest,
    UserResponse,
};
use crate::services::ApiError;
use crate::utils::storage::load_raw;
use crate::utils::STORAGE_KEY_ACCESS_TOKEN;

/// Cuerpo de error estándar del backend: { "detail": "..." }
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: format!("{}/api/v1", CONFIG.backend_url()),
        }
    }

    fn bearer_token(&self) -> Result<String, ApiError> {
        load_raw(STORAGE_KEY_ACCESS_TOKEN)
            .ok_or_else(|| ApiError::Auth("Not logged in".to_string()))
    }

    /// Extrae el "detail" del payload de error y clasifica por estado HTTP.
    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::from_status(status, detail)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Iniciando sesión: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<UserResponse, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name,
        };

        log::info!("📝 Registrando usuario: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<UserResponse>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    /// Listar productos. Sin estado de paginación en el cliente: cada
    /// llamada es independiente.
    pub async fn list_products(&self, skip: u32, limit: u32) -> Result<Vec<Product>, ApiError> {
        let token = self.bearer_token()?;
        let url = format!(
            "{}/products/?skip={}&limit={}",
            self.base_url, skip, limit
        );

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    pub async fn create_product(&self, payload: &ProductCreate) -> Result<Product, ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/products/", self.base_url);

        log::info!("📦 Creando producto: {}", payload.name);

        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    pub async fn update_product(
        &self,
        id: &str,
        fields: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/products/{}", self.base_url, id);

        log::info!("✏️ Actualizando producto: {}", id);

        let response = Request::put(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(fields)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Server(format!("Parse error: {}", e)))
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let token = self.bearer_token()?;
        let url = format!("{}/products/{}", self.base_url, id);

        log::info!("🗑️ Eliminando producto: {}", id);

        let response = Request::delete(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }

        // 204 No Content: no hay cuerpo que parsear
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
