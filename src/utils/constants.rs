/// Clave de localStorage donde se persiste el token de sesión.
/// Su presencia determina el estado autenticado/anónimo.
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";

/// Vida por defecto de un toast, en milisegundos.
pub const DEFAULT_TOAST_LIFETIME_MS: u32 = 3000;
