// Validación de formularios del lado cliente.
// Solo chequeos básicos (campos requeridos, formato numérico); la
// validación de negocio la hace el servidor.

use crate::models::{Category, ProductCreate};

/// Longitud mínima de contraseña aceptada por el backend en el registro.
const MIN_PASSWORD_LENGTH: usize = 8;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    Ok(())
}

pub fn validate_registration(email: &str, password: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

/// Valida el borrador del formulario de producto y lo convierte en el
/// payload de creación. Los mismos chequeos sirven para el modo edición.
pub fn validate_product_form(
    name: &str,
    price: &str,
    category: &str,
) -> Result<ProductCreate, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Product name is required".to_string());
    }

    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price cannot be negative".to_string());
    }

    let category = Category::parse(category).ok_or_else(|| "Please select a category".to_string())?;

    Ok(ProductCreate {
        name: name.to_string(),
        price,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_product_form() {
        let payload = validate_product_form("Widget", "9.99", "Electronics").unwrap();
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.price, 9.99);
        assert_eq!(payload.category, Category::Electronics);
    }

    #[test]
    fn rejects_negative_price() {
        let err = validate_product_form("Widget", "-1.50", "Electronics").unwrap_err();
        assert_eq!(err, "Price cannot be negative");
    }

    #[test]
    fn rejects_non_numeric_price() {
        let err = validate_product_form("Widget", "abc", "Books").unwrap_err();
        assert_eq!(err, "Price must be a number");
    }

    #[test]
    fn rejects_empty_name() {
        let err = validate_product_form("   ", "1.00", "Other").unwrap_err();
        assert_eq!(err, "Product name is required");
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(validate_product_form("Widget", "1.00", "Gadgets").is_err());
        assert!(validate_product_form("Widget", "1.00", "").is_err());
    }

    #[test]
    fn zero_price_is_allowed() {
        // El precio es "no negativo", no "positivo": los artículos gratuitos pasan.
        assert!(validate_product_form("Freebie", "0", "Other").is_ok());
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("a@b.com", "").is_err());
        assert!(validate_credentials("a@b.com", "secret").is_ok());
    }

    #[test]
    fn registration_enforces_password_length() {
        assert!(validate_registration("a@b.com", "short").is_err());
        assert!(validate_registration("a@b.com", "longenough").is_ok());
        assert!(validate_registration("not-an-email", "longenough").is_err());
    }
}
