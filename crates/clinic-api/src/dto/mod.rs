//! Request and response data transfer objects.

pub mod request;
pub mod response;

use clinic_core::error::AppError;
use clinic_core::result::AppResult;
use validator::Validate;

/// Run `validator` checks and fold failures into one validation error.
pub fn validate_request<T: Validate>(req: &T) -> AppResult<()> {
    req.validate().map_err(|errors| {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let detail = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {detail}")
            })
            .collect();
        parts.sort();
        AppError::validation(format!("Validation failed: {}", parts.join("; ")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::error::ErrorKind;

    use super::request::{AddRoleRequest, LoginRequest};

    #[test]
    fn test_validation_failure_is_a_400_kind() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let err = validate_request(&req).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.starts_with("Validation failed"));
    }

    #[test]
    fn test_addrole_body_carries_only_the_new_role() {
        let req: AddRoleRequest =
            serde_json::from_value(serde_json::json!({ "newRole": "ADMIN" }))
                .expect("documented body shape must deserialize");
        assert_eq!(req.new_role.as_deref(), Some("ADMIN"));

        let empty: AddRoleRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.new_role.is_none());
    }

    #[test]
    fn test_valid_request_passes() {
        let req = LoginRequest {
            email: "alice@example.com".to_string(),
            password: "s3cret-password".to_string(),
        };
        assert!(validate_request(&req).is_ok());
    }
}
