//! Vendor input validation.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length for a vendor name in characters.
pub const MAX_VENDOR_NAME_LENGTH: usize = 200;

/// Maximum length for a vendor email address (RFC 5321 path limit).
pub const MAX_VENDOR_EMAIL_LENGTH: usize = 320;

/// Validate a vendor name: non-blank and within length limit.
pub fn validate_vendor_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Vendor name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_VENDOR_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Vendor name exceeds maximum length of {MAX_VENDOR_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a vendor email: non-blank, `local@domain` shape, within length limit.
///
/// Deliverability is not checked; sending is simulated.
pub fn validate_vendor_email(email: &str) -> Result<(), CoreError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CoreError::Validation(
            "Vendor email must not be empty".to_string(),
        ));
    }
    if email.chars().count() > MAX_VENDOR_EMAIL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Vendor email exceeds maximum length of {MAX_VENDOR_EMAIL_LENGTH} characters"
        )));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(CoreError::Validation(format!(
            "Vendor email '{email}' is not a valid address"
        ))),
    }
}

/// Validate a vendor reference on a proposal. Existence is not checked.
pub fn validate_vendor_id(vendor_id: DbId) -> Result<(), CoreError> {
    if vendor_id < 1 {
        return Err(CoreError::Validation(format!(
            "vendor_id must be a positive integer, got {vendor_id}"
        )));
    }
    Ok(())
}
