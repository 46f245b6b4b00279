//! Shipping address record.

use serde::{Deserialize, Serialize};

/// Error validating a [`ShippingAddress`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    /// A required field is empty. Carries the field name for the client.
    #[error("address field `{0}` is required")]
    EmptyField(&'static str),
}

/// A shopper's shipping address.
///
/// All six fields are required, but no shape validation is applied beyond
/// non-emptiness - values are stored and echoed back verbatim, whitespace
/// and casing included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct ShippingAddress {
    pub name: String,
    pub line1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub mobile: String,
}

impl ShippingAddress {
    /// Check that every field is present.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::EmptyField` naming the first empty field, in
    /// declaration order.
    pub fn validate(&self) -> Result<(), AddressError> {
        for (field, value) in [
            ("name", &self.name),
            ("line1", &self.line1),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("mobile", &self.mobile),
        ] {
            if value.is_empty() {
                return Err(AddressError::EmptyField(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_address() -> ShippingAddress {
        ShippingAddress {
            name: "Jane Doe".to_owned(),
            line1: "123 Artistic Ave, Apt 4B".to_owned(),
            city: "Artville".to_owned(),
            state: "CA".to_owned(),
            zip: "90210".to_owned(),
            mobile: "123-456-7890".to_owned(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_address() {
        assert!(full_address().validate().is_ok());
    }

    #[test]
    fn test_validate_names_missing_field() {
        let mut address = full_address();
        address.zip = String::new();
        assert_eq!(
            address.validate(),
            Err(AddressError::EmptyField("zip"))
        );
    }

    #[test]
    fn test_whitespace_only_passes_validation() {
        // Emptiness means `== ""`; whitespace is preserved, not trimmed.
        let mut address = full_address();
        address.state = " ".to_owned();
        assert!(address.validate().is_ok());
    }

    #[test]
    fn test_serde_preserves_fields_verbatim() {
        let mut address = full_address();
        address.city = "  ArtVILLE  ".to_owned();
        let json = serde_json::to_string(&address).unwrap();
        let parsed: ShippingAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, address);
        assert_eq!(parsed.city, "  ArtVILLE  ");
    }
}
