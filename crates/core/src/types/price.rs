//! Whole-unit price type.
//!
//! Catalog prices are non-negative whole amounts of the display currency
//! (rupees); there is no fractional arithmetic anywhere in the system. The
//! payment gateway, however, expects amounts in the minor currency unit
//! (paise), so [`Price::to_minor_units`] performs the x100 conversion with
//! checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors constructing or converting a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative (got {0})")]
    Negative(i64),
    /// Converting to minor units would overflow an i64.
    #[error("price {0} overflows when converted to minor units")]
    MinorUnitOverflow(i64),
}

/// A non-negative, whole-unit currency amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Number of minor units (paise) per major unit (rupee).
    pub const MINOR_UNITS_PER_UNIT: i64 = 100;

    /// Create a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `amount < 0`.
    pub const fn new(amount: i64) -> Result<Self, PriceError> {
        if amount < 0 {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the whole-unit amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Convert to the gateway's minor currency unit.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::MinorUnitOverflow` if the multiplication
    /// overflows. Checked rather than saturating: a silently clamped amount
    /// must never reach the payment gateway.
    pub const fn to_minor_units(&self) -> Result<i64, PriceError> {
        match self.0.checked_mul(Self::MINOR_UNITS_PER_UNIT) {
            Some(minor) => Ok(minor),
            None => Err(PriceError::MinorUnitOverflow(self.0)),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceError;

    fn try_from(amount: i64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

// SQLx support (with postgres feature): stored as BIGINT.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <i64 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert_eq!(Price::new(-1), Err(PriceError::Negative(-1)));
        assert!(Price::new(0).is_ok());
        assert!(Price::new(850).is_ok());
    }

    #[test]
    fn test_to_minor_units() {
        let price = Price::new(1200).unwrap();
        assert_eq!(price.to_minor_units().unwrap(), 120_000);
    }

    #[test]
    fn test_to_minor_units_overflow() {
        let price = Price::new(i64::MAX / 10).unwrap();
        assert_eq!(
            price.to_minor_units(),
            Err(PriceError::MinorUnitOverflow(i64::MAX / 10))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::new(2500).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "2500");
        let parsed: Price = serde_json::from_str("2500").unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_ordering() {
        assert!(Price::new(50).unwrap() < Price::new(100).unwrap());
    }
}
