//! Custom serde helpers for BlindPay's wire formats.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serializer, ser};

/// Convert a major-unit amount (e.g. dollars) to integer minor units (cents).
///
/// The amount is first rounded to two decimal places using banker's rounding
/// (half to even), then scaled by 100. Returns `None` if the result does not
/// fit in an `i64`.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use blindpay_client::types::serde_helpers::to_minor_units;
///
/// assert_eq!(to_minor_units(Decimal::new(1050, 2)), Some(1050)); // 10.50
/// assert_eq!(to_minor_units(Decimal::new(10005, 3)), Some(1000)); // 10.005 -> 10.00
/// assert_eq!(to_minor_units(Decimal::new(10015, 3)), Some(1002)); // 10.015 -> 10.02
/// ```
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    let cents = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .checked_mul(Decimal::ONE_HUNDRED)?;
    i64::try_from(cents).ok()
}

/// Convert integer minor units back to a major-unit amount.
pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Serialize a `Decimal` amount as integer minor units.
///
/// BlindPay expects quote amounts in cents (`"request_amount": 1050` for
/// 10.50). Deserialization reads the integer back into a `Decimal`.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Serialize;
/// use blindpay_client::types::serde_helpers::minor_units;
///
/// #[derive(Serialize)]
/// struct Quote {
///     #[serde(with = "minor_units")]
///     request_amount: Decimal,
/// }
///
/// let quote = Quote { request_amount: Decimal::new(1999, 2) };
/// assert_eq!(serde_json::to_string(&quote).unwrap(), r#"{"request_amount":1999}"#);
/// ```
pub mod minor_units {
    use super::*;

    /// Serialize as rounded integer minor units.
    pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cents = to_minor_units(*amount)
            .ok_or_else(|| <S::Error as ser::Error>::custom(format!("amount {} is out of range", amount)))?;
        serializer.serialize_i64(cents)
    }

    /// Deserialize integer minor units into a major-unit amount.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cents = i64::deserialize(deserializer)?;
        Ok(from_minor_units(cents))
    }
}
