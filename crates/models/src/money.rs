//! Checks for amounts stored as `DECIMAL(8,2)`.

use rust_decimal::Decimal;

use crate::errors::ModelError;

/// Total significant digits a money column can hold.
pub const PRECISION: u32 = 8;
/// Fractional digits a money column can hold.
pub const SCALE: u32 = 2;

/// Validate that `value` is non-negative and fits `DECIMAL(8,2)`.
/// Returns the value rescaled to exactly two fractional digits.
pub fn validate_amount(field: &str, value: Decimal) -> Result<Decimal, ModelError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ModelError::Validation(format!("{field} must not be negative")));
    }
    let normalized = value.normalize();
    if normalized.scale() > SCALE {
        return Err(ModelError::Validation(format!("{field} allows at most {SCALE} decimal places")));
    }
    let limit = Decimal::from(10_i64.pow(PRECISION - SCALE));
    if normalized >= limit {
        return Err(ModelError::Validation(format!("{field} must be less than {limit}")));
    }
    let mut scaled = normalized;
    scaled.rescale(SCALE);
    Ok(scaled)
}
