//! Rounding of monetary amounts to whole won.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds an amount to whole won, halves away from zero.
///
/// Every pay component is rounded through this on its own before the total
/// is summed.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::round_to_won;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_won(Decimal::from_str("434.5").unwrap()).unwrap(), 435);
/// assert_eq!(round_to_won(Decimal::from_str("360113.6").unwrap()).unwrap(), 360_114);
/// ```
pub fn round_to_won(amount: Decimal) -> EngineResult<u64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {} is outside the payable range", amount.normalize()),
        })
}
