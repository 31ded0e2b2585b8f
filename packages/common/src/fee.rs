//! Bounded Percentage Fee
//!
//! The fee is a fraction of the deposited amount expressed against a fixed
//! denominator of 1e8, then clamped into optional bounds.
//!
//! | Parameter     | Meaning                                   |
//! |---------------|-------------------------------------------|
//! | `rate`        | fee = amount * rate / 1e8 (floored)       |
//! | `lower_bound` | minimum fee, 0 disables the floor         |
//! | `upper_bound` | maximum fee, 0 disables the ceiling       |
//!
//! The lower-bound clamp is evaluated before the upper-bound clamp.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{StdError, StdResult, Uint128, Uint256};

/// Rate denominator (1e8 = 100%)
pub const FEE_DENOMINATOR: u128 = 100_000_000;

/// Fee rate and bounds
#[cw_serde]
#[derive(Default)]
pub struct FeeParameters {
    /// Fee rate scaled by `FEE_DENOMINATOR`
    pub rate: Uint128,
    /// Fee floor (0 = no floor)
    pub lower_bound: Uint128,
    /// Fee ceiling (0 = unbounded)
    pub upper_bound: Uint128,
}

impl FeeParameters {
    pub fn bounds(&self) -> (Uint128, Uint128) {
        (self.lower_bound, self.upper_bound)
    }
}

/// Bounds are valid when the upper bound is unset or strictly above the lower.
pub fn bounds_are_valid(lower_bound: Uint128, upper_bound: Uint128) -> bool {
    upper_bound.is_zero() || upper_bound > lower_bound
}

/// Calculate the fee charged for `amount`.
pub fn calculate_fee(amount: Uint128, params: &FeeParameters) -> StdResult<Uint128> {
    let scaled: Uint256 = amount.full_mul(params.rate) / Uint256::from(FEE_DENOMINATOR);
    let raw = Uint128::try_from(scaled)
        .map_err(|_| StdError::generic_err(format!("fee overflow for amount {}", amount)))?;

    if !params.lower_bound.is_zero() && raw < params.lower_bound {
        return Ok(params.lower_bound);
    }
    if !params.upper_bound.is_zero() && raw > params.upper_bound {
        return Ok(params.upper_bound);
    }
    Ok(raw)
}

// ============================================================================
// Fee Policy Interface
// ============================================================================

/// Queries every fee policy contract answers
#[cw_serde]
#[derive(QueryResponses)]
pub enum FeeQueryMsg {
    /// Fee charged for a deposit of `amount`
    #[returns(CalculateFeeResponse)]
    CalculateFee { amount: Uint128 },

    /// Current rate and bounds
    #[returns(FeeConfigResponse)]
    FeeConfig {},
}

#[cw_serde]
pub struct CalculateFeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct FeeConfigResponse {
    pub admin: String,
    pub rate: Uint128,
    pub lower_bound: Uint128,
    pub upper_bound: Uint128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rate: u128, lower: u128, upper: u128) -> FeeParameters {
        FeeParameters {
            rate: Uint128::new(rate),
            lower_bound: Uint128::new(lower),
            upper_bound: Uint128::new(upper),
        }
    }

    fn fee(amount: u128, p: &FeeParameters) -> u128 {
        calculate_fee(Uint128::new(amount), p).unwrap().u128()
    }

    #[test]
    fn test_unbounded_rate() {
        // rate=10000, amount=1e8, bounds unset -> 10000
        assert_eq!(fee(100_000_000, &params(10_000, 0, 0)), 10_000);
    }

    #[test]
    fn test_zero_rate_without_bounds() {
        assert_eq!(fee(100_000_000, &FeeParameters::default()), 0);
    }

    #[test]
    fn test_lower_clamp() {
        // raw = 1 -> floor of 100 applies
        assert_eq!(fee(10_000, &params(10_000, 100, 300)), 100);
        assert_eq!(fee(10_000, &params(10_000, 100, 0)), 100);
    }

    #[test]
    fn test_upper_clamp() {
        // raw = 10000 -> ceiling of 300 applies
        assert_eq!(fee(100_000_000, &params(10_000, 0, 300)), 300);
    }

    #[test]
    fn test_within_bounds() {
        assert_eq!(fee(100_000_000, &params(10_000, 100, 300_000)), 10_000);
        assert_eq!(fee(100_000, &params(10_000, 0, 300)), 10);
    }

    #[test]
    fn test_lower_clamp_evaluated_first() {
        // Degenerate bounds can only exist if written around validation;
        // the floor still wins because it is checked first.
        let p = params(0, 500, 300);
        assert_eq!(fee(1_000, &p), 500);
    }

    #[test]
    fn test_floors_fractional_fee() {
        // 999 * 1e6 / 1e8 = 9.99 -> 9
        assert_eq!(fee(999, &params(1_000_000, 0, 0)), 9);
    }

    #[test]
    fn test_clamp_properties_over_grid() {
        let amounts = [0u128, 1, 99, 10_000, 123_456_789, 100_000_000_000];
        let rates = [0u128, 1, 10_000, 60_000, 100_000_000];
        let bounds = [(0u128, 0u128), (100, 0), (0, 300), (100, 300), (1, 1_000_000)];

        for &amount in &amounts {
            for &rate in &rates {
                for &(lo, hi) in &bounds {
                    let p = params(rate, lo, hi);
                    let raw = amount * rate / FEE_DENOMINATOR;
                    let got = fee(amount, &p);
                    if lo > 0 && raw < lo {
                        assert_eq!(got, lo);
                    } else if hi > 0 && raw > hi {
                        assert_eq!(got, hi);
                    } else {
                        assert_eq!(got, raw);
                    }
                }
            }
        }
    }

    #[test]
    fn test_overflow_is_an_error() {
        let p = params(u128::MAX, 0, 0);
        assert!(calculate_fee(Uint128::MAX, &p).is_err());
    }

    #[test]
    fn test_bounds_validation() {
        assert!(bounds_are_valid(Uint128::zero(), Uint128::zero()));
        assert!(bounds_are_valid(Uint128::new(100), Uint128::zero()));
        assert!(bounds_are_valid(Uint128::new(25), Uint128::new(50)));
        assert!(!bounds_are_valid(Uint128::new(50), Uint128::new(25)));
        assert!(!bounds_are_valid(Uint128::new(50), Uint128::new(50)));
    }
}
