//! Error taxonomy shared by the bridge contracts.
//!
//! Every contract error maps onto one of these categories. Authorization,
//! validation and state errors abort the enclosing message; execution errors
//! raised below the dispatcher are turned into per-proposal failure events.

use cosmwasm_schema::cw_serde;

#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller lacks the admin capability, or is not the trusted handler
    Authorization,
    /// Malformed payload, invalid bounds, unknown resource id
    Validation,
    /// No-op update, already configured, paused
    State,
    /// Inner call reverted, insufficient fee
    Execution,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Authorization => "authorization",
            ErrorCategory::Validation => "validation",
            ErrorCategory::State => "state",
            ErrorCategory::Execution => "execution",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Authorization.as_str(), "authorization");
        assert_eq!(ErrorCategory::Validation.as_str(), "validation");
        assert_eq!(ErrorCategory::State.as_str(), "state");
        assert_eq!(ErrorCategory::Execution.as_str(), "execution");
    }
}
