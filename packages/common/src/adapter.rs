//! Adapter trust boundary
//!
//! Adapters hold the business logic a generic proposal ultimately drives.
//! They are reachable only through the generic handler: the handler's address
//! is handed to the adapter at instantiation as a `HandlerCapability`, and
//! every adapter entry point checks it before doing anything else.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, MessageInfo, Uint128};
use thiserror::Error;

/// Tagged command the generic handler delivers to an adapter
#[cw_serde]
pub struct GenericCall {
    /// Function selector registered for the resource
    pub selector: Binary,
    /// Depositor carried explicitly (blank depositor offset), otherwise `None`
    pub depositor: Option<String>,
    /// Execution payload, with the depositor spliced in when an offset is set
    pub payload: Binary,
    /// Highest fee the depositor agreed to pay
    pub max_fee: Uint128,
}

/// Execute message every adapter accepts from the handler
#[cw_serde]
pub enum GenericCallMsg {
    GenericCall(GenericCall),
}

/// Query every adapter answers so the bridge can pre-check fee ceilings
#[cw_serde]
#[derive(QueryResponses)]
pub enum GenericCallQueryMsg {
    /// Fee the adapter would charge when executing `call`
    #[returns(RequiredFeeResponse)]
    RequiredFee { call: GenericCall },
}

#[cw_serde]
pub struct RequiredFeeResponse {
    pub fee: Uint128,
}

#[derive(Error, Debug, PartialEq)]
#[error("Unauthorized caller {caller}: sender must be the generic handler")]
pub struct UnauthorizedCaller {
    pub caller: Addr,
}

/// Credential identifying the only caller an adapter trusts
#[cw_serde]
pub struct HandlerCapability {
    handler: Addr,
}

impl HandlerCapability {
    pub fn new(handler: Addr) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Addr {
        &self.handler
    }

    /// Must be the first check of every adapter entry point.
    pub fn authorize(&self, info: &MessageInfo) -> Result<(), UnauthorizedCaller> {
        if info.sender != self.handler {
            return Err(UnauthorizedCaller {
                caller: info.sender.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_info;

    #[test]
    fn test_capability_accepts_only_handler() {
        let capability = HandlerCapability::new(Addr::unchecked("handler"));

        assert!(capability.authorize(&mock_info("handler", &[])).is_ok());

        let err = capability.authorize(&mock_info("intruder", &[])).unwrap_err();
        assert_eq!(err.caller, Addr::unchecked("intruder"));
        assert!(err.to_string().contains("sender must be the generic handler"));
    }

    #[test]
    fn test_generic_call_wire_shape() {
        let call = GenericCall {
            selector: Binary::from(b"stake".to_vec()),
            depositor: None,
            payload: Binary::default(),
            max_fee: Uint128::zero(),
        };
        let json = cosmwasm_std::to_json_string(&GenericCallMsg::GenericCall(call)).unwrap();
        assert!(json.starts_with("{\"generic_call\":{\"selector\":"));
    }
}
