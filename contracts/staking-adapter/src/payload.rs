//! Stake payload: amount (32 bytes, big-endian) followed by the external
//! address with a 1-byte length prefix.

use common::codec::{write_short, ByteReader};
use common::CodecError;
use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakePayload {
    pub amount: Uint128,
    pub external_address: String,
}

impl StakePayload {
    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        let mut reader = ByteReader::new(bytes);
        let amount = reader.read_u256("amount")?;
        let external_address = reader.read_short("external_address")?;
        reader.finish()?;

        let amount = Uint128::try_from(amount).map_err(|_| ContractError::AmountTooLarge)?;
        let external_address = std::str::from_utf8(external_address)
            .map_err(|_| CodecError::InvalidUtf8 {
                field: "external_address",
            })?
            .to_string();

        Ok(Self {
            amount,
            external_address,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Uint256::from(self.amount).to_be_bytes().to_vec();
        write_short(&mut out, self.external_address.as_bytes(), "external_address")?;
        Ok(out)
    }
}
