//! Proposals, resource ids and the canonical batch encoding relayers sign.
//!
//! # Batch Byte Layout
//! - `BATCH_TAG` (20 bytes)
//! - destination domain id (1 byte)
//! - bridge contract address (1-byte length + UTF-8)
//! - entry count (4 bytes, big-endian)
//! - per entry:
//!   - origin domain id (1 byte)
//!   - deposit nonce (8 bytes, big-endian)
//!   - resource id (32 bytes)
//!   - data (4-byte big-endian length + bytes)
//!
//! The signed message is `keccak256` of the above.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::codec::{write_long, write_short, CodecError};
use crate::hash::{keccak256, to_hex};

/// Small integer identifying a participating ledger partition
pub type DomainId = u8;

/// Domain separation tag prepended to every signed batch
pub const BATCH_TAG: &[u8; 20] = b"GENERIC_BRIDGE_BATCH";

/// Opaque 32-byte identifier binding an asset class across domains
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId([u8; 32]);

impl ResourceId {
    pub const LEN: usize = 32;

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a resource id, requiring exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| CodecError::Truncated {
            field: "resource_id",
            needed: Self::LEN,
            remaining: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Derive an id from an asset identifier and its home domain:
    /// the first 31 bytes of `keccak256(asset)` followed by the domain.
    pub fn derive(asset: &str, domain: DomainId) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..31].copy_from_slice(&keccak256(asset.as_bytes())[..31]);
        bytes[31] = domain;
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_binary(&self) -> Binary {
        Binary::from(self.0.to_vec())
    }

    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

/// A relay-signed instruction to execute a deposit's effect on this domain
#[cw_serde]
pub struct Proposal {
    /// Domain the deposit originated on
    pub origin_domain_id: DomainId,
    /// Per-origin-domain monotonic deposit nonce
    pub deposit_nonce: u64,
    /// 32-byte resource id selecting the handler
    pub resource_id: Binary,
    /// Opaque handler-specific payload
    pub data: Binary,
}

/// Encode a batch of proposals in the canonical signed layout.
pub fn canonical_batch_bytes(
    destination_domain_id: DomainId,
    bridge: &str,
    proposals: &[Proposal],
) -> Result<Vec<u8>, CodecError> {
    let count = u32::try_from(proposals.len()).map_err(|_| CodecError::FieldTooLong {
        field: "proposals",
        len: proposals.len(),
        max: u32::MAX as usize,
    })?;

    let mut out = Vec::new();
    out.extend_from_slice(BATCH_TAG);
    out.push(destination_domain_id);
    write_short(&mut out, bridge.as_bytes(), "bridge")?;
    out.extend_from_slice(&count.to_be_bytes());

    for proposal in proposals {
        let resource_id = ResourceId::from_slice(proposal.resource_id.as_slice())?;
        out.push(proposal.origin_domain_id);
        out.extend_from_slice(&proposal.deposit_nonce.to_be_bytes());
        out.extend_from_slice(resource_id.as_slice());
        write_long(&mut out, proposal.data.as_slice(), "data")?;
    }

    Ok(out)
}

/// The 32-byte digest the relay signer signs for a batch.
pub fn batch_digest(
    destination_domain_id: DomainId,
    bridge: &str,
    proposals: &[Proposal],
) -> Result<[u8; 32], CodecError> {
    Ok(keccak256(&canonical_batch_bytes(
        destination_domain_id,
        bridge,
        proposals,
    )?))
}
