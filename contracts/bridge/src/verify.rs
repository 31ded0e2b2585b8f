//! Signer key and the signature schemes it may use.
//!
//! The relay network is represented by a single aggregate key. Every batch
//! signature is checked over the 32-byte batch digest through the host
//! crypto functions of `Api`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Api, Binary};

#[cw_serde]
#[derive(Copy, Eq)]
pub enum SignatureScheme {
    /// 64-byte compact signature over the digest, 33 or 65-byte SEC1 key
    Secp256k1,
    /// 64-byte signature over the digest bytes, 32-byte key
    Ed25519,
}

impl SignatureScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::Secp256k1 => "secp256k1",
            SignatureScheme::Ed25519 => "ed25519",
        }
    }

    pub fn accepts_key(&self, public_key: &[u8]) -> bool {
        match self {
            SignatureScheme::Secp256k1 => matches!(public_key.len(), 33 | 65),
            SignatureScheme::Ed25519 => public_key.len() == 32,
        }
    }
}

pub trait SignatureVerifier {
    /// Host-level verification errors count as a mismatch.
    fn verify(&self, api: &dyn Api, digest: &[u8; 32], signature: &[u8]) -> bool;
}

/// Key installed by `EndKeygen`
#[cw_serde]
pub struct SignerKey {
    pub scheme: SignatureScheme,
    pub public_key: Binary,
}

impl SignatureVerifier for SignerKey {
    fn verify(&self, api: &dyn Api, digest: &[u8; 32], signature: &[u8]) -> bool {
        let verified = match self.scheme {
            SignatureScheme::Secp256k1 => api.secp256k1_verify(digest, signature, &self.public_key),
            SignatureScheme::Ed25519 => api.ed25519_verify(digest, signature, &self.public_key),
        };
        verified.unwrap_or(false)
    }
}
