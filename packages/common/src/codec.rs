//! Generic call codec
//!
//! Byte layout of the opaque `data` carried by a generic proposal:
//!
//! | Field              | Prefix                 | Body                      |
//! |--------------------|------------------------|---------------------------|
//! | max fee            | -                      | 32 bytes, big-endian      |
//! | function selector  | 1-byte length          | selector bytes            |
//! | target contract    | 1-byte length          | UTF-8 contract address    |
//! | depositor address  | 1-byte length          | UTF-8 depositor address   |
//! | execution payload  | 4-byte big-endian len  | payload bytes             |
//!
//! Nothing may follow the execution payload.

use cosmwasm_std::Uint256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("{field}: need {needed} bytes, only {remaining} remaining")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("{remaining} trailing bytes after execution payload")]
    TrailingBytes { remaining: usize },

    #[error("{field}: length {len} exceeds maximum {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("depositor offset {offset} is beyond payload length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },
}

/// Cursor over a borrowed byte buffer. Every read is bounds-checked against
/// the bytes that remain.
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_bytes(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], CodecError> {
        if len > self.remaining() {
            return Err(CodecError::Truncated {
                field,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, field)?);
        Ok(out)
    }

    pub fn read_u256(&mut self, field: &'static str) -> Result<Uint256, CodecError> {
        Ok(Uint256::from_be_bytes(self.read_array::<32>(field)?))
    }

    /// Reads a body preceded by a 1-byte length.
    pub fn read_short(&mut self, field: &'static str) -> Result<&'a [u8], CodecError> {
        let [len] = self.read_array::<1>(field)?;
        self.read_bytes(len as usize, field)
    }

    /// Reads a body preceded by a 4-byte big-endian length.
    pub fn read_long(&mut self, field: &'static str) -> Result<&'a [u8], CodecError> {
        let len = u32::from_be_bytes(self.read_array::<4>(field)?);
        self.read_bytes(len as usize, field)
    }

    /// Consumes the reader, rejecting unread bytes.
    pub fn finish(self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(CodecError::TrailingBytes { remaining }),
        }
    }
}

/// Appends `body` with a 1-byte length prefix.
pub fn write_short(out: &mut Vec<u8>, body: &[u8], field: &'static str) -> Result<(), CodecError> {
    let len = u8::try_from(body.len()).map_err(|_| CodecError::FieldTooLong {
        field,
        len: body.len(),
        max: u8::MAX as usize,
    })?;
    out.push(len);
    out.extend_from_slice(body);
    Ok(())
}

/// Appends `body` with a 4-byte big-endian length prefix.
pub fn write_long(out: &mut Vec<u8>, body: &[u8], field: &'static str) -> Result<(), CodecError> {
    let len = u32::try_from(body.len()).map_err(|_| CodecError::FieldTooLong {
        field,
        len: body.len(),
        max: u32::MAX as usize,
    })?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(body);
    Ok(())
}

/// Decoded form of a generic proposal's `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDescriptor {
    pub max_fee: Uint256,
    pub function_selector: Vec<u8>,
    pub target_contract: Vec<u8>,
    pub depositor_address: Vec<u8>,
    pub execution_payload: Vec<u8>,
}

impl CallDescriptor {
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut reader = ByteReader::new(data);
        let max_fee = reader.read_u256("max_fee")?;
        let function_selector = reader.read_short("function_selector")?.to_vec();
        let target_contract = reader.read_short("target_contract")?.to_vec();
        let depositor_address = reader.read_short("depositor_address")?.to_vec();
        let execution_payload = reader.read_long("execution_payload")?.to_vec();
        reader.finish()?;

        Ok(Self {
            max_fee,
            function_selector,
            target_contract,
            depositor_address,
            execution_payload,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(
            32 + 3
                + 4
                + self.function_selector.len()
                + self.target_contract.len()
                + self.depositor_address.len()
                + self.execution_payload.len(),
        );
        out.extend_from_slice(&self.max_fee.to_be_bytes());
        write_short(&mut out, &self.function_selector, "function_selector")?;
        write_short(&mut out, &self.target_contract, "target_contract")?;
        write_short(&mut out, &self.depositor_address, "depositor_address")?;
        write_long(&mut out, &self.execution_payload, "execution_payload")?;
        Ok(out)
    }

    pub fn target_str(&self) -> Result<&str, CodecError> {
        std::str::from_utf8(&self.target_contract).map_err(|_| CodecError::InvalidUtf8 {
            field: "target_contract",
        })
    }

    pub fn depositor_str(&self) -> Result<&str, CodecError> {
        std::str::from_utf8(&self.depositor_address).map_err(|_| CodecError::InvalidUtf8 {
            field: "depositor_address",
        })
    }
}

/// Splices a 1-byte length-prefixed depositor into `payload` at `offset`.
pub fn inject_depositor(
    payload: &[u8],
    offset: usize,
    depositor: &[u8],
) -> Result<Vec<u8>, CodecError> {
    if offset > payload.len() {
        return Err(CodecError::OffsetOutOfRange {
            offset,
            len: payload.len(),
        });
    }
    let mut out = Vec::with_capacity(payload.len() + depositor.len() + 1);
    out.extend_from_slice(&payload[..offset]);
    write_short(&mut out, depositor, "depositor_address")?;
    out.extend_from_slice(&payload[offset..]);
    Ok(out)
}
