//! Executed-nonce bitmap, one 64-bit word per 64 nonces of an origin domain.
//!
//! A nonce is only ever cleared by `rollback`, which the dispatcher reserves
//! for failures its rollback policy hands back to the relayers.

use common::DomainId;
use cosmwasm_std::{StdResult, Storage};

use crate::state::EXECUTED_NONCES;

fn slot(deposit_nonce: u64) -> (u64, u64) {
    (deposit_nonce / 64, 1u64 << (deposit_nonce % 64))
}

pub fn is_executed(
    storage: &dyn Storage,
    domain_id: DomainId,
    deposit_nonce: u64,
) -> StdResult<bool> {
    let (word, bit) = slot(deposit_nonce);
    let flags = EXECUTED_NONCES
        .may_load(storage, (domain_id, word))?
        .unwrap_or_default();
    Ok(flags & bit != 0)
}

pub fn mark_executed(
    storage: &mut dyn Storage,
    domain_id: DomainId,
    deposit_nonce: u64,
) -> StdResult<()> {
    let (word, bit) = slot(deposit_nonce);
    EXECUTED_NONCES.update(storage, (domain_id, word), |flags| -> StdResult<_> {
        Ok(flags.unwrap_or_default() | bit)
    })?;
    Ok(())
}

pub fn rollback(
    storage: &mut dyn Storage,
    domain_id: DomainId,
    deposit_nonce: u64,
) -> StdResult<()> {
    let (word, bit) = slot(deposit_nonce);
    let flags = EXECUTED_NONCES
        .may_load(storage, (domain_id, word))?
        .unwrap_or_default()
        & !bit;
    if flags == 0 {
        EXECUTED_NONCES.remove(storage, (domain_id, word));
    } else {
        EXECUTED_NONCES.save(storage, (domain_id, word), &flags)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_mark_and_check() {
        let mut storage = MockStorage::new();
        assert!(!is_executed(&storage, 1, 5).unwrap());

        mark_executed(&mut storage, 1, 5).unwrap();
        assert!(is_executed(&storage, 1, 5).unwrap());
        assert!(!is_executed(&storage, 1, 4).unwrap());
        assert!(!is_executed(&storage, 1, 6).unwrap());
    }

    #[test]
    fn test_domains_are_independent() {
        let mut storage = MockStorage::new();
        mark_executed(&mut storage, 1, 7).unwrap();
        assert!(!is_executed(&storage, 2, 7).unwrap());
    }

    #[test]
    fn test_word_boundaries() {
        let mut storage = MockStorage::new();
        for nonce in [0u64, 63, 64, 127, 128, u64::MAX] {
            mark_executed(&mut storage, 3, nonce).unwrap();
            assert!(is_executed(&storage, 3, nonce).unwrap());
        }
        assert!(!is_executed(&storage, 3, 1).unwrap());
        assert!(!is_executed(&storage, 3, 65).unwrap());
        assert!(!is_executed(&storage, 3, u64::MAX - 1).unwrap());
    }

    #[test]
    fn test_rollback_clears_only_its_bit() {
        let mut storage = MockStorage::new();
        mark_executed(&mut storage, 1, 10).unwrap();
        mark_executed(&mut storage, 1, 11).unwrap();

        rollback(&mut storage, 1, 10).unwrap();
        assert!(!is_executed(&storage, 1, 10).unwrap());
        assert!(is_executed(&storage, 1, 11).unwrap());

        rollback(&mut storage, 1, 11).unwrap();
        assert!(EXECUTED_NONCES.may_load(&storage, (1, 0)).unwrap().is_none());
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut storage = MockStorage::new();
        mark_executed(&mut storage, 1, 2).unwrap();
        mark_executed(&mut storage, 1, 2).unwrap();
        assert_eq!(EXECUTED_NONCES.load(&storage, (1, 0)).unwrap(), 0b100);
    }
}
