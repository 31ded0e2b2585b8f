//! Set-if-changed guard shared by every admin-gated update.

/// Overwrite `slot` with `value`, or return `unchanged()` when the two are
/// equal. Nothing is written on rejection.
pub fn set_if_changed<T, E>(slot: &mut T, value: T, unchanged: impl FnOnce() -> E) -> Result<(), E>
where
    T: PartialEq,
{
    if *slot == value {
        return Err(unchanged());
    }
    *slot = value;
    Ok(())
}
