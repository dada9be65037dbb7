use anchor_lang::prelude::*;

/// Reads a program-owned record from an account that may not exist yet.
///
/// Returns `None` for an empty account. Used where a missing record is a
/// domain state (unregistered voter, unknown option) rather than an error.
pub(crate) fn load<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(
        *info.owner,
        crate::ID,
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );

    let data = info.try_borrow_data()?;
    let record = T::try_deserialize(&mut &data[..])?;
    Ok(Some(record))
}

/// Writes `record` back over the account data loaded with [`load`].
pub(crate) fn store<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data[..];
    record.try_serialize(&mut dst)?;
    Ok(())
}
