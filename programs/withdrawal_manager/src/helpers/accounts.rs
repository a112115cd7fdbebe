use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Deserializes a program-owned account, or `None` when the address holds no
/// initialized account of type `T`.
pub fn load_program_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Option<T> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    T::try_deserialize(&mut &data[..]).ok()
}

pub fn store_program_account<T: AccountSerialize + Owner>(
    info: &AccountInfo,
    value: &T,
) -> Result<()> {
    require!(
        info.is_writable && info.owner == &T::owner(),
        ErrorCode::InvalidWithdrawalRequest
    );
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)?;
    Ok(())
}
