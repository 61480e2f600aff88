use dice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Adds liquidity to a house vault. Anyone may fund the house.
pub fn process_fund_vault(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = FundVault::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    sol_log(&format!("FundVault: amount={}", amount));

    // Load accounts.
    let [signer_info, house_info, vault_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    vault_info
        .is_writable()?
        .has_seeds(&[VAULT, &house_info.key.to_bytes()], &dice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    if amount == 0 {
        return Err(DiceError::InvalidAmount.into());
    }

    let vault = vault_info.as_account_mut::<Vault>(&dice_api::ID)?;
    if vault.house != *house_info.key {
        sol_log("Vault does not belong to the named house");
        return Err(DiceError::InvalidAuthority.into());
    }

    vault_info.collect(amount, signer_info)?;
    vault.balance = vault
        .balance
        .checked_add(amount)
        .ok_or(DiceError::ArithmeticOverflow)?;

    sol_log(&format!("Vault balance is now {} lamports", vault.balance));

    Ok(())
}
