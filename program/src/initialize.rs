use dice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Creates and funds the house vault. Each house has exactly one vault;
/// a second initialize fails on the occupied account.
pub fn process_initialize(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = Initialize::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    // Load accounts.
    let [house_info, vault_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    house_info.is_signer()?;
    vault_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[VAULT, &house_info.key.to_bytes()], &dice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    if amount == 0 {
        return Err(DiceError::InvalidAmount.into());
    }

    // Create the vault account and seed it with the house's liquidity.
    create_program_account::<Vault>(
        vault_info,
        system_program,
        house_info,
        &dice_api::ID,
        &[VAULT, &house_info.key.to_bytes()],
    )?;
    vault_info.collect(amount, house_info)?;

    let (_, bump) = vault_pda(*house_info.key);
    let vault = vault_info.as_account_mut::<Vault>(&dice_api::ID)?;
    vault.house = *house_info.key;
    vault.balance = amount;
    vault.reserved = 0;
    vault.total_wagered = 0;
    vault.total_payouts = 0;
    vault.total_collected = 0;
    vault.bump = bump;

    sol_log(&format!(
        "Vault created for house {} with {} lamports",
        house_info.key, amount
    ));

    Ok(())
}
