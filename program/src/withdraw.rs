use dice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Withdraws surplus liquidity from the vault to the house. Liquidity
/// reserved for pending bets cannot be withdrawn.
pub fn process_withdraw(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = Withdraw::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    // Load accounts.
    let [house_info, vault_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    house_info.is_signer()?;
    vault_info
        .is_writable()?
        .has_seeds(&[VAULT, &house_info.key.to_bytes()], &dice_api::ID)?;

    if amount == 0 {
        return Err(DiceError::InvalidAmount.into());
    }

    let vault = vault_info.as_account_mut::<Vault>(&dice_api::ID)?;
    if vault.house != *house_info.key {
        sol_log("Vault does not belong to the named house");
        return Err(DiceError::InvalidAuthority.into());
    }
    if amount > vault.available() {
        sol_log("Withdrawal exceeds unreserved liquidity");
        return Err(DiceError::InsufficientLiquidity.into());
    }

    vault.balance = vault
        .balance
        .checked_sub(amount)
        .ok_or(DiceError::ArithmeticOverflow)?;
    vault_info.send(amount, house_info);

    sol_log(&format!(
        "Withdrew {} lamports; balance={}",
        amount, vault.balance
    ));

    Ok(())
}
