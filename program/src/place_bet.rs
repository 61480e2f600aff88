use dice_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::{calculate_payout, net_exposure};

/// Escrows a player's stake against the house vault and records the wager.
/// The bet address is derived from (vault, seed); reusing a seed collides
/// with the prior bet account and fails.
pub fn process_place_bet(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = PlaceBet::try_from_bytes(data)?;
    let seed = args.seed;
    let threshold = args.threshold;
    let amount = u64::from_le_bytes(args.amount);

    sol_log(&format!(
        "PlaceBet: seed={}, threshold={}, amount={}",
        u128::from_le_bytes(seed),
        threshold,
        amount
    ));

    // Load accounts.
    let [player_info, house_info, vault_info, bet_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    player_info.is_signer()?;
    vault_info
        .is_writable()?
        .has_seeds(&[VAULT, &house_info.key.to_bytes()], &dice_api::ID)?;
    bet_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[BET, &vault_info.key.to_bytes(), &seed], &dice_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let vault = vault_info.as_account_mut::<Vault>(&dice_api::ID)?;
    if vault.house != *house_info.key {
        sol_log("Vault does not belong to the named house");
        return Err(DiceError::InvalidAuthority.into());
    }

    // Validate the wager.
    if threshold < MIN_THRESHOLD || threshold > MAX_THRESHOLD {
        return Err(DiceError::InvalidThreshold.into());
    }
    if amount == 0 {
        return Err(DiceError::InvalidAmount.into());
    }

    // The vault must be able to cover this bet's worst case alongside
    // every other pending bet.
    let payout = calculate_payout(amount, threshold)?;
    let exposure = net_exposure(payout, amount)?;
    if exposure > vault.available() {
        sol_log("Bet exceeds available vault liquidity");
        return Err(DiceError::InsufficientLiquidity.into());
    }

    // Record the wager at the current slot.
    let clock = Clock::get()?;
    create_program_account::<Bet>(
        bet_info,
        system_program,
        player_info,
        &dice_api::ID,
        &[BET, &vault_info.key.to_bytes(), &seed],
    )?;
    let (_, bump) = bet_pda(*vault_info.key, u128::from_le_bytes(seed));
    let bet = bet_info.as_account_mut::<Bet>(&dice_api::ID)?;
    bet.player = *player_info.key;
    bet.seed = seed;
    bet.slot = clock.slot;
    bet.amount = amount;
    bet.threshold = threshold;
    bet.bump = bump;

    // Escrow the stake and reserve the worst-case exposure.
    vault_info.collect(amount, player_info)?;
    vault.balance = vault
        .balance
        .checked_add(amount)
        .ok_or(DiceError::ArithmeticOverflow)?;
    vault.reserved = vault
        .reserved
        .checked_add(exposure)
        .ok_or(DiceError::ArithmeticOverflow)?;
    vault.total_wagered = vault
        .total_wagered
        .checked_add(amount)
        .ok_or(DiceError::ArithmeticOverflow)?;

    sol_log(&format!(
        "Bet placed at slot {}: balance={}, reserved={}",
        bet.slot, vault.balance, vault.reserved
    ));

    Ok(())
}
