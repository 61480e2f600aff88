use dice_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::sysvar;
use steel::*;

use crate::utils::{calculate_payout, net_exposure, roll_from_signature};
use crate::verify::verify_house_attestation;

/// Resolves a pending bet against a house-signed roll and closes the
/// record, returning its rent to the player.
///
/// Anyone may submit this instruction; authenticity comes entirely from
/// the ed25519 attestation carried at instruction index 0. A failed
/// verification leaves the bet and all balances untouched, so the caller
/// may retry with a correct signature.
pub fn process_resolve_bet(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = ResolveBet::try_from_bytes(data)?;
    let signature = args.signature;

    // Load accounts.
    let [house_info, player_info, vault_info, bet_info, instructions_info, system_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    player_info.is_writable()?;
    vault_info
        .is_writable()?
        .has_seeds(&[VAULT, &house_info.key.to_bytes()], &dice_api::ID)?;
    bet_info.is_writable()?;
    instructions_info.has_address(&sysvar::instructions::ID)?;
    system_program.is_program(&system_program::ID)?;

    // Load the bet record and tie it to this vault.
    let bet = *bet_info.as_account::<Bet>(&dice_api::ID)?;
    bet_info.has_seeds(&[BET, &vault_info.key.to_bytes(), &bet.seed], &dice_api::ID)?;
    if bet.player != *player_info.key {
        sol_log("Player does not match the bet record");
        return Err(DiceError::InvalidAuthority.into());
    }

    let vault = vault_info.as_account_mut::<Vault>(&dice_api::ID)?;
    if vault.house != *house_info.key {
        sol_log("Vault does not belong to the named house");
        return Err(DiceError::InvalidAuthority.into());
    }

    // Authenticity gate: the transaction must carry an ed25519 verification
    // of the house's signature over this exact bet.
    let message = bet.message();
    verify_house_attestation(instructions_info, house_info.key, &message, &signature)?;

    // Derive the roll and settle.
    let roll = roll_from_signature(&signature);
    let payout = calculate_payout(bet.amount, bet.threshold)?;
    let exposure = net_exposure(payout, bet.amount)?;

    if roll < bet.threshold {
        vault.balance = vault
            .balance
            .checked_sub(payout)
            .ok_or(DiceError::InsufficientLiquidity)?;
        vault.total_payouts = vault
            .total_payouts
            .checked_add(payout)
            .ok_or(DiceError::ArithmeticOverflow)?;
        vault_info.send(payout, player_info);
        sol_log(&format!(
            "Roll {} < {}: paid {} lamports to {}",
            roll, bet.threshold, payout, player_info.key
        ));
    } else {
        vault.total_collected = vault
            .total_collected
            .checked_add(bet.amount)
            .ok_or(DiceError::ArithmeticOverflow)?;
        sol_log(&format!(
            "Roll {} >= {}: stake of {} kept by the house",
            roll, bet.threshold, bet.amount
        ));
    }

    // Release the reservation and reclaim the record's rent to the player.
    vault.reserved = vault
        .reserved
        .checked_sub(exposure)
        .ok_or(DiceError::ArithmeticOverflow)?;
    bet_info.close(player_info)?;

    Ok(())
}
