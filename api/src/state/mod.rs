mod bet;
mod vault;

pub use bet::*;
pub use vault::*;

use steel::*;

use crate::consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum DiceAccount {
    Vault = 100,
    Bet = 101,
}

/// Fetch PDA of the vault account for a house.
pub fn vault_pda(house: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, &house.to_bytes()], &crate::id())
}

/// Fetch PDA of the bet account for a vault and seed.
pub fn bet_pda(vault: Pubkey, seed: u128) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BET, &vault.to_bytes(), &seed.to_le_bytes()], &crate::id())
}
