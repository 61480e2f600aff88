use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::vault_pda;

use super::DiceAccount;

/// Vault is the house's escrow account. It holds the liquidity backing
/// every pending bet against this house, plus the stakes in play.
///
/// PDA: ["vault", house]
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vault {
    /// The house identity this vault belongs to.
    pub house: Pubkey,

    /// Tracked liquidity in lamports. Excludes the account's rent-exempt
    /// reserve, which stays locked in the account for its lifetime.
    pub balance: u64,

    /// Sum of the net exposures (payout minus stake) of all pending bets.
    pub reserved: u64,

    /// Total lamports staked against this vault.
    pub total_wagered: u64,

    /// Total lamports paid out on winning bets.
    pub total_payouts: u64,

    /// Total lamports kept from losing stakes.
    pub total_collected: u64,

    /// The derivation bump of this vault's address.
    pub bump: u8,

    /// Padding for alignment.
    pub _padding: [u8; 7],
}

impl Vault {
    pub fn pda(house: Pubkey) -> (Pubkey, u8) {
        vault_pda(house)
    }

    /// Liquidity not yet reserved for pending bets.
    pub fn available(&self) -> u64 {
        self.balance.saturating_sub(self.reserved)
    }
}

account!(DiceAccount, Vault);
