use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::BET_MESSAGE_LEN;
use crate::state::bet_pda;

use super::DiceAccount;

/// Bet is a pending wager against a vault. It exists from PlaceBet until
/// ResolveBet closes it; its existence is the Pending state.
///
/// PDA: ["bet", vault, seed_le]
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Bet {
    /// The player who staked this bet and receives the payout and the
    /// record's rent on resolution.
    pub player: Pubkey,

    /// The player-chosen nonce, little-endian. Makes the bet address
    /// unique per (vault, seed); a reused seed collides with the prior
    /// bet's address and fails deterministically.
    pub seed: [u8; 16],

    /// The slot at which the bet was placed.
    pub slot: u64,

    /// The staked amount in lamports.
    pub amount: u64,

    /// The winning threshold. The player wins when the roll is below it.
    pub threshold: u8,

    /// The derivation bump of this bet's address.
    pub bump: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],
}

impl Bet {
    pub fn pda(vault: Pubkey, seed: u128) -> (Pubkey, u8) {
        bet_pda(vault, seed)
    }

    /// The canonical bytes the house signs to resolve this bet. Field
    /// order and widths are the wire contract; changing them invalidates
    /// every outstanding signature.
    pub fn message(&self) -> [u8; BET_MESSAGE_LEN] {
        let mut message = [0u8; BET_MESSAGE_LEN];
        message[..32].copy_from_slice(&self.player.to_bytes());
        message[32..48].copy_from_slice(&self.seed);
        message[48..56].copy_from_slice(&self.slot.to_le_bytes());
        message[56..64].copy_from_slice(&self.amount.to_le_bytes());
        message[64] = self.threshold;
        message[65] = self.bump;
        message
    }
}

account!(DiceAccount, Bet);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bet() -> Bet {
        Bet {
            player: Pubkey::new_unique(),
            seed: 12345u128.to_le_bytes(),
            slot: 42,
            amount: 10_000_000,
            threshold: 96,
            bump: 254,
            _padding: [0; 6],
        }
    }

    #[test]
    fn test_message_layout() {
        let bet = sample_bet();
        let message = bet.message();
        assert_eq!(message.len(), BET_MESSAGE_LEN);
        assert_eq!(&message[..32], bet.player.as_ref());
        assert_eq!(&message[32..48], &12345u128.to_le_bytes()[..]);
        assert_eq!(&message[48..56], &42u64.to_le_bytes()[..]);
        assert_eq!(&message[56..64], &10_000_000u64.to_le_bytes()[..]);
        assert_eq!(message[64], 96);
        assert_eq!(message[65], 254);
    }

    #[test]
    fn test_message_binds_every_field() {
        let base = sample_bet();

        let mut changed = base;
        changed.player = Pubkey::new_unique();
        assert_ne!(base.message(), changed.message());

        let mut changed = base;
        changed.seed = 12346u128.to_le_bytes();
        assert_ne!(base.message(), changed.message());

        let mut changed = base;
        changed.slot += 1;
        assert_ne!(base.message(), changed.message());

        let mut changed = base;
        changed.amount += 1;
        assert_ne!(base.message(), changed.message());

        let mut changed = base;
        changed.threshold -= 1;
        assert_ne!(base.message(), changed.message());

        let mut changed = base;
        changed.bump -= 1;
        assert_ne!(base.message(), changed.message());
    }
}
