use dice_api::prelude::*;
use solana_program::hash::hash;
use steel::*;

/// Derives the roll in [0, ROLL_RANGE) from a verified house signature:
/// the first two bytes of sha256(signature), little-endian, mod 100.
pub fn roll_from_signature(signature: &[u8; 64]) -> u8 {
    let digest = hash(signature).to_bytes();
    (u16::from_le_bytes([digest[0], digest[1]]) as u64 % ROLL_RANGE) as u8
}

/// Total payout (stake included) for a winning bet:
/// amount * ROLL_RANGE / threshold, truncating. The fractional lamport
/// stays with the house.
pub fn calculate_payout(amount: u64, threshold: u8) -> Result<u64, ProgramError> {
    let gross = (amount as u128)
        .checked_mul(ROLL_RANGE as u128)
        .ok_or(DiceError::ArithmeticOverflow)?
        .checked_div(threshold as u128)
        .ok_or(DiceError::ArithmeticOverflow)?;
    u64::try_from(gross).map_err(|_| DiceError::ArithmeticOverflow.into())
}

/// The vault's worst-case loss on a bet: the payout minus the stake the
/// player already escrowed.
pub fn net_exposure(payout: u64, amount: u64) -> Result<u64, ProgramError> {
    payout
        .checked_sub(amount)
        .ok_or(DiceError::ArithmeticOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_payout_reference_scenario() {
        // A 10_000_000 stake at threshold 96 pays 10_416_666 total
        // (1_000_000_000 / 96 truncated).
        let payout = calculate_payout(10_000_000, 96).unwrap();
        assert_eq!(payout, 10_416_666);
        assert_eq!(net_exposure(payout, 10_000_000).unwrap(), 416_666);
    }

    #[test]
    fn test_payout_truncation_boundary() {
        // 100 / 99 truncates to 1: a 1-lamport stake at threshold 99 pays
        // back exactly the stake, so the vault risks nothing.
        assert_eq!(calculate_payout(1, 99).unwrap(), 1);
        assert_eq!(net_exposure(1, 1).unwrap(), 0);
    }

    #[test]
    fn test_payout_longshot() {
        // Threshold 1 pays 100x.
        assert_eq!(calculate_payout(1_000, 1).unwrap(), 100_000);
    }

    #[test]
    fn test_payout_overflow() {
        // u64::MAX * 100 / 1 does not fit back into u64.
        assert!(calculate_payout(u64::MAX, 1).is_err());
    }

    #[test]
    fn test_payout_never_below_stake() {
        for threshold in 1..=99u8 {
            let payout = calculate_payout(12_345_678, threshold).unwrap();
            assert!(payout >= 12_345_678);
        }
    }

    #[test]
    fn test_roll_deterministic() {
        let signature = [7u8; 64];
        assert_eq!(
            roll_from_signature(&signature),
            roll_from_signature(&signature)
        );
    }

    #[test]
    fn test_roll_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let mut signature = [0u8; 64];
            rng.fill(&mut signature[..]);
            assert!(roll_from_signature(&signature) < ROLL_RANGE as u8);
        }
    }
}
