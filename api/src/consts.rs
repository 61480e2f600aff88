/// The seed of the vault account PDA.
pub const VAULT: &[u8] = b"vault";

/// The seed of the bet account PDA.
pub const BET: &[u8] = b"bet";

/// The number of distinct roll outcomes. Rolls land in [0, ROLL_RANGE) and
/// the payout multiplier for threshold t is ROLL_RANGE / t.
pub const ROLL_RANGE: u64 = 100;

/// The lowest playable threshold.
pub const MIN_THRESHOLD: u8 = 1;

/// The highest playable threshold.
pub const MAX_THRESHOLD: u8 = 99;

/// The byte length of the resolution message the house signs:
/// player (32) + seed (16) + slot (8) + amount (8) + threshold (1) + bump (1).
pub const BET_MESSAGE_LEN: usize = 66;

/// The length of the ed25519 program's instruction header (count + padding).
pub const ED25519_HEADER_LEN: usize = 2;

/// The length of one ed25519 signature-offsets entry.
pub const ED25519_OFFSETS_LEN: usize = 14;
