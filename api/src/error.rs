use steel::*;

/// Dice program error codes
/// Range 1000-1999: Game errors
/// Range 2000-2999: Validation errors
/// Range 3000-3999: Authenticity errors
/// Range 4000-4999: System errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum DiceError {
    // Game Errors (1000-1999)
    #[error("Vault liquidity insufficient to cover the bet")]
    InsufficientLiquidity = 1001,

    // Validation Errors (2000-2999)
    #[error("Threshold out of range")]
    InvalidThreshold = 2001,

    #[error("Amount must be greater than zero")]
    InvalidAmount = 2002,

    #[error("Account does not match the stored identity")]
    InvalidAuthority = 2003,

    // Authenticity Errors (3000-3999)
    #[error("Instruction 0 is not an ed25519 program verification")]
    Ed25519Program = 3001,

    #[error("Ed25519 verification must name no accounts")]
    Ed25519Accounts = 3002,

    #[error("Malformed ed25519 verification data")]
    Ed25519Header = 3003,

    #[error("Expected exactly one ed25519 signature")]
    Ed25519DataLength = 3004,

    #[error("Attested signer does not match the house")]
    Ed25519Pubkey = 3005,

    #[error("Attested message does not match the bet record")]
    Ed25519Message = 3006,

    #[error("Attested signature does not match the resolve request")]
    Ed25519Signature = 3007,

    // System Errors (4000-4999)
    #[error("Arithmetic operation overflowed")]
    ArithmeticOverflow = 4001,
}

error!(DiceError);
