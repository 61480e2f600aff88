//! TypeScript bindings generation for frontend types.
//!
//! This module exports Rust types to TypeScript using ts-rs.
//! Enable with the `ts-bindings` feature flag.

// Re-export types with TS derive when feature is enabled
#[cfg(feature = "ts-bindings")]
mod ts_types {
    use ts_rs::TS;

    /// TypeScript export for the Vault state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dice/src/generated/")]
    #[allow(dead_code)]
    pub struct VaultTS {
        /// The house identity this vault belongs to
        pub house: String, // Pubkey as string
        /// Tracked liquidity in lamports
        pub balance: u64,
        /// Net exposure reserved for pending bets
        pub reserved: u64,
        /// Total lamports staked against this vault
        pub total_wagered: u64,
        /// Total lamports paid out on winning bets
        pub total_payouts: u64,
        /// Total lamports kept from losing stakes
        pub total_collected: u64,
        /// The derivation bump of this vault's address
        pub bump: u8,
    }

    /// TypeScript export for the Bet state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dice/src/generated/")]
    #[allow(dead_code)]
    pub struct BetTS {
        /// The player who staked this bet
        pub player: String, // Pubkey as string
        /// The player-chosen nonce as a decimal string (u128)
        pub seed: String,
        /// The slot at which the bet was placed
        pub slot: u64,
        /// The staked amount in lamports
        pub amount: u64,
        /// The winning threshold (1-99)
        pub threshold: u8,
        /// The derivation bump of this bet's address
        pub bump: u8,
    }
}

#[cfg(feature = "ts-bindings")]
#[cfg(test)]
mod tests {
    use super::ts_types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // This test generates the TypeScript bindings when run with --features ts-bindings
        VaultTS::export().expect("Failed to export VaultTS");
        BetTS::export().expect("Failed to export BetTS");
    }
}
