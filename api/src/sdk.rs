use solana_program::ed25519_program;
use solana_program::sysvar;
use steel::*;

use crate::consts::*;
use crate::instruction::*;
use crate::state::{bet_pda, vault_pda};

/// Build an Initialize instruction: creates the house vault and seeds it
/// with `amount` lamports of liquidity.
pub fn initialize(house: Pubkey, amount: u64) -> Instruction {
    let vault = vault_pda(house).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(house, true),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Initialize {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a PlaceBet instruction: escrows `amount` lamports from the player
/// against the house's vault.
pub fn place_bet(
    player: Pubkey,
    house: Pubkey,
    seed: u128,
    threshold: u8,
    amount: u64,
) -> Instruction {
    let vault = vault_pda(house).0;
    let bet = bet_pda(vault, seed).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(player, true),
            AccountMeta::new_readonly(house, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(bet, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: PlaceBet {
            seed: seed.to_le_bytes(),
            threshold,
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a ResolveBet instruction. The transaction must carry, at index 0,
/// the ed25519 verification built by [`ed25519_verify`] over the bet's
/// resolution message; the house does not sign the resolve itself.
pub fn resolve_bet(house: Pubkey, player: Pubkey, seed: u128, signature: [u8; 64]) -> Instruction {
    let vault = vault_pda(house).0;
    let bet = bet_pda(vault, seed).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new_readonly(house, false),
            AccountMeta::new(player, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(bet, false),
            AccountMeta::new_readonly(sysvar::instructions::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: ResolveBet { signature }.to_bytes(),
    }
}

/// Build a FundVault instruction: anyone may top up the house's liquidity.
pub fn fund_vault(funder: Pubkey, house: Pubkey, amount: u64) -> Instruction {
    let vault = vault_pda(house).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(funder, true),
            AccountMeta::new_readonly(house, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: FundVault {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Build a Withdraw instruction: the house reclaims unreserved liquidity.
pub fn withdraw(house: Pubkey, amount: u64) -> Instruction {
    let vault = vault_pda(house).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(house, true),
            AccountMeta::new(vault, false),
        ],
        data: Withdraw {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// One signature-offsets entry of an ed25519 program instruction.
/// All seven fields are little-endian u16; an instruction index of
/// u16::MAX refers to the carrying instruction itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ed25519SignatureOffsets {
    pub signature_offset: u16,
    pub signature_instruction_index: u16,
    pub public_key_offset: u16,
    pub public_key_instruction_index: u16,
    pub message_data_offset: u16,
    pub message_data_size: u16,
    pub message_instruction_index: u16,
}

impl Ed25519SignatureOffsets {
    pub fn to_bytes(&self) -> [u8; ED25519_OFFSETS_LEN] {
        let mut bytes = [0u8; ED25519_OFFSETS_LEN];
        bytes[0..2].copy_from_slice(&self.signature_offset.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.signature_instruction_index.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.public_key_offset.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.public_key_instruction_index.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.message_data_offset.to_le_bytes());
        bytes[10..12].copy_from_slice(&self.message_data_size.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.message_instruction_index.to_le_bytes());
        bytes
    }

    pub fn try_from_bytes(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != ED25519_OFFSETS_LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let u16_at = |i: usize| u16::from_le_bytes([data[i], data[i + 1]]);
        Ok(Self {
            signature_offset: u16_at(0),
            signature_instruction_index: u16_at(2),
            public_key_offset: u16_at(4),
            public_key_instruction_index: u16_at(6),
            message_data_offset: u16_at(8),
            message_data_size: u16_at(10),
            message_instruction_index: u16_at(12),
        })
    }
}

/// Build the ed25519 program instruction attesting that `signer` signed
/// `message` with `signature`. The entry is self-contained: pubkey,
/// signature and message live in this instruction's own data and the
/// offsets reference it via u16::MAX.
pub fn ed25519_verify(signer: Pubkey, message: &[u8], signature: [u8; 64]) -> Instruction {
    let public_key_offset = (ED25519_HEADER_LEN + ED25519_OFFSETS_LEN) as u16;
    let signature_offset = public_key_offset + 32;
    let message_data_offset = signature_offset + 64;

    let offsets = Ed25519SignatureOffsets {
        signature_offset,
        signature_instruction_index: u16::MAX,
        public_key_offset,
        public_key_instruction_index: u16::MAX,
        message_data_offset,
        message_data_size: message.len() as u16,
        message_instruction_index: u16::MAX,
    };

    let mut data = Vec::with_capacity(message_data_offset as usize + message.len());
    data.push(1); // one signature
    data.push(0); // padding
    data.extend_from_slice(&offsets.to_bytes());
    data.extend_from_slice(signer.as_ref());
    data.extend_from_slice(&signature);
    data.extend_from_slice(message);

    Instruction {
        program_id: ed25519_program::ID,
        accounts: vec![],
        data,
    }
}
