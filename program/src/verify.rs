use dice_api::prelude::*;
use solana_program::ed25519_program;
use solana_program::log::sol_log;
use solana_program::sysvar::instructions::load_instruction_at_checked;
use steel::*;

/// A parsed ed25519 attestation: the triple the runtime has already
/// verified cryptographically by the time this program executes.
pub struct Attestation<'a> {
    pub signer: &'a [u8],
    pub message: &'a [u8],
    pub signature: &'a [u8],
}

/// Parses the data of an ed25519 program instruction carrying exactly one
/// self-contained signature entry (offsets referencing its own data).
pub fn parse_ed25519_ix_data(data: &[u8]) -> Result<Attestation<'_>, ProgramError> {
    let header = data
        .get(..ED25519_HEADER_LEN)
        .ok_or(DiceError::Ed25519Header)?;
    if header[0] != 1 {
        return Err(DiceError::Ed25519DataLength.into());
    }
    if header[1] != 0 {
        return Err(DiceError::Ed25519Header.into());
    }

    let offsets = Ed25519SignatureOffsets::try_from_bytes(
        data.get(ED25519_HEADER_LEN..ED25519_HEADER_LEN + ED25519_OFFSETS_LEN)
            .ok_or(DiceError::Ed25519Header)?,
    )?;

    // All offsets must point into this instruction's own data.
    if offsets.signature_instruction_index != u16::MAX
        || offsets.public_key_instruction_index != u16::MAX
        || offsets.message_instruction_index != u16::MAX
    {
        return Err(DiceError::Ed25519Header.into());
    }

    let signer = data
        .get(offsets.public_key_offset as usize..offsets.public_key_offset as usize + 32)
        .ok_or(DiceError::Ed25519Header)?;
    let signature = data
        .get(offsets.signature_offset as usize..offsets.signature_offset as usize + 64)
        .ok_or(DiceError::Ed25519Header)?;
    let message = data
        .get(
            offsets.message_data_offset as usize
                ..offsets.message_data_offset as usize + offsets.message_data_size as usize,
        )
        .ok_or(DiceError::Ed25519Header)?;

    Ok(Attestation {
        signer,
        message,
        signature,
    })
}

/// Checks that instruction 0 of the current transaction is an ed25519
/// verification of `signature` by `house` over exactly `message`.
///
/// The runtime rejects the whole transaction if the ed25519 instruction
/// itself fails, so matching the attested bytes is sufficient here.
pub fn verify_house_attestation(
    instructions_info: &AccountInfo<'_>,
    house: &Pubkey,
    message: &[u8],
    signature: &[u8; 64],
) -> ProgramResult {
    let ix = load_instruction_at_checked(0, instructions_info)
        .map_err(|_| DiceError::Ed25519Program)?;

    if ix.program_id != ed25519_program::ID {
        sol_log("Instruction 0 is not an ed25519 verification");
        return Err(DiceError::Ed25519Program.into());
    }
    if !ix.accounts.is_empty() {
        return Err(DiceError::Ed25519Accounts.into());
    }

    let attestation = parse_ed25519_ix_data(&ix.data)?;
    if attestation.signer != house.as_ref() {
        sol_log("Attested signer is not the house");
        return Err(DiceError::Ed25519Pubkey.into());
    }
    if attestation.message != message {
        sol_log("Attested message does not match the bet record");
        return Err(DiceError::Ed25519Message.into());
    }
    if attestation.signature != signature.as_ref() {
        sol_log("Attested signature does not match the resolve request");
        return Err(DiceError::Ed25519Signature.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_api::sdk::ed25519_verify;

    fn sample() -> (Pubkey, [u8; 66], [u8; 64]) {
        (Pubkey::new_unique(), [3u8; 66], [9u8; 64])
    }

    #[test]
    fn test_parse_matches_builder() {
        let (house, message, signature) = sample();
        let ix = ed25519_verify(house, &message, signature);
        assert_eq!(ix.program_id, ed25519_program::ID);
        assert!(ix.accounts.is_empty());

        let attestation = parse_ed25519_ix_data(&ix.data).unwrap();
        assert_eq!(attestation.signer, house.as_ref());
        assert_eq!(attestation.message, &message[..]);
        assert_eq!(attestation.signature, &signature[..]);
    }

    #[test]
    fn test_parse_rejects_multiple_signatures() {
        let (house, message, signature) = sample();
        let mut ix = ed25519_verify(house, &message, signature);
        ix.data[0] = 2;
        assert!(parse_ed25519_ix_data(&ix.data).is_err());
    }

    #[test]
    fn test_parse_rejects_cross_instruction_offsets() {
        let (house, message, signature) = sample();
        let mut ix = ed25519_verify(house, &message, signature);
        // Point the message at another instruction (index 0 instead of MAX).
        ix.data[14] = 0;
        ix.data[15] = 0;
        assert!(parse_ed25519_ix_data(&ix.data).is_err());
    }

    #[test]
    fn test_parse_rejects_truncated_data() {
        let (house, message, signature) = sample();
        let ix = ed25519_verify(house, &message, signature);
        // Cut off mid-signature: the offsets point past the end.
        assert!(parse_ed25519_ix_data(&ix.data[..60]).is_err());
    }
}
