mod fund_vault;
mod initialize;
mod place_bet;
mod resolve_bet;
mod utils;
mod verify;
mod withdraw;

use fund_vault::*;
use initialize::*;
use place_bet::*;
use resolve_bet::*;
use withdraw::*;

use dice_api::instruction::*;
use steel::*;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    let (ix, data) = parse_instruction(&dice_api::ID, program_id, data)?;

    match ix {
        DiceInstruction::Initialize => process_initialize(accounts, data)?,
        DiceInstruction::PlaceBet => process_place_bet(accounts, data)?,
        DiceInstruction::ResolveBet => process_resolve_bet(accounts, data)?,
        DiceInstruction::FundVault => process_fund_vault(accounts, data)?,
        DiceInstruction::Withdraw => process_withdraw(accounts, data)?,
    }

    Ok(())
}

entrypoint!(process_instruction);
