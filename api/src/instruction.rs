use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum DiceInstruction {
    Initialize = 0,
    PlaceBet = 1,
    ResolveBet = 2,
    FundVault = 3,
    Withdraw = 4,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    /// The initial liquidity, in lamports, transferred from the house.
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PlaceBet {
    /// The player-chosen nonce, little-endian. One bet per (vault, seed).
    pub seed: [u8; 16],
    /// The winning threshold. The player wins when the roll is below it.
    pub threshold: u8,
    /// The staked amount in lamports.
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ResolveBet {
    /// The house's ed25519 signature over the bet's resolution message.
    pub signature: [u8; 64],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FundVault {
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Withdraw {
    pub amount: [u8; 8],
}

instruction!(DiceInstruction, Initialize);
instruction!(DiceInstruction, PlaceBet);
instruction!(DiceInstruction, ResolveBet);
instruction!(DiceInstruction, FundVault);
instruction!(DiceInstruction, Withdraw);
