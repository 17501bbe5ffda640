use anchor_lang::prelude::*;

#[event]
pub struct VaultFunded {
    pub house: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct RoundSettled {
    pub player: Pubkey,
    pub nonce: u64,
    pub wager: u64,
    pub guess_heads: bool,
    pub outcome_heads: bool,
    pub won: bool,
    /// Net lamports paid to the player (0 on a loss).
    pub payout: u64,
    /// House edge retained in the vault (0 on a loss).
    pub fee: u64,
}

#[event]
pub struct VaultWithdrawn {
    pub house: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct HouseUpdated {
    pub previous_house: Pubkey,
    pub new_house: Pubkey,
}
