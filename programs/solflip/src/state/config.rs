use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Authority allowed to fund the vault and withdraw proceeds.
    pub house: Pubkey,
    /// House edge in basis points (100 = 1%), taken out of winning payouts.
    pub fee_bps: u16,
    /// Running count of settled rounds.
    pub total_rounds: u64,
    /// Cumulative wagered volume in lamports.
    pub total_volume: u64,
    /// PDA bump seed for this account.
    pub config_bump: u8,
    /// PDA bump seed for the vault account.
    pub vault_bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";
    /// The vault is keyed under the config address, so both pool accounts
    /// derive from a single root.
    pub const VAULT_SEED: &'static [u8] = b"vault";
}
