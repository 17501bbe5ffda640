use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct PlayerState {
    /// Wallet this record belongs to.
    pub owner: Pubkey,
    /// Total rounds resolved for this player.
    pub played: u64,
    /// Total winning rounds.
    pub wins: u64,
    /// Total losing rounds.
    pub losses: u64,
    /// Monotonic round counter mixed into outcome derivation.
    pub nonce: u64,
    /// Guess from the most recent round.
    pub last_guess_heads: bool,
    /// Outcome of the most recent round.
    pub last_outcome_heads: bool,
    /// Unix timestamp of the most recent round.
    pub updated_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl PlayerState {
    pub const SEED: &'static [u8] = b"state";
}
