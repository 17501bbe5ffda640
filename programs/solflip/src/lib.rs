use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod settle;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod solflip {
    use super::*;

    /// One-time pool initialization: creates the config and vault PDAs.
    pub fn initialize(ctx: Context<Initialize>, fee_bps: u16) -> Result<()> {
        instructions::initialize::handler(ctx, fee_bps)
    }

    /// House tops up the vault that bankrolls payouts.
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        instructions::fund_vault::handler(ctx, amount)
    }

    /// Wager on a coin flip; a win pays double the wager minus the house edge.
    pub fn play(ctx: Context<Play>, guess_heads: bool, wager: u64) -> Result<()> {
        instructions::play::handler(ctx, guess_heads, wager)
    }

    /// House withdraws accumulated proceeds from the vault.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Hand the house authority to a new key.
    pub fn set_house(ctx: Context<SetHouse>) -> Result<()> {
        instructions::set_house::handler(ctx)
    }
}
