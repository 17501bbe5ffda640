use anchor_lang::prelude::*;

use crate::errors::SolflipError;
use crate::state::Config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = house,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Zero-space system account that custodies the pool's lamports.
    #[account(
        init_if_needed,
        payer = house,
        space = 0,
        seeds = [Config::VAULT_SEED, config.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub house: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, fee_bps: u16) -> Result<()> {
    require!(fee_bps <= 2500, SolflipError::InvalidFeeBps);

    let config = &mut ctx.accounts.config;

    // A live config always carries the house key; an unset key marks
    // first-time creation.
    require_keys_eq!(
        config.house,
        Pubkey::default(),
        SolflipError::AlreadyInitialized
    );

    config.house = ctx.accounts.house.key();
    config.fee_bps = fee_bps;
    config.total_rounds = 0;
    config.total_volume = 0;
    config.config_bump = ctx.bumps.config;
    config.vault_bump = ctx.bumps.vault;

    Ok(())
}
