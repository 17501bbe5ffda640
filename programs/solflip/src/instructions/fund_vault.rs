use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::errors::SolflipError;
use crate::events::VaultFunded;
use crate::state::Config;

#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.config_bump,
        has_one = house @ SolflipError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Config::VAULT_SEED, config.key().as_ref()],
        bump = config.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub house: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    require!(amount > 0, SolflipError::InvalidAmount);

    // Plain system transfer; the system program rejects it if the house
    // cannot cover the amount.
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.house.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    transfer(transfer_ctx, amount)?;

    emit!(VaultFunded {
        house: ctx.accounts.house.key(),
        amount,
        vault_balance: ctx.accounts.vault.lamports(),
    });

    Ok(())
}
