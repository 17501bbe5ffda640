use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::errors::SolflipError;
use crate::events::VaultWithdrawn;
use crate::state::Config;

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, SolflipError::InvalidAmount);

    // The vault account must stay rent-exempt after the withdrawal.
    let rent_floor = Rent::get()?.minimum_balance(0);
    let remaining = ctx
        .accounts
        .vault
        .lamports()
        .checked_sub(amount)
        .ok_or(SolflipError::VaultInsufficient)?;
    require!(remaining >= rent_floor, SolflipError::VaultInsufficient);

    let config_key = ctx.accounts.config.key();
    let bump = [ctx.accounts.config.vault_bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Config::VAULT_SEED, config_key.as_ref(), &bump]];
    let withdraw_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.house.to_account_info(),
        },
        signer_seeds,
    );
    transfer(withdraw_ctx, amount)?;

    emit!(VaultWithdrawn {
        house: ctx.accounts.house.key(),
        amount,
        vault_balance: ctx.accounts.vault.lamports(),
    });

    Ok(())
}
