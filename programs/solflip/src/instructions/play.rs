use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::errors::SolflipError;
use crate::events::RoundSettled;
use crate::settle::{self, MIN_WAGER_LAMPORTS};
use crate::state::{Config, PlayerState};

#[derive(Accounts)]
pub struct Play<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.config_bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Config::VAULT_SEED, config.key().as_ref()],
        bump = config.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerState::INIT_SPACE,
        seeds = [PlayerState::SEED, player.key().as_ref()],
        bump,
    )]
    pub player_state: Account<'info, PlayerState>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Play>, guess_heads: bool, wager: u64) -> Result<()> {
    require!(wager >= MIN_WAGER_LAMPORTS, SolflipError::WagerTooSmall);

    let payout = settle::win_payout(wager, ctx.accounts.config.fee_bps)?;

    // Solvency guard runs before the stake moves: the vault must be able to
    // honor the gross payout out of pre-round funds.
    require!(
        ctx.accounts.vault.lamports() >= payout.gross,
        SolflipError::VaultInsufficient
    );

    // Capture the stake.
    let stake_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.player.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
        },
    );
    transfer(stake_ctx, wager)?;

    let clock = Clock::get()?;
    let player_key = ctx.accounts.player.key();

    let state = &mut ctx.accounts.player_state;
    if state.owner == Pubkey::default() {
        state.owner = player_key;
        state.bump = ctx.bumps.player_state;
    }
    require_keys_eq!(
        state.owner,
        player_key,
        SolflipError::StateOwnershipMismatch
    );

    // Bump the nonce first so the outcome input is unique per round.
    state.nonce = state
        .nonce
        .checked_add(1)
        .ok_or(SolflipError::MathOverflow)?;
    let outcome_heads =
        settle::coin_outcome(&player_key, state.nonce, clock.slot, clock.unix_timestamp);
    let won = outcome_heads == guess_heads;

    state.played = state
        .played
        .checked_add(1)
        .ok_or(SolflipError::MathOverflow)?;
    if won {
        state.wins = state.wins.checked_add(1).ok_or(SolflipError::MathOverflow)?;
    } else {
        state.losses = state
            .losses
            .checked_add(1)
            .ok_or(SolflipError::MathOverflow)?;
    }
    state.last_guess_heads = guess_heads;
    state.last_outcome_heads = outcome_heads;
    state.updated_at = clock.unix_timestamp;

    let nonce = state.nonce;

    let config = &mut ctx.accounts.config;
    config.total_rounds = config
        .total_rounds
        .checked_add(1)
        .ok_or(SolflipError::MathOverflow)?;
    config.total_volume = config
        .total_volume
        .checked_add(wager)
        .ok_or(SolflipError::MathOverflow)?;

    if won {
        // Pay out from the vault, signed with the vault's own seeds.
        let config_key = config.key();
        let bump = [config.vault_bump];
        let signer_seeds: &[&[&[u8]]] = &[&[Config::VAULT_SEED, config_key.as_ref(), &bump]];
        let payout_ctx = CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.player.to_account_info(),
            },
            signer_seeds,
        );
        transfer(payout_ctx, payout.net)?;
    }

    emit!(RoundSettled {
        player: player_key,
        nonce,
        wager,
        guess_heads,
        outcome_heads,
        won,
        payout: if won { payout.net } else { 0 },
        fee: if won { payout.fee } else { 0 },
    });

    Ok(())
}
