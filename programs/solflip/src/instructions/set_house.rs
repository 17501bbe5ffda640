use anchor_lang::prelude::*;

use crate::errors::SolflipError;
use crate::events::HouseUpdated;
use crate::state::Config;

#[derive(Accounts)]
pub struct SetHouse<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.config_bump,
        has_one = house @ SolflipError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub house: Signer<'info>,

    /// CHECK: Incoming house authority; only its key is recorded.
    pub new_house: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<SetHouse>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous_house = config.house;
    config.house = ctx.accounts.new_house.key();

    emit!(HouseUpdated {
        previous_house,
        new_house: config.house,
    });

    Ok(())
}
