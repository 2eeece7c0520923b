use anchor_lang::prelude::*;
use crate::constants::SEED_PROGRAM_CONFIG;
use crate::errors::LeagueError;
use crate::events::PauseToggled;
use crate::state::ProgramConfig;

/// Accounts for instructions only the program admin may call.
#[derive(Accounts)]
pub struct ConfigAdmin<'info> {
    #[account(
        mut,
        seeds = [SEED_PROGRAM_CONFIG],
        bump = program_config.bump,
        constraint = program_config.admin == admin.key() @ LeagueError::Unauthorized
    )]
    pub program_config: Box<Account<'info, ProgramConfig>>,
    pub admin: Signer<'info>,
}

pub fn process_set_paused(ctx: Context<ConfigAdmin>, paused: bool) -> Result<()> {
    ctx.accounts.program_config.paused = paused;
    emit!(PauseToggled { paused });
    msg!("Program paused: {}", paused);
    Ok(())
}
