use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::constants::SEED_PROGRAM_CONFIG;
use crate::errors::LeagueError;
use crate::events::CollateralMintUpdated;
use crate::state::ProgramConfig;

#[derive(Accounts)]
pub struct UpdateCollateralMint<'info> {
    #[account(
        mut,
        seeds = [SEED_PROGRAM_CONFIG],
        bump = program_config.bump,
        constraint = program_config.admin == admin.key() @ LeagueError::Unauthorized
    )]
    pub program_config: Box<Account<'info, ProgramConfig>>,
    pub admin: Signer<'info>,
    pub new_collateral_mint: Account<'info, Mint>,
}

/// Only leagues created afterwards use the new mint; existing vaults keep theirs.
pub fn process_update_collateral_mint(ctx: Context<UpdateCollateralMint>) -> Result<()> {
    let mint = ctx.accounts.new_collateral_mint.key();
    ctx.accounts.program_config.collateral_mint = mint;
    emit!(CollateralMintUpdated {
        collateral_mint: mint,
    });
    msg!("Collateral mint updated to {}", mint);
    Ok(())
}
