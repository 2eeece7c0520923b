use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::constants::SEED_PROGRAM_CONFIG;
use crate::events::ConfigInitialized;
use crate::state::{ConfigParams, ProgramConfig};

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        seeds = [SEED_PROGRAM_CONFIG],
        bump,
        payer = admin,
        space = ProgramConfig::LEN
    )]
    pub program_config: Box<Account<'info, ProgramConfig>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// Mint entry fees are paid in (wSOL for the native currency).
    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn apply_init_config(
    config: &mut ProgramConfig,
    admin: Pubkey,
    collateral_mint: Pubkey,
    params: ConfigParams,
) -> Result<()> {
    config.apply_params(params)?;
    config.admin = admin;
    config.collateral_mint = collateral_mint;
    config.paused = false;
    config.league_count = 0;
    Ok(())
}

pub fn process_init_config(ctx: Context<InitConfig>, params: ConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.program_config;
    apply_init_config(
        config,
        ctx.accounts.admin.key(),
        ctx.accounts.collateral_mint.key(),
        params,
    )?;
    config.bump = ctx.bumps.program_config;

    emit!(ConfigInitialized {
        admin: config.admin,
        collateral_mint: config.collateral_mint,
        bounds: config.bounds,
    });
    msg!("Program config initialized, admin {}", config.admin);

    Ok(())
}
