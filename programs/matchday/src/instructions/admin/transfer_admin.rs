use anchor_lang::prelude::*;
use crate::events::AdminTransferred;
use super::ConfigAdmin;

pub fn process_transfer_admin(ctx: Context<ConfigAdmin>, new_admin: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.program_config;
    let previous = config.admin;
    config.admin = new_admin;

    emit!(AdminTransferred {
        previous,
        new_admin,
    });
    msg!("Admin transferred from {} to {}", previous, new_admin);
    Ok(())
}
