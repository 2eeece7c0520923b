use anchor_lang::prelude::*;
use crate::events::ConfigUpdated;
use crate::state::ConfigParams;
use super::ConfigAdmin;

/// Replaces league bounds and signer sets. Leagues that already exist keep
/// the parameters they were created with.
pub fn process_update_config(ctx: Context<ConfigAdmin>, params: ConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.program_config;
    config.apply_params(params)?;

    emit!(ConfigUpdated {
        admin: config.admin,
        bounds: config.bounds,
        input_threshold: config.input_signers.threshold,
        kms_threshold: config.kms_signers.threshold,
    });
    Ok(())
}
