use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{SEED_ENTRY, SEED_LEAGUE, SEED_PROGRAM_CONFIG, SEED_VAULT};
use crate::errors::LeagueError;
use crate::events::PrizeClaimed;
use crate::fhe::{EncryptedValueService, SymbolicExecutor};
use crate::state::{Entry, League, ProgramConfig};
use crate::utils::{decode_words, prize_share};

/// Accounts for paying an entry out of the league vault.
#[derive(Accounts)]
#[instruction(league_id: String)]
pub struct ClaimFromVault<'info> {
    #[account(
        seeds = [SEED_PROGRAM_CONFIG],
        bump = program_config.bump,
    )]
    pub program_config: Box<Account<'info, ProgramConfig>>,

    #[account(
        mut,
        seeds = [SEED_LEAGUE, League::seed_for(&league_id).as_ref()],
        bump = league.bump,
    )]
    pub league: Box<Account<'info, League>>,

    #[account(
        mut,
        seeds = [SEED_VAULT, league.key().as_ref()],
        bump = league.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    // a missing entry reaches the handler and fails with NoExistingEntry
    #[account(
        init_if_needed,
        seeds = [SEED_ENTRY, league.key().as_ref(), participant.key().as_ref()],
        bump,
        payer = participant,
        space = Entry::space(league.matches.len())
    )]
    pub entry: Box<Account<'info, Entry>>,

    #[account(
        mut,
        token::mint = league.collateral_mint,
        token::authority = participant,
    )]
    pub participant_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimFromVault<'info> {
    /// Moves `amount` from the vault to the participant, signed by the league PDA.
    pub fn pay_out(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let league_seed = League::seed_for(&self.league.id);
        let seeds = &[
            SEED_LEAGUE,
            league_seed.as_ref(),
            &[self.league.bump],
        ];
        let signer = &[&seeds[..]];

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.participant_token_account.to_account_info(),
                    authority: self.league.to_account_info(),
                },
                signer,
            ),
            amount,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrizeAward {
    pub amount: u64,
    pub score: u64,
    pub total_score: u64,
}

/// Verifies the threshold decryption of `[entry score, league total]` and
/// records the prize. `clear_values` must be exactly those two words.
pub fn apply_claim_prize<F: EncryptedValueService>(
    fhe: &mut F,
    league: &mut League,
    entry: &mut Entry,
    clear_values: &[u8],
    decryption_signatures: &[u8],
) -> Result<PrizeAward> {
    league.ensure_settled()?;
    entry.ensure_exists()?;
    entry.ensure_unclaimed()?;
    let score_handle = entry.score.ok_or(LeagueError::NotScored)?;
    let total_handle = league.total_score.ok_or(LeagueError::NotSettled)?;

    let [score, total_score] = decode_words::<2>(clear_values)?;
    fhe.verify_decryption_proof(
        &[score_handle, total_handle],
        clear_values,
        decryption_signatures,
    )?;

    let amount = prize_share(league.prize_pool, league.paid_out, entry.paid, score, total_score)?;

    entry.claimed = true;
    entry.payout = amount;
    league.paid_out = league
        .paid_out
        .checked_add(amount)
        .ok_or(LeagueError::MathOverflow)?;

    Ok(PrizeAward {
        amount,
        score,
        total_score,
    })
}

pub fn process_claim_prize(
    mut ctx: Context<ClaimFromVault>,
    _league_id: String,
    clear_values: Vec<u8>,
    decryption_signatures: Vec<u8>,
) -> Result<()> {
    let mut fhe = SymbolicExecutor::new(ctx.program_id, &ctx.accounts.program_config);
    let accounts = &mut ctx.accounts;
    let award = apply_claim_prize(
        &mut fhe,
        &mut accounts.league,
        &mut accounts.entry,
        &clear_values,
        &decryption_signatures,
    )?;

    accounts.pay_out(award.amount)?;

    emit!(PrizeClaimed {
        league_id: accounts.league.id.clone(),
        participant: accounts.participant.key(),
        amount: award.amount,
        score: award.score,
        total_score: award.total_score,
    });
    msg!("Prize of {} paid from {}", award.amount, accounts.league.id);

    Ok(())
}
