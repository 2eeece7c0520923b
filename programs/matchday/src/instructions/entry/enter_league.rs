use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{MAX_WEIGHT, SEED_ENTRY, SEED_LEAGUE, SEED_PROGRAM_CONFIG, SEED_VAULT};
use crate::errors::LeagueError;
use crate::events::EntryPlaced;
use crate::fhe::{EncryptedValueService, Handle, SymbolicExecutor};
use crate::state::{Entry, League, MarketCodes, ProgramConfig};

/// Picks plus the client-encrypted weight and its input proof.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct EntryParams {
    pub picks: MarketCodes,
    pub encrypted_weight: Handle,
    pub input_proof: Vec<u8>,
}

#[derive(Accounts)]
#[instruction(league_id: String)]
pub struct EnterLeague<'info> {
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

    // init_if_needed so a second entry reaches the handler and fails with DuplicateEntry
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

#[allow(clippy::too_many_arguments)]
pub fn apply_enter_league<F: EncryptedValueService>(
    fhe: &mut F,
    config: &ProgramConfig,
    league_key: Pubkey,
    league: &mut League,
    entry: &mut Entry,
    participant: Pubkey,
    params: EntryParams,
    paid_amount: u64,
    now: i64,
) -> Result<()> {
    config.ensure_not_paused()?;
    league.ensure_accepting_entries(now)?;
    params
        .picks
        .validate(league.matches.len(), LeagueError::InvalidPick)?;
    require!(paid_amount == league.entry_fee, LeagueError::WrongFee);
    require!(!entry.exists, LeagueError::DuplicateEntry);
    let submitted = fhe.verify_input(params.encrypted_weight, &params.input_proof, &participant)?;
    let weight = fhe.zero_above(submitted, MAX_WEIGHT);

    fhe.grant_access(weight, &participant);
    fhe.grant_access(weight, &league_key);
    league.commit_picks(fhe, &params.picks, weight)?;
    league.prize_pool = league
        .prize_pool
        .checked_add(paid_amount)
        .ok_or(LeagueError::MathOverflow)?;
    league.entry_count = league
        .entry_count
        .checked_add(1)
        .ok_or(LeagueError::MathOverflow)?;

    entry.league = league_key;
    entry.participant = participant;
    entry.exists = true;
    entry.claimed = false;
    entry.decryptable = true;
    entry.picks = params.picks;
    entry.weight = weight;
    entry.paid = paid_amount;
    entry.score = None;
    entry.payout = 0;
    entry.entered_at = now;
    entry.updated_at = now;

    Ok(())
}

pub fn process_enter_league(
    mut ctx: Context<EnterLeague>,
    _league_id: String,
    params: EntryParams,
    paid_amount: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut fhe = SymbolicExecutor::new(ctx.program_id, &ctx.accounts.program_config);
    let league_key = ctx.accounts.league.key();
    let participant = ctx.accounts.participant.key();

    let accounts = &mut ctx.accounts;
    apply_enter_league(
        &mut fhe,
        &accounts.program_config,
        league_key,
        &mut accounts.league,
        &mut accounts.entry,
        participant,
        params,
        paid_amount,
        now,
    )?;
    accounts.entry.bump = ctx.bumps.entry;

    if paid_amount > 0 {
        token::transfer(
            CpiContext::new(
                accounts.token_program.to_account_info(),
                Transfer {
                    from: accounts.participant_token_account.to_account_info(),
                    to: accounts.vault.to_account_info(),
                    authority: accounts.participant.to_account_info(),
                },
            ),
            paid_amount,
        )?;
    }

    emit!(EntryPlaced {
        league_id: accounts.league.id.clone(),
        participant,
        paid: paid_amount,
        prize_pool: accounts.league.prize_pool,
        timestamp: now,
    });
    msg!("Entry placed in {} by {}", accounts.league.id, participant);

    Ok(())
}
