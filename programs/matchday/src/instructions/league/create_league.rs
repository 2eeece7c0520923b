use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{
    MAX_LABEL_LEN, MAX_LEAGUE_ID_LEN, SEED_LEAGUE, SEED_LEAGUE_INDEX, SEED_PROGRAM_CONFIG,
    SEED_VAULT,
};
use crate::errors::LeagueError;
use crate::events::LeagueCreated;
use crate::fhe::{EncryptedValueService, SymbolicExecutor};
use crate::state::{League, LeagueBounds, LeagueIndex, LeagueStatus, MatchRound, ProgramConfig};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateLeagueParams {
    pub id: String,
    pub entry_fee: u64,
    pub duration: i64,
    pub labels: Vec<String>,
    pub home_teams: Vec<String>,
    pub away_teams: Vec<String>,
    pub goals_threshold: u8,
}

impl CreateLeagueParams {
    pub fn validate(&self, bounds: &LeagueBounds) -> Result<()> {
        let match_count = self.labels.len();
        require!(
            self.home_teams.len() == match_count && self.away_teams.len() == match_count,
            LeagueError::ArityMismatch
        );
        bounds.check(self.entry_fee, self.duration, match_count)?;
        require!(
            !self.id.is_empty() && self.id.len() <= MAX_LEAGUE_ID_LEN,
            LeagueError::InvalidParameters
        );
        let labels_fit = self
            .labels
            .iter()
            .chain(&self.home_teams)
            .chain(&self.away_teams)
            .all(|label| label.len() <= MAX_LABEL_LEN);
        require!(labels_fit, LeagueError::InvalidParameters);
        Ok(())
    }
}

#[derive(Accounts)]
#[instruction(params: CreateLeagueParams)]
pub struct CreateLeague<'info> {
    #[account(
        mut,
        seeds = [SEED_PROGRAM_CONFIG],
        bump = program_config.bump,
    )]
    pub program_config: Box<Account<'info, ProgramConfig>>,

    #[account(
        init,
        seeds = [SEED_LEAGUE_INDEX, program_config.league_count.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = LeagueIndex::LEN
    )]
    pub league_index: Box<Account<'info, LeagueIndex>>,

    // init_if_needed so a taken id reaches the handler and fails with AlreadyExists;
    // the fixed size keeps the re-derived space equal to the stored one
    #[account(
        init_if_needed,
        seeds = [SEED_LEAGUE, League::seed_for(&params.id).as_ref()],
        bump,
        payer = creator,
        space = League::LEN
    )]
    pub league: Box<Account<'info, League>>,

    #[account(
        init_if_needed,
        seeds = [SEED_VAULT, league.key().as_ref()],
        bump,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = league,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = program_config.collateral_mint)]
    pub collateral_mint: Account<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[allow(clippy::too_many_arguments)]
pub fn apply_create_league<F: EncryptedValueService>(
    fhe: &mut F,
    config: &mut ProgramConfig,
    index: &mut LeagueIndex,
    league_key: Pubkey,
    league: &mut League,
    creator: Pubkey,
    params: CreateLeagueParams,
    now: i64,
) -> Result<()> {
    config.ensure_not_paused()?;
    require!(!league.is_created(), LeagueError::AlreadyExists);
    params.validate(&config.bounds)?;

    let lock_time = now
        .checked_add(params.duration)
        .ok_or(LeagueError::MathOverflow)?;

    let zero = fhe.zero();
    let matches = params
        .labels
        .into_iter()
        .zip(params.home_teams)
        .zip(params.away_teams)
        .map(|((label, home), away)| MatchRound::new(label, home, away, zero))
        .collect();

    index.position = config.league_count;
    index.league_id = params.id.clone();
    index.league = league_key;
    config.league_count = config
        .league_count
        .checked_add(1)
        .ok_or(LeagueError::MathOverflow)?;

    league.id = params.id;
    league.creator = creator;
    league.collateral_mint = config.collateral_mint;
    league.entry_fee = params.entry_fee;
    league.created_at = now;
    league.lock_time = lock_time;
    league.prize_pool = 0;
    league.paid_out = 0;
    league.entry_count = 0;
    league.goals_threshold = params.goals_threshold;
    league.status = LeagueStatus::Open;
    league.settled_at = None;
    league.cancelled_at = None;
    league.total_score = None;
    league.matches = matches;

    Ok(())
}

pub fn process_create_league(mut ctx: Context<CreateLeague>, params: CreateLeagueParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut fhe = SymbolicExecutor::new(ctx.program_id, &ctx.accounts.program_config);

    let league_key = ctx.accounts.league.key();
    let accounts = &mut ctx.accounts;
    apply_create_league(
        &mut fhe,
        &mut accounts.program_config,
        &mut accounts.league_index,
        league_key,
        &mut accounts.league,
        accounts.creator.key(),
        params,
        now,
    )?;

    accounts.league_index.bump = ctx.bumps.league_index;
    let league = &mut accounts.league;
    league.vault = accounts.vault.key();
    league.bump = ctx.bumps.league;
    league.vault_bump = ctx.bumps.vault;

    emit!(LeagueCreated {
        league_id: league.id.clone(),
        creator: league.creator,
        entry_fee: league.entry_fee,
        lock_time: league.lock_time,
        match_count: league.matches.len() as u8,
    });
    msg!("League {} created, locks at {}", league.id, league.lock_time);

    Ok(())
}
