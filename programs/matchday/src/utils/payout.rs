use anchor_lang::prelude::*;

use crate::errors::LeagueError;

/// Prize owed to an entry scoring `score` out of the league's `total`.
///
/// Shares are `floor(prize_pool * score / total)` so the sum over all entries
/// never exceeds the pool. When nobody scored (`total == 0`) each entrant gets
/// back what they paid. The result is capped at what is left in the pool.
pub fn prize_share(
    prize_pool: u64,
    paid_out: u64,
    paid: u64,
    score: u64,
    total: u64,
) -> Result<u64> {
    require!(score <= total, LeagueError::InvalidProof);

    let share = if total == 0 {
        paid
    } else {
        let raw = (prize_pool as u128)
            .checked_mul(score as u128)
            .ok_or(LeagueError::MathOverflow)?
            / (total as u128);
        u64::try_from(raw).map_err(|_| error!(LeagueError::MathOverflow))?
    };

    let remaining = prize_pool
        .checked_sub(paid_out)
        .ok_or(LeagueError::MathOverflow)?;
    Ok(share.min(remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_league_err;

    #[test]
    fn proportional_share_rounds_down() {
        // 100 * 50 / 180 = 27.7
        assert_eq!(prize_share(100, 0, 10, 50, 180).unwrap(), 27);
        assert_eq!(prize_share(100, 0, 10, 180, 180).unwrap(), 100);
        assert_eq!(prize_share(100, 0, 10, 0, 180).unwrap(), 0);
    }

    #[test]
    fn shares_never_exceed_pool() {
        let pool = 30_000_000;
        let scores = [50u64, 60, 70];
        let total: u64 = scores.iter().sum();
        let mut paid_out = 0u64;
        for score in scores {
            paid_out += prize_share(pool, paid_out, 10_000_000, score, total).unwrap();
        }
        assert!(paid_out <= pool);
        assert!(pool - paid_out < scores.len() as u64);
    }

    #[test]
    fn zero_total_refunds_entry_fee() {
        assert_eq!(prize_share(30, 0, 10, 0, 0).unwrap(), 10);
        assert_eq!(prize_share(30, 25, 10, 0, 0).unwrap(), 5);
    }

    #[test]
    fn score_above_total_is_invalid() {
        assert_league_err(prize_share(100, 0, 10, 5, 4), LeagueError::InvalidProof);
    }

    #[test]
    fn large_values_do_not_overflow() {
        assert_eq!(
            prize_share(u64::MAX, 0, 1, u64::MAX - 1, u64::MAX).unwrap(),
            u64::MAX - 1
        );
    }
}
