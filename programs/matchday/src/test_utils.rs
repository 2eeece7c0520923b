use std::fmt::Debug;

use anchor_lang::error::Error;
use anchor_lang::Result;

use crate::errors::LeagueError;

#[track_caller]
pub fn assert_league_err<T: Debug>(result: Result<T>, expected: LeagueError) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(err, Error::from(expected)),
    }
}
