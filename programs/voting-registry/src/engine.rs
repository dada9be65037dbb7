//! Vote acceptance rules.
//!
//! Checks run in a fixed order: registration, then double voting, then the
//! option id. Every check happens before the first write, so a rejected vote
//! leaves both records untouched.

use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{Registry, VoteOption, Voter, VotedEvent},
};

/// Applies one vote from `caller` for `option_id`.
///
/// `voter` is the caller's record, or `None` when the caller was never
/// registered. `option` is the record stored under `option_id`, or `None` when
/// no such account exists.
pub fn cast_vote(
    registry: &Registry,
    voter: Option<&mut Voter>,
    option: Option<&mut VoteOption>,
    caller: Pubkey,
    option_id: u32,
) -> Result<VotedEvent> {
    let voter = match voter {
        Some(voter) if voter.is_registered_voter(&caller) => voter,
        _ => return err!(ErrorCode::NotRegistered),
    };
    require!(!voter.has_voted, ErrorCode::AlreadyVoted);

    registry.require_option(option_id)?;
    let option = match option {
        Some(option) if option.id == option_id => option,
        _ => return err!(ErrorCode::InvalidOption),
    };
    let vote_count = option
        .vote_count
        .checked_add(1)
        .ok_or(error!(ErrorCode::CounterOverflow))?;

    option.vote_count = vote_count;
    voter.has_voted = true;

    Ok(VotedEvent {
        option_id,
        voter: caller,
    })
}
