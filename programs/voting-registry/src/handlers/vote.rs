use anchor_lang::prelude::*;

use crate::{
    engine,
    handlers::records,
    state::{VoteOption, Voter},
    Vote,
};

/// Casts the signer's single vote for `option_id`.
///
/// The voter and option accounts are taken unchecked so that an unregistered
/// signer or an unknown option surfaces as `NotRegistered` / `InvalidOption`
/// instead of an account deserialization failure.
pub fn vote(ctx: Context<Vote>, option_id: u32) -> Result<()> {
    let voter_info = ctx.accounts.voter_account.to_account_info();
    let option_info = ctx.accounts.option_account.to_account_info();

    let mut voter = records::load::<Voter>(&voter_info)?;
    let mut option = records::load::<VoteOption>(&option_info)?;

    let event = engine::cast_vote(
        &ctx.accounts.registry,
        voter.as_mut(),
        option.as_mut(),
        ctx.accounts.voter.key(),
        option_id,
    )?;

    // cast_vote only succeeds with both records present
    if let (Some(voter), Some(option)) = (&voter, &option) {
        records::store(&voter_info, voter)?;
        records::store(&option_info, option)?;
    }

    msg!("Vote from {} counted for option {}", event.voter, event.option_id);
    emit!(event);

    Ok(())
}
