use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    handlers::records,
    state::{OptionView, VoteOption, Voter},
    GetOption, ReadRegistry, ReadVoter,
};

// Read-only instructions. Results travel back as return data; none of these
// write state or emit events.

pub fn get_option(ctx: Context<GetOption>, option_id: u32) -> Result<OptionView> {
    ctx.accounts.registry.require_option(option_id)?;

    let option = records::load::<VoteOption>(&ctx.accounts.option_account.to_account_info())?
        .filter(|option| option.id == option_id)
        .ok_or(error!(ErrorCode::InvalidOption))?;

    Ok(option.view())
}

pub fn options_count(ctx: Context<ReadRegistry>) -> Result<u32> {
    Ok(ctx.accounts.registry.options_count)
}

pub fn owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.authority)
}

pub fn is_authority(ctx: Context<ReadRegistry>, address: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.registry.is_authority(&address))
}

pub fn is_voter_registered(ctx: Context<ReadVoter>, voter_address: Pubkey) -> Result<bool> {
    let voter = records::load::<Voter>(&ctx.accounts.voter_account.to_account_info())?;
    Ok(voter.is_some_and(|voter| voter.is_registered_voter(&voter_address)))
}

pub fn has_voter_voted(ctx: Context<ReadVoter>, voter_address: Pubkey) -> Result<bool> {
    let voter = records::load::<Voter>(&ctx.accounts.voter_account.to_account_info())?;
    Ok(voter.is_some_and(|voter| voter.has_cast_vote(&voter_address)))
}
