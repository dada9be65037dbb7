use anchor_lang::prelude::*;

use crate::RegisterVoter;

/// Makes `voter_address` eligible to cast one vote. Authority only.
pub fn register_voter(ctx: Context<RegisterVoter>, voter_address: Pubkey) -> Result<()> {
    ctx.accounts
        .registry
        .require_authority(&ctx.accounts.authority.key())?;

    let event = ctx
        .accounts
        .voter_account
        .register(voter_address, ctx.bumps.voter_account)?;

    msg!("Registered voter {}", voter_address);
    emit!(event);

    Ok(())
}
