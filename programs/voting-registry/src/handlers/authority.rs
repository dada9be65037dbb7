use anchor_lang::prelude::*;

use crate::{Initialize, TransferOwnership};

/// Creates the registry and makes the signer its authority.
///
/// The registry lives at a fixed PDA, so this can only ever succeed once.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.payer.key();
    let event = ctx
        .accounts
        .registry
        .initialize(authority, ctx.bumps.registry)?;

    msg!("Registry initialized with authority {}", authority);
    emit!(event);

    Ok(())
}

/// Hands the authority role to `new_authority`. Only the current authority can call this.
pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_authority: Pubkey) -> Result<()> {
    let event = ctx
        .accounts
        .registry
        .transfer_ownership(&ctx.accounts.authority.key(), new_authority)?;

    msg!(
        "Authority transferred from {} to {}",
        event.previous_authority,
        event.new_authority
    );
    emit!(event);

    Ok(())
}
