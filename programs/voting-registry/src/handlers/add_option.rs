use anchor_lang::prelude::*;

use crate::AddOption;

/// Appends a voting option under the next sequential id.
///
/// # Arguments
/// * `name` - Display name; surrounding whitespace is dropped, at most 64 bytes remain
pub fn add_option(ctx: Context<AddOption>, name: String) -> Result<()> {
    let accounts = ctx.accounts;
    let event = accounts.registry.add_option(
        &accounts.authority.key(),
        &mut accounts.option_account,
        &name,
        ctx.bumps.option_account,
    )?;

    msg!("Added option {} ({})", event.id, event.name);
    emit!(event);

    Ok(())
}
