// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::{OptionView, Registry, VoteOption, Voter};

declare_id!("Ae8WiPogLkzppmVKrMmznGyKFVbU3QBCTzYvGwYjTQ9U");

#[program]
pub mod voting_registry {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handlers::authority::initialize(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_authority: Pubkey) -> Result<()> {
        handlers::authority::transfer_ownership(ctx, new_authority)
    }

    pub fn add_option(ctx: Context<AddOption>, name: String) -> Result<()> {
        handlers::add_option::add_option(ctx, name)
    }

    pub fn register_voter(ctx: Context<RegisterVoter>, voter_address: Pubkey) -> Result<()> {
        handlers::register_voter::register_voter(ctx, voter_address)
    }

    pub fn vote(ctx: Context<Vote>, option_id: u32) -> Result<()> {
        handlers::vote::vote(ctx, option_id)
    }

    pub fn get_option(ctx: Context<GetOption>, option_id: u32) -> Result<OptionView> {
        handlers::views::get_option(ctx, option_id)
    }

    pub fn options_count(ctx: Context<ReadRegistry>) -> Result<u32> {
        handlers::views::options_count(ctx)
    }

    pub fn owner(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
        handlers::views::owner(ctx)
    }

    pub fn is_authority(ctx: Context<ReadRegistry>, address: Pubkey) -> Result<bool> {
        handlers::views::is_authority(ctx, address)
    }

    pub fn is_voter_registered(ctx: Context<ReadVoter>, voter_address: Pubkey) -> Result<bool> {
        handlers::views::is_voter_registered(ctx, voter_address)
    }

    pub fn has_voter_voted(ctx: Context<ReadVoter>, voter_address: Pubkey) -> Result<bool> {
        handlers::views::has_voter_voted(ctx, voter_address)
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, crate::program::VotingRegistry>,

    // Only the upgrade authority that deployed the program may claim the registry
    #[account(
        constraint = Registry::is_deployer(program_data.upgrade_authority_address, &payer.key())
            @ ErrorCode::NotAuthority
    )]
    pub program_data: Account<'info, ProgramData>,

    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
pub struct AddOption<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = authority,
        space = 8 + VoteOption::INIT_SPACE,
        seeds = [OPTION_SEED, registry.next_option_seed().as_ref()],
        bump,
    )]
    pub option_account: Account<'info, VoteOption>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(voter_address: Pubkey)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    // init_if_needed so a repeat registration reaches the handler and fails
    // with AlreadyRegistered
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Voter::INIT_SPACE,
        seeds = [VOTER_SEED, voter_address.as_ref()],
        bump,
    )]
    pub voter_account: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(option_id: u32)]
pub struct Vote<'info> {
    pub voter: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: the signer's voter record PDA. Empty when the signer was never
    /// registered; deserialized in the handler.
    #[account(
        mut,
        seeds = [VOTER_SEED, voter.key().as_ref()],
        bump,
    )]
    pub voter_account: UncheckedAccount<'info>,

    /// CHECK: option PDA for `option_id`. Empty when the id is out of range;
    /// deserialized in the handler.
    #[account(
        mut,
        seeds = [OPTION_SEED, option_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub option_account: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

#[derive(Accounts)]
#[instruction(option_id: u32)]
pub struct GetOption<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: option PDA for `option_id`, may be empty; deserialized in the handler.
    #[account(
        seeds = [OPTION_SEED, option_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub option_account: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(voter_address: Pubkey)]
pub struct ReadVoter<'info> {
    /// CHECK: voter record PDA for `voter_address`, may be empty; deserialized in the handler.
    #[account(
        seeds = [VOTER_SEED, voter_address.as_ref()],
        bump,
    )]
    pub voter_account: UncheckedAccount<'info>,
}
