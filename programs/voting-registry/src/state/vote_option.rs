use anchor_lang::prelude::*;

use crate::{constants::MAX_OPTION_NAME_LEN, error::ErrorCode};

/// One entry of the option catalog. Created by `add_option`, never removed.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct VoteOption {
    /// PDA bump seed
    pub bump: u8,
    /// Sequential id, starting at 1
    pub id: u32,
    /// Number of accepted votes for this option
    pub vote_count: u64,
    /// Display name, trimmed
    #[max_len(MAX_OPTION_NAME_LEN)]
    pub name: String,
}

/// What `get_option` returns to clients.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub id: u32,
    pub name: String,
    pub vote_count: u64,
}

impl VoteOption {
    pub fn validate_name(name: &str) -> Result<&str> {
        let trimmed = name.trim();
        require!(!trimmed.is_empty(), ErrorCode::EmptyName);
        require!(trimmed.len() <= MAX_OPTION_NAME_LEN, ErrorCode::NameTooLong);
        Ok(trimmed)
    }

    pub fn view(&self) -> OptionView {
        OptionView {
            id: self.id,
            name: self.name.clone(),
            vote_count: self.vote_count,
        }
    }
}
