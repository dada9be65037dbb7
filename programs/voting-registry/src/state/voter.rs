use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::VoterRegistered};

/// Per-address voting record.
///
/// An address without a record is unregistered. Both flags only ever go from
/// `false` to `true`.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Voter {
    /// PDA bump seed
    pub bump: u8,
    /// The address this record belongs to
    pub voter: Pubkey,
    pub registered: bool,
    pub has_voted: bool,
}

impl Voter {
    /// Marks `voter_address` as eligible. `self` is either a fresh record or the
    /// existing one for that address.
    pub fn register(&mut self, voter_address: Pubkey, bump: u8) -> Result<VoterRegistered> {
        require_keys_neq!(voter_address, Pubkey::default(), ErrorCode::InvalidAddress);
        require!(!self.registered, ErrorCode::AlreadyRegistered);

        self.bump = bump;
        self.voter = voter_address;
        self.registered = true;
        self.has_voted = false;

        Ok(VoterRegistered { voter_address })
    }

    pub fn is_registered_voter(&self, address: &Pubkey) -> bool {
        self.registered && self.voter == *address
    }

    pub fn has_cast_vote(&self, address: &Pubkey) -> bool {
        self.has_voted && self.voter == *address
    }
}
