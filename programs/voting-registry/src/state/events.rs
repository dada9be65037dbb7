use anchor_lang::prelude::*;

/// Emitted on `initialize` (with the default pubkey as the previous authority)
/// and on every accepted `transfer_ownership`.
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct OwnershipTransferred {
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct OptionAdded {
    pub id: u32,
    pub name: String,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct VoterRegistered {
    pub voter_address: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct VotedEvent {
    pub option_id: u32,
    pub voter: Pubkey,
}
