use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Caller is not the registry authority")]
    NotAuthority,
    #[msg("This voter is already registered")]
    AlreadyRegistered,
    #[msg("Caller is not registered to vote")]
    NotRegistered,
    #[msg("Caller has already cast a vote")]
    AlreadyVoted,
    #[msg("Invalid voting option")]
    InvalidOption,
    #[msg("The default pubkey cannot be used here")]
    InvalidAddress,
    #[msg("Option name cannot be blank")]
    EmptyName,
    #[msg("Option name is too long")]
    NameTooLong,
    #[msg("Counter overflow")]
    CounterOverflow,
}
