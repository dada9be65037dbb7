// PDA seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const OPTION_SEED: &[u8] = b"option";
pub const VOTER_SEED: &[u8] = b"voter";

/// Longest option name accepted, in bytes, after trimming.
pub const MAX_OPTION_NAME_LEN: usize = 64;
