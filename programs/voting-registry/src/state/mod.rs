pub mod events;
pub mod registry;
pub mod vote_option;
pub mod voter;

pub use events::*;
pub use registry::*;
pub use vote_option::*;
pub use voter::*;

#[cfg(test)]
pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        other => panic!("expected an anchor error, got {other:?}"),
    }
}
