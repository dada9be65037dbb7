pub mod authority;
pub use authority::*;

pub mod add_option;
pub use add_option::*;

pub mod register_voter;
pub use register_voter::*;

pub mod vote;
pub use vote::*;

pub mod views;
pub use views::*;

mod records;
