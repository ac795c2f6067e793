//! Raw cell normalization
//!
//! Column resolution ([`alias`]) and value conversion ([`scalars`]).

pub mod alias;
pub mod scalars;

pub use alias::{pick_by_aliases, AliasResolver};
pub use scalars::*;
