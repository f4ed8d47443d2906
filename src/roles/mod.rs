//! Secret role assignment.

pub mod assigner;

pub use assigner::{assign_roles, validate_counts, Roles};
