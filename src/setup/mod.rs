//! Setup screen rules and state.
//!
//! - `SetupPolicy`: impostor bounds, clamping, add/start gating
//! - `SetupState`: participants, impostor count and topic being composed
//!
//! The free functions mirror `SetupPolicy` under the standard rules.

pub mod policy;
pub mod state;

pub use policy::{can_add, can_start, clamp, max_impostors, min_impostors, SetupPolicy, MIN_IMPOSTORS};
pub use state::SetupState;
