//! Ports layer (Hexagonal Architecture)
//!
//! - inbound: what callers drive (`GenesisGenerator`)
//! - outbound: what the bootstrapper depends on (identity verification,
//!   genesis assembly)

mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
