//! Section builders
//!
//! Each builder turns profile settings plus already-verified organizations
//! into the ordered fragment list of one logical section. Builders never
//! touch identity material on disk and never merge their own output; merging
//! is left to the composer.

mod application;
mod channel;
mod consortiums;
mod orderer;

pub use application::build_application;
pub use channel::build_channel;
pub use consortiums::build_consortiums;
pub use orderer::{build_orderer, format_batch_timeout};

use std::fmt;

/// Logical sections of a bootstrap profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Channel-wide values and root policies
    Channel,
    /// Ordering service
    Orderer,
    /// Application organizations
    Application,
    /// Consortium definitions
    Consortiums,
}

impl Section {
    /// Every section, in composition order
    pub const ALL: [Section; 4] = [
        Section::Channel,
        Section::Orderer,
        Section::Application,
        Section::Consortiums,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Channel => f.write_str("channel"),
            Section::Orderer => f.write_str("orderer"),
            Section::Application => f.write_str("application"),
            Section::Consortiums => f.write_str("consortiums"),
        }
    }
}
