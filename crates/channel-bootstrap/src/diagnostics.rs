//! Diagnostics hooks for bootstrap operations
//!
//! The bootstrapper never installs or reaches for a global logger. It reports
//! through an injected [`Diagnostics`] capability instead:
//!
//! - [`TracingDiagnostics`]: emits `tracing` events (default)
//! - [`NoOpDiagnostics`]: discards everything
//! - [`DiagnosticsRecorder`]: counts events, for tests and tooling
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use channel_bootstrap::diagnostics::DiagnosticsRecorder;
//!
//! let recorder = Arc::new(DiagnosticsRecorder::new());
//! let deps = BootstrapDependencies::new(verifier, assembler).with_diagnostics(recorder.clone());
//! let bootstrapper = Bootstrapper::construct(&profile, deps)?;
//!
//! assert_eq!(recorder.snapshot().organizations_verified, 3);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::domain::Section;

/// Sink for bootstrap events
pub trait Diagnostics: Send + Sync {
    /// An organization's identity passed verification
    fn organization_verified(&self, section: Section, organization: &str, msp_id: &str);

    /// A section produced `fragments` fragments
    fn section_built(&self, section: Section, fragments: usize);

    /// A section is absent from the profile
    fn section_skipped(&self, section: Section);

    /// A genesis block was assembled
    fn genesis_assembled(&self, channel_id: &str, block_hash: &str);

    /// An operation failed; `reason` is the rendered error
    fn construction_failed(&self, reason: &str);
}

/// Emits every event through `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn organization_verified(&self, section: Section, organization: &str, msp_id: &str) {
        debug!(
            %section,
            organization,
            msp_id,
            "[channel-bootstrap] Organization identity verified"
        );
    }

    fn section_built(&self, section: Section, fragments: usize) {
        debug!(%section, fragments, "[channel-bootstrap] Section built");
    }

    fn section_skipped(&self, section: Section) {
        debug!(%section, "[channel-bootstrap] Section not configured, skipping");
    }

    fn genesis_assembled(&self, channel_id: &str, block_hash: &str) {
        info!(
            channel_id,
            block_hash, "[channel-bootstrap] Genesis block assembled"
        );
    }

    fn construction_failed(&self, reason: &str) {
        warn!(reason, "[channel-bootstrap] Bootstrap failed");
    }
}

/// Discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDiagnostics;

impl Diagnostics for NoOpDiagnostics {
    fn organization_verified(&self, _: Section, _: &str, _: &str) {}
    fn section_built(&self, _: Section, _: usize) {}
    fn section_skipped(&self, _: Section) {}
    fn genesis_assembled(&self, _: &str, _: &str) {}
    fn construction_failed(&self, _: &str) {}
}

/// Counts events
///
/// Thread-safe; the bootstrapper may be shared across threads.
#[derive(Debug, Default)]
pub struct DiagnosticsRecorder {
    /// Organizations verified
    pub organizations_verified: AtomicU64,
    /// Sections built
    pub sections_built: AtomicU64,
    /// Sections skipped
    pub sections_skipped: AtomicU64,
    /// Fragments produced across all sections
    pub fragments_built: AtomicU64,
    /// Genesis blocks assembled
    pub genesis_blocks: AtomicU64,
    /// Failed operations
    pub failures: AtomicU64,
}

impl DiagnosticsRecorder {
    /// Create a new recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current counter snapshot
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            organizations_verified: self.organizations_verified.load(Ordering::Relaxed),
            sections_built: self.sections_built.load(Ordering::Relaxed),
            sections_skipped: self.sections_skipped.load(Ordering::Relaxed),
            fragments_built: self.fragments_built.load(Ordering::Relaxed),
            genesis_blocks: self.genesis_blocks.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.organizations_verified.store(0, Ordering::Relaxed);
        self.sections_built.store(0, Ordering::Relaxed);
        self.sections_skipped.store(0, Ordering::Relaxed);
        self.fragments_built.store(0, Ordering::Relaxed);
        self.genesis_blocks.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
    }
}

impl Diagnostics for DiagnosticsRecorder {
    fn organization_verified(&self, _: Section, _: &str, _: &str) {
        self.organizations_verified.fetch_add(1, Ordering::Relaxed);
    }

    fn section_built(&self, _: Section, fragments: usize) {
        self.sections_built.fetch_add(1, Ordering::Relaxed);
        self.fragments_built
            .fetch_add(fragments as u64, Ordering::Relaxed);
    }

    fn section_skipped(&self, _: Section) {
        self.sections_skipped.fetch_add(1, Ordering::Relaxed);
    }

    fn genesis_assembled(&self, _: &str, _: &str) {
        self.genesis_blocks.fetch_add(1, Ordering::Relaxed);
    }

    fn construction_failed(&self, _: &str) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }
}

/// Point-in-time counter snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticsSnapshot {
    pub organizations_verified: u64,
    pub sections_built: u64,
    pub sections_skipped: u64,
    pub fragments_built: u64,
    pub genesis_blocks: u64,
    pub failures: u64,
}
