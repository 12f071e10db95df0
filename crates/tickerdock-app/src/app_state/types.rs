//! Internal types and constants for the app state module.

/// Crop script injection progress.
///
/// The script gets exactly one retry after a failed attempt, then the
/// viewer gives up and shows the uncropped page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InjectionState {
    /// No finished page load yet.
    Idle,
    /// Injection due on the next poll tick; counts failed attempts so far.
    Pending { attempts: u8 },
    /// Injected successfully, or given up after the retry.
    Settled,
}

/// Initial attempt plus one retry.
pub(super) const MAX_INJECTION_ATTEMPTS: u8 = 2;
