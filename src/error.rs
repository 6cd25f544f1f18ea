// ───── Std Lib ─────
use std::fmt;

// ───── Crates ─────
use thiserror::Error;

/// Unified error taxonomy for the agent (see spec §7).
///
/// `Transient` errors are retried by the caller per the budgets in
/// [`crate::config::RetryConfig`]; the rest end the current poll (or, for
/// `Fatal`, initialization) without tearing down the process.
#[derive(Error, Debug)]
pub enum AgentError {
    /// Card reset, card removed, or the PC/SC service briefly unavailable.
    #[error("transient transport error: {0}")]
    Transient(#[from] TransientKind),

    /// A response was too short, carried an unexpected status word, or the
    /// ATR could not be classified into a known card protocol.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The decoded access code was not 20 decimal digits, or its prefix did
    /// not match any known card family.
    #[error("validation failure: {0}")]
    ValidationFailure(String),

    /// Context establishment or reader listing failed even after the
    /// re-initialization retry budget was exhausted.
    #[error("fatal initialization error: {0}")]
    Fatal(String),

    /// Any other PC/SC failure not classified above.
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The subset of transport failures that are retried rather than aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientKind {
    ResetCard,
    RemovedCard,
    ServiceStopped,
    NoService,
    NoReadersAvailable,
}

impl fmt::Display for TransientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransientKind::ResetCard => "card was reset",
            TransientKind::RemovedCard => "card was removed",
            TransientKind::ServiceStopped => "pcsc service stopped",
            TransientKind::NoService => "pcsc service unavailable",
            TransientKind::NoReadersAvailable => "no readers available",
        };
        f.write_str(s)
    }
}

impl std::error::Error for TransientKind {}

/// Classifies a raw `pcsc::Error` into the taxonomy above.
///
/// Mirrors the bridge app's `From<pcsc::Error> for SmartCardError`, but
/// covers every transient case named in spec §7 instead of a single
/// `UnknownReader` special-case.
pub fn classify_pcsc_error(err: pcsc::Error) -> AgentError {
    match err {
        pcsc::Error::ResetCard => AgentError::Transient(TransientKind::ResetCard),
        pcsc::Error::RemovedCard => AgentError::Transient(TransientKind::RemovedCard),
        pcsc::Error::ServiceStopped => AgentError::Transient(TransientKind::ServiceStopped),
        pcsc::Error::NoService => AgentError::Transient(TransientKind::NoService),
        pcsc::Error::NoReadersAvailable => {
            AgentError::Transient(TransientKind::NoReadersAvailable)
        }
        other => AgentError::Pcsc(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_transient_errors() {
        assert!(matches!(
            classify_pcsc_error(pcsc::Error::ResetCard),
            AgentError::Transient(TransientKind::ResetCard)
        ));
        assert!(matches!(
            classify_pcsc_error(pcsc::Error::RemovedCard),
            AgentError::Transient(TransientKind::RemovedCard)
        ));
    }

    #[test]
    fn passes_through_other_errors() {
        assert!(matches!(
            classify_pcsc_error(pcsc::Error::NoSmartcard),
            AgentError::Pcsc(pcsc::Error::NoSmartcard)
        ));
    }
}
