// ───── Std Lib ─────
use std::time::Duration;

/// Retry budgets for the session state machine (spec §4.5, §9 Design
/// Notes: "pull the three magic constants into a config struct; do not
/// recompute them inline").
///
/// The bridge app's `ConfigurationFile` (YAML-backed, cards/server/
/// appearance) has no equivalent need here: spec §6 states the final core
/// requires no external configuration, so this struct carries compiled-in
/// constants instead of a file format.
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Number of `connect(exclusive)` attempts during Poll before giving up.
    pub connect_retries: u32,
    /// Delay between connect retries.
    pub connect_retry_interval: Duration,

    /// Number of attempts per APDU transmit before aborting the poll.
    pub transmit_retries: u32,
    /// Delay observed between transmit attempts (also the cooldown after a
    /// successful poll and after each status-change cycle).
    pub read_cooldown: Duration,

    /// Number of `initialize()` attempts after SERVICE_STOPPED / NO_SERVICE
    /// / NO_READERS_AVAILABLE before the agent treats init as fatal.
    pub reinit_retries: u32,
    /// Delay between re-initialization attempts.
    pub reinit_retry_interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            connect_retries: 100,
            connect_retry_interval: Duration::from_millis(10),
            transmit_retries: 3,
            read_cooldown: Duration::from_millis(500),
            reinit_retries: 100,
            reinit_retry_interval: Duration::from_millis(10),
        }
    }
}

/// Timeout passed to `awaitStateChange` on each poll of the reader state.
pub const STATE_CHANGE_TIMEOUT: Duration = Duration::from_millis(500);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_spec_constants() {
        let cfg = RetryConfig::default();
        assert_eq!(cfg.connect_retries, 100);
        assert_eq!(cfg.connect_retry_interval, Duration::from_millis(10));
        assert_eq!(cfg.transmit_retries, 3);
        assert_eq!(cfg.read_cooldown, Duration::from_millis(500));
        assert_eq!(cfg.reinit_retries, 100);
        assert_eq!(cfg.reinit_retry_interval, Duration::from_millis(10));
    }
}
