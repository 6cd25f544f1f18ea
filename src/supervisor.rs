//! Reader Supervisor (spec §4.6): the long-running worker loop. Calls the
//! Session State Machine, forwards recognized reads to the output sinks,
//! and responds to a stop signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::event::ExitEvent;
use crate::model::CardFamily;
use crate::sinks::{CardInfoSink, FileSink, KeystrokeSink};
use crate::transport::Transport;
use crate::session::ReaderSession;

/// Owns the worker thread and the atomic stop flag (spec §5: the only
/// cross-thread shared state).
pub struct ReaderSupervisor {
    stop_flag: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ReaderSupervisor {
    /// Starts the worker thread. `Init` is idempotent: calling `start`
    /// while already running is a no-op (spec §5 "Lifecycle invariant").
    pub fn start<T, FS, KS>(mut session: ReaderSession<T>, mut file_sink: FS, mut keystroke_sink: KS) -> Self
    where
        T: Transport + Send + 'static,
        FS: CardInfoSink + Send + 'static,
        KS: CardInfoSink + Send + 'static,
    {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let worker_stop_flag = Arc::clone(&stop_flag);

        let worker = std::thread::spawn(move || {
            while !worker_stop_flag.load(Ordering::Relaxed) {
                let info = session.update();

                match info.card_type {
                    CardFamily::Empty => {}
                    CardFamily::Unknown => {
                        log::info!("unrecognized card, uid={}", info.uid);
                    }
                    CardFamily::Error => {
                        log::warn!("poll ended in error state");
                    }
                    family => {
                        log::info!("recognized card: {family}, access_code={}", info.access_code);
                        if let Err(e) = file_sink.publish(&info.access_code) {
                            log::error!("file sink failed: {e}");
                        }
                        if let Err(e) = keystroke_sink.publish(&info.access_code) {
                            log::error!("keystroke sink failed: {e}");
                        }
                    }
                }
            }
        });

        ReaderSupervisor {
            stop_flag,
            worker: Some(worker),
        }
    }

    /// Sets the stop flag, joins the worker, and signals `PluginExitEvent`
    /// so the host can synchronize teardown (spec §4.6, §6).
    ///
    /// Cancellation is cooperative: the worker finishes its in-flight poll
    /// before observing the flag, so this can block up to one cooldown
    /// plus the current retry budget (spec §5).
    pub fn stop(mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);

        if let Some(worker) = self.worker.take() {
            if let Err(e) = worker.join() {
                log::error!("worker thread panicked: {e:?}");
            }
        }

        match ExitEvent::create() {
            Ok(event) => {
                if let Err(e) = event.signal() {
                    log::error!("failed to signal PluginExitEvent: {e:?}");
                }
            }
            Err(e) => log::error!("failed to create PluginExitEvent: {e:?}"),
        }
    }
}

/// Convenience constructor for the default sink pair used by `Init()`
/// (spec §4.7: file sink then keystroke sink).
pub fn default_sinks() -> (FileSink, KeystrokeSink) {
    (FileSink::new(), KeystrokeSink::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;
    use crate::error::AgentError;
    use crate::model::ReaderProtocol;
    use crate::transport::{ShareKind, StateChangeOutcome};
    use std::sync::Mutex;
    use std::time::Duration;

    struct IdleTransport;

    impl Transport for IdleTransport {
        fn establish_context(&mut self) -> Result<(), AgentError> {
            Ok(())
        }
        fn list_readers(&mut self) -> Result<String, AgentError> {
            Ok("Test Reader".into())
        }
        fn connect(&mut self, _: &str, _: ShareKind) -> Result<ReaderProtocol, AgentError> {
            Ok(ReaderProtocol::T0)
        }
        fn disconnect(&mut self) -> Result<(), AgentError> {
            Ok(())
        }
        fn transmit(&mut self, _: &[u8], _: &mut [u8]) -> Result<usize, AgentError> {
            Ok(0)
        }
        fn control(&mut self, _: u32, _: &[u8], _: &mut [u8]) -> Result<usize, AgentError> {
            Ok(0)
        }
        fn await_state_change(
            &mut self,
            _: &str,
            _: Duration,
        ) -> Result<(StateChangeOutcome, u32, Vec<u8>), AgentError> {
            Ok((StateChangeOutcome::Timeout, 0, Vec::new()))
        }
        fn card_present(&mut self, _: &str) -> Result<bool, AgentError> {
            Ok(false)
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        calls: std::sync::Arc<Mutex<Vec<String>>>,
    }

    impl CardInfoSink for RecordingSink {
        fn publish(&mut self, access_code: &str) -> Result<(), AgentError> {
            self.calls.lock().unwrap().push(access_code.to_string());
            Ok(())
        }
    }

    /// spec §8: "the Supervisor writes to the file sink iff the last
    /// CardInfo had a recognized family" — with an always-idle transport,
    /// no CardInfo is ever recognized, so the sink must never be called.
    #[test]
    fn idle_reader_never_writes_to_sinks() {
        let mut session = ReaderSession::new(IdleTransport, RetryConfig::default());
        session.initialize().expect("init");

        let sink = RecordingSink::default();
        let supervisor = ReaderSupervisor::start(session, sink.clone(), RecordingSink::default());

        std::thread::sleep(Duration::from_millis(50));
        supervisor.stop();

        assert!(sink.calls.lock().unwrap().is_empty());
    }
}
