//! Card session agent: a background plugin that watches a PC/SC reader,
//! identifies a card family, and publishes a normalized access code.
//!
//! Export surface (spec §6): `Init()` starts the worker thread; `Exit()`
//! stops it and signals the host-visible `PluginExitEvent`.

// ───── Modules ─────
mod apdu;
mod config;
mod error;
mod event;
mod logger;
mod model;
mod sbox;
mod session;
mod sinks;
mod supervisor;
mod transport;
mod validators;

// ───── Crates ─────
use lazy_static::lazy_static;

use crate::config::RetryConfig;
use crate::session::ReaderSession;
use crate::supervisor::ReaderSupervisor;
use crate::transport::PcscTransport;

lazy_static! {
    /// The running agent, if `Init()` has been called and `Exit()` hasn't
    /// torn it down yet. The only cross-call shared state (spec §5).
    static ref SUPERVISOR: std::sync::Mutex<Option<ReaderSupervisor>> =
        std::sync::Mutex::new(None);
}

/// Starts the worker thread. Idempotent: a second call while already
/// running only logs and returns (spec §5 "Lifecycle invariant").
#[no_mangle]
pub extern "C" fn Init() {
    logger::setup_logging();

    let mut guard = SUPERVISOR.lock().expect("supervisor mutex poisoned");
    if guard.is_some() {
        log::info!("Init() called while already running; ignoring");
        return;
    }

    let transport = PcscTransport::new();
    let mut session = ReaderSession::new(transport, RetryConfig::default());

    if let Err(e) = session.initialize() {
        log::error!("fatal: failed to initialize card session: {e}");
        return;
    }

    let (file_sink, keystroke_sink) = supervisor::default_sinks();
    *guard = Some(ReaderSupervisor::start(session, file_sink, keystroke_sink));

    log::info!("-== Card session agent started ==-");
}

/// Stops the worker (if running), tears the session down, and signals
/// `PluginExitEvent`. Safe to call when `Init()` was never called
/// (spec §5 "Lifecycle invariant").
#[no_mangle]
pub extern "C" fn Exit() {
    let running = SUPERVISOR
        .lock()
        .expect("supervisor mutex poisoned")
        .take();

    match running {
        Some(supervisor) => supervisor.stop(),
        None => {
            log::info!("Exit() called with no running agent; signaling exit event only");
            match event::ExitEvent::create() {
                Ok(exit_event) => {
                    if let Err(e) = exit_event.signal() {
                        log::error!("failed to signal PluginExitEvent: {e:?}");
                    }
                }
                Err(e) => log::error!("failed to create PluginExitEvent: {e:?}"),
            }
        }
    }

    log::info!("-== Card session agent stopped ==-");
}
