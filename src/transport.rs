//! Transport Adapter (spec §4.1): thin abstraction over the host PC/SC
//! service. The trait boundary lets the Session State Machine be tested
//! against a scripted fake instead of a live reader.

use std::ffi::CString;
use std::time::Duration;

use pcsc::{Context, Disposition, Protocols, ReaderState, Scope, ShareMode, State};

use crate::error::{classify_pcsc_error, AgentError};

/// `activeProtocol` passed into `connect`/`transmit` (spec §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    /// For control codes without a card.
    Direct,
    /// For APDU exchanges.
    Exclusive,
}

/// Outcome of one `awaitStateChange` call (spec §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeOutcome {
    Updated,
    Timeout,
    /// The transport subsystem stopped or all readers were removed.
    ServiceGone,
}

/// The operations the Session State Machine needs from the host smart-card
/// service (spec §4.1). Implemented by [`PcscTransport`] against the real
/// `pcsc` crate, and by a scripted fake in tests.
pub trait Transport {
    fn establish_context(&mut self) -> Result<(), AgentError>;

    /// Returns the first listed reader name; multi-reader is out of scope.
    fn list_readers(&mut self) -> Result<String, AgentError>;

    /// Connects to `reader_name`. Returns the negotiated [`crate::model::ReaderProtocol`].
    fn connect(
        &mut self,
        reader_name: &str,
        share: ShareKind,
    ) -> Result<crate::model::ReaderProtocol, AgentError>;

    /// Disconnects the active card with *reset card* disposition.
    fn disconnect(&mut self) -> Result<(), AgentError>;

    fn transmit(&mut self, command: &[u8], recv_buf: &mut [u8]) -> Result<usize, AgentError>;

    /// Issues a reader-direct control code. Used only for PICC operating
    /// parameter initialization (ioctl 3500).
    fn control(
        &mut self,
        ioctl: u32,
        command: &[u8],
        recv_buf: &mut [u8],
    ) -> Result<usize, AgentError>;

    /// Blocks up to `timeout` waiting for the reader state to change.
    /// Returns the event state bitmask and the ATR bytes observed.
    fn await_state_change(
        &mut self,
        reader_name: &str,
        timeout: Duration,
    ) -> Result<(StateChangeOutcome, u32, Vec<u8>), AgentError>;

    /// `true` if a card is still physically present in the named reader,
    /// used by the Poll sub-sequence to check whether a removed-card retry
    /// should abort (spec §4.5 step 1).
    fn card_present(&mut self, reader_name: &str) -> Result<bool, AgentError>;
}

/// Concrete [`Transport`] wrapping `pcsc::Context`/`pcsc::Card`, modeled on
/// the reader-state-diffing and connect/transmit idiom used throughout the
/// teacher app's `smart_card.rs`.
pub struct PcscTransport {
    ctx: Option<Context>,
    card: Option<pcsc::Card>,
    current_state: State,
}

impl Default for PcscTransport {
    fn default() -> Self {
        PcscTransport {
            ctx: None,
            card: None,
            current_state: State::UNAWARE,
        }
    }
}

impl PcscTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn ctx(&self) -> Result<&Context, AgentError> {
        self.ctx
            .as_ref()
            .ok_or_else(|| AgentError::Fatal("transport context not established".into()))
    }

    fn card(&self) -> Result<&pcsc::Card, AgentError> {
        self.card
            .as_ref()
            .ok_or_else(|| AgentError::MalformedResponse("no active card handle".into()))
    }
}

impl Transport for PcscTransport {
    fn establish_context(&mut self) -> Result<(), AgentError> {
        let ctx = Context::establish(Scope::User).map_err(classify_pcsc_error)?;
        self.ctx = Some(ctx);
        Ok(())
    }

    fn list_readers(&mut self) -> Result<String, AgentError> {
        let ctx = self.ctx()?;
        let mut buf = [0u8; 2048];
        let mut names = ctx.list_readers(&mut buf).map_err(classify_pcsc_error)?;

        match names.next() {
            Some(name) => Ok(name.to_string_lossy().into_owned()),
            None => Err(AgentError::Fatal("no readers available".into())),
        }
    }

    fn connect(
        &mut self,
        reader_name: &str,
        share: ShareKind,
    ) -> Result<crate::model::ReaderProtocol, AgentError> {
        let ctx = self.ctx()?;
        let name = CString::new(reader_name)
            .map_err(|e| AgentError::MalformedResponse(e.to_string()))?;

        let (share_mode, protocols) = match share {
            ShareKind::Direct => (ShareMode::Direct, Protocols::from_bits_truncate(0)),
            ShareKind::Exclusive => (ShareMode::Exclusive, Protocols::T0 | Protocols::T1),
        };

        let card = ctx
            .connect(&name, share_mode, protocols)
            .map_err(classify_pcsc_error)?;

        let active = match card.status2_owned() {
            Ok(status) if status.protocol2() == Some(Protocols::T1) => {
                crate::model::ReaderProtocol::T1
            }
            _ => crate::model::ReaderProtocol::T0,
        };

        self.card = Some(card);
        Ok(active)
    }

    fn disconnect(&mut self) -> Result<(), AgentError> {
        if let Some(card) = self.card.take() {
            card.disconnect(Disposition::ResetCard)
                .map_err(|(_, e)| classify_pcsc_error(e))?;
        }
        Ok(())
    }

    fn transmit(&mut self, command: &[u8], recv_buf: &mut [u8]) -> Result<usize, AgentError> {
        let card = self.card()?;
        let response = card.transmit(command, recv_buf).map_err(classify_pcsc_error)?;
        Ok(response.len())
    }

    fn control(
        &mut self,
        ioctl: u32,
        command: &[u8],
        recv_buf: &mut [u8],
    ) -> Result<usize, AgentError> {
        let card = self.card()?;
        let n = card
            .control(ioctl, command, recv_buf)
            .map_err(classify_pcsc_error)?;
        Ok(n.len())
    }

    fn await_state_change(
        &mut self,
        reader_name: &str,
        timeout: Duration,
    ) -> Result<(StateChangeOutcome, u32, Vec<u8>), AgentError> {
        let ctx = self.ctx()?;
        let name = CString::new(reader_name)
            .map_err(|e| AgentError::MalformedResponse(e.to_string()))?;

        let mut reader_states = vec![ReaderState::new(name.as_c_str(), self.current_state)];

        match ctx.get_status_change(Some(timeout), &mut reader_states) {
            Ok(()) => {
                let rs = &reader_states[0];
                let event_state = rs.event_state();
                self.current_state = rs.event_state();
                Ok((StateChangeOutcome::Updated, event_state.bits(), rs.atr().to_vec()))
            }
            Err(pcsc::Error::Timeout) => Ok((StateChangeOutcome::Timeout, 0, Vec::new())),
            Err(pcsc::Error::ServiceStopped)
            | Err(pcsc::Error::NoService)
            | Err(pcsc::Error::NoReadersAvailable) => {
                Ok((StateChangeOutcome::ServiceGone, 0, Vec::new()))
            }
            Err(e) => Err(classify_pcsc_error(e)),
        }
    }

    fn card_present(&mut self, reader_name: &str) -> Result<bool, AgentError> {
        let ctx = self.ctx()?;
        let name = CString::new(reader_name)
            .map_err(|e| AgentError::MalformedResponse(e.to_string()))?;
        let mut reader_states = vec![ReaderState::new(name.as_c_str(), State::UNAWARE)];

        ctx.get_status_change(Some(Duration::from_millis(1)), &mut reader_states)
            .map_err(classify_pcsc_error)?;

        Ok(reader_states[0].event_state().intersects(State::PRESENT))
    }
}
