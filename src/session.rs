//! Session State Machine (spec §4.5): owns the reader handle, observes
//! state transitions, drives the per-card polling sequence, and emits a
//! [`CardInfo`] per iteration. This is the largest component in the agent.

use std::time::Duration;

use pcsc::State as PcscState;

use crate::apdu::{
    felica_read_block0_cmd, AUTH_BLOCK2_CMD, IOCTL_SMARTCARD_VENDOR_IFD_EXCHANGE_FUNCTION,
    LOAD_KEY_CMD, MAX_APDU_SIZE, PICC_OPERATING_PARAM_CMD, PICC_SUCCESS, READ_BLOCK2_CMD, UID_CMD,
};
use crate::config::{RetryConfig, STATE_CHANGE_TIMEOUT};
use crate::error::{AgentError, TransientKind};
use crate::model::{CardFamily, CardInfo, CardProtocol, ReaderProtocol};
use crate::sbox::decrypt;
use crate::transport::{ShareKind, StateChangeOutcome, Transport};
use crate::validators::{validate_aic, validate_mifare};

/// Explicit tagged session state (spec §9 Design Note: prefer this over a
/// `connected` bool scattered against handle-nullness checks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Detecting,
    Connecting,
    ReadingAtr,
    Exchanging,
    Validating,
    Disposing,
}

/// Owns the reader handle for the lifetime of the agent (spec §3).
pub struct ReaderSession<T: Transport> {
    transport: T,
    config: RetryConfig,
    reader_name: Option<String>,
    connected: bool,
    active_protocol: Option<ReaderProtocol>,
    card_protocol: Option<CardProtocol>,
    state: SessionState,
    card_was_present: bool,
}

impl<T: Transport> ReaderSession<T> {
    pub fn new(transport: T, config: RetryConfig) -> Self {
        ReaderSession {
            transport,
            config,
            reader_name: None,
            connected: false,
            active_protocol: None,
            card_protocol: None,
            state: SessionState::Idle,
            card_was_present: false,
        }
    }

    /// Init sub-sequence (spec §4.5): establish context, list readers,
    /// connect direct, set PICC operating params, disconnect, and reset
    /// the reader-state record.
    pub fn initialize(&mut self) -> Result<(), AgentError> {
        self.transport.establish_context()?;
        let reader_name = self.transport.list_readers()?;

        self.transport.connect(&reader_name, ShareKind::Direct)?;

        let mut recv = [0u8; MAX_APDU_SIZE];
        let n = self.transport.control(
            IOCTL_SMARTCARD_VENDOR_IFD_EXCHANGE_FUNCTION,
            &PICC_OPERATING_PARAM_CMD,
            &mut recv,
        )?;
        if n == 0 || recv[0] != PICC_SUCCESS {
            log::warn!("PICC operating-parameter init returned unexpected status");
        }

        self.transport.disconnect()?;

        self.reader_name = Some(reader_name);
        self.connected = false;
        self.card_was_present = false;
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Retries [`Self::initialize`] up to `reinit_retries` times, spaced
    /// `reinit_retry_interval` apart (spec §4.5 "Re-initialization").
    fn reinitialize_with_retry(&mut self) -> Result<(), AgentError> {
        let mut last_err = None;
        for attempt in 0..self.config.reinit_retries {
            match self.initialize() {
                Ok(()) => return Ok(()),
                Err(e) => {
                    log::warn!("re-init attempt {attempt} failed: {e}");
                    last_err = Some(e);
                    std::thread::sleep(self.config.reinit_retry_interval);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| AgentError::Fatal("re-init exhausted".into())))
    }

    /// Runs one status-change cycle and returns the resulting [`CardInfo`]
    /// (spec §4.5 "Status-change handling", §4.6 step 1). Never panics;
    /// all failures resolve to a `CardInfo` of family `error` or `unknown`
    /// so the Supervisor loop keeps running.
    pub fn update(&mut self) -> CardInfo {
        let reader_name = match &self.reader_name {
            Some(name) => name.clone(),
            None => return CardInfo::empty(),
        };

        self.state = SessionState::Detecting;
        let (outcome, event_bits, atr) = match self
            .transport
            .await_state_change(&reader_name, STATE_CHANGE_TIMEOUT)
        {
            Ok(result) => result,
            Err(AgentError::Transient(_)) => {
                if self.reinitialize_with_retry().is_err() {
                    log::error!("re-initialization exhausted after transient transport error");
                    return CardInfo::error();
                }
                return CardInfo::empty();
            }
            Err(e) => {
                log::error!("await_state_change failed: {e}");
                return CardInfo::error();
            }
        };

        match outcome {
            StateChangeOutcome::Timeout => CardInfo::empty(),
            StateChangeOutcome::ServiceGone => {
                if self.reinitialize_with_retry().is_err() {
                    log::error!("re-initialization exhausted after service loss");
                    return CardInfo::error();
                }
                CardInfo::empty()
            }
            StateChangeOutcome::Updated => {
                let new_state = PcscState::from_bits_truncate(event_bits) - PcscState::CHANGED;

                let result = if new_state.intersects(PcscState::UNAVAILABLE) {
                    std::thread::sleep(self.config.read_cooldown);
                    CardInfo::empty()
                } else if new_state.intersects(PcscState::EMPTY) {
                    log::debug!("reader reports empty");
                    self.card_was_present = false;
                    CardInfo::empty()
                } else if new_state.intersects(PcscState::PRESENT) && !self.card_was_present {
                    self.card_was_present = true;
                    self.poll(&reader_name, &atr)
                } else {
                    CardInfo::empty()
                };

                std::thread::sleep(self.config.read_cooldown);
                result
            }
        }
    }

    /// Poll sub-sequence (spec §4.5): connect, classify protocol, run the
    /// per-protocol APDU exchange, validate, and disconnect.
    fn poll(&mut self, reader_name: &str, atr: &[u8]) -> CardInfo {
        self.state = SessionState::Connecting;
        if let Err(info) = self.connect_with_retry(reader_name) {
            return info;
        }

        self.state = SessionState::ReadingAtr;
        let protocol = match atr.get(12).copied().map(CardProtocol::try_from) {
            Some(Ok(protocol)) => protocol,
            _ => {
                log::warn!("unrecognized or truncated ATR, aborting poll");
                let _ = self.transport.disconnect();
                self.connected = false;
                return CardInfo::error();
            }
        };
        self.card_protocol = Some(protocol);

        self.state = SessionState::Exchanging;
        let result = match protocol {
            CardProtocol::Iso14443Part3 => self.exchange_mifare(),
            CardProtocol::Felica212k | CardProtocol::Felica424k => self.exchange_felica(),
            CardProtocol::Iso15693Part3 => self.exchange_iso15693(),
        };

        self.state = SessionState::Disposing;
        let _ = self.transport.disconnect();
        self.connected = false;

        match result {
            Ok(info) => info,
            Err(info) => info,
        }
    }

    /// Connect-exclusive retry loop (spec §4.5 Poll step 1): up to
    /// `connect_retries`, spaced `connect_retry_interval` apart. A removed
    /// card short-circuits the retry loop once presence is confirmed gone.
    fn connect_with_retry(&mut self, reader_name: &str) -> Result<(), CardInfo> {
        for attempt in 0..self.config.connect_retries {
            match self.transport.connect(reader_name, ShareKind::Exclusive) {
                Ok(protocol) => {
                    self.connected = true;
                    self.active_protocol = Some(protocol);
                    return Ok(());
                }
                Err(AgentError::Transient(TransientKind::RemovedCard)) => {
                    match self.transport.card_present(reader_name) {
                        Ok(false) => {
                            log::debug!("card removed during connect retry, aborting poll");
                            return Err(CardInfo::empty());
                        }
                        _ => {
                            std::thread::sleep(self.config.connect_retry_interval);
                            continue;
                        }
                    }
                }
                Err(AgentError::Transient(
                    TransientKind::ServiceStopped
                    | TransientKind::NoService
                    | TransientKind::NoReadersAvailable,
                )) => {
                    log::warn!("service lost during connect retry");
                    if self.reinitialize_with_retry().is_err() {
                        return Err(CardInfo::error());
                    }
                    return Err(CardInfo::empty());
                }
                Err(e) => {
                    log::debug!("connect retry {attempt} failed: {e}");
                    std::thread::sleep(self.config.connect_retry_interval);
                }
            }
        }

        log::error!("exhausted connect retries");
        Err(CardInfo::error())
    }

    /// Mifare Classic block-2 read sequence (spec §4.5 step 3).
    fn exchange_mifare(&mut self) -> Result<CardInfo, CardInfo> {
        let uid_resp = self.transmit_with_retry(&UID_CMD).map_err(|_| CardInfo::error())?;
        let uid = encode_uid(&uid_resp);

        self.transmit_with_retry(&LOAD_KEY_CMD).map_err(|_| CardInfo::error())?;
        self.transmit_with_retry(&AUTH_BLOCK2_CMD).map_err(|_| CardInfo::error())?;
        let block_resp = self.transmit_with_retry(&READ_BLOCK2_CMD).map_err(|_| CardInfo::error())?;

        if block_resp.len() < 16 {
            return Err(CardInfo::error());
        }
        let candidate = String::from_utf8_lossy(&block_resp[6..16]).into_owned();

        match validate_mifare(&candidate) {
            Some(family) => Ok(CardInfo {
                card_type: family,
                uid,
                access_code: candidate,
            }),
            None => Ok(CardInfo::unknown(uid)),
        }
    }

    /// ISO 15693-3 card: read the UID but skip the block-2 read, since this
    /// agent has no access-code layout for that family. Yields an
    /// `unknown` `CardInfo` carrying the UID rather than an error.
    fn exchange_iso15693(&mut self) -> Result<CardInfo, CardInfo> {
        let uid_resp = self.transmit_with_retry(&UID_CMD).map_err(|_| CardInfo::error())?;
        let uid = encode_uid(&uid_resp);
        Ok(CardInfo::unknown(uid))
    }

    /// FeliCa S_PAD-0 read-and-decrypt sequence (spec §4.5 step 4).
    fn exchange_felica(&mut self) -> Result<CardInfo, CardInfo> {
        let uid_resp = self.transmit_with_retry(&UID_CMD).map_err(|_| CardInfo::error())?;
        let uid = encode_uid(&uid_resp);

        let raw_uid: [u8; 8] = uid_resp
            .get(..8)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(CardInfo::error)?;

        let cmd = felica_read_block0_cmd(&raw_uid);
        let resp = self.transmit_with_retry(&cmd).map_err(|_| CardInfo::error())?;

        if resp.len() < 21 {
            return Err(CardInfo::error());
        }
        let len = resp.len();
        if resp[len - 21] != PICC_SUCCESS || resp[len - 20] != PICC_SUCCESS {
            log::warn!("FeliCa read reported nonzero status bytes");
            return Err(CardInfo::error());
        }

        let cipher: [u8; 16] = resp[len - 18..len - 2]
            .try_into()
            .map_err(|_| CardInfo::error())?;
        let access_bytes = decrypt(&cipher);
        let candidate = hex::encode_upper(access_bytes);

        match validate_aic(&candidate) {
            Some(family) => Ok(CardInfo {
                card_type: family,
                uid,
                access_code: candidate,
            }),
            None => Ok(CardInfo::unknown(uid)),
        }
    }

    /// Transmit retry policy (spec §4.5 "Transmit retry policy"): up to
    /// `transmit_retries` attempts; `RESET_CARD`/`REMOVED_CARD` trigger a
    /// reconnect-then-retry, any other failure ends the poll early.
    fn transmit_with_retry(&mut self, command: &[u8]) -> Result<Vec<u8>, AgentError> {
        let mut last_err = None;

        for _ in 0..self.config.transmit_retries {
            let mut recv = [0u8; MAX_APDU_SIZE];
            match self.transport.transmit(command, &mut recv) {
                Ok(len) => return Ok(recv[..len].to_vec()),
                Err(AgentError::Transient(TransientKind::ResetCard | TransientKind::RemovedCard)) => {
                    if let Some(reader_name) = self.reader_name.clone() {
                        let _ = self.transport.disconnect();
                        if let Ok(protocol) =
                            self.transport.connect(&reader_name, ShareKind::Exclusive)
                        {
                            self.connected = true;
                            self.active_protocol = Some(protocol);
                        }
                    }
                    last_err = Some(AgentError::Transient(TransientKind::ResetCard));
                    std::thread::sleep(self.config.read_cooldown);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| AgentError::MalformedResponse("transmit exhausted".into())))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
}

/// Hex-encodes up to 8 raw UID bytes, uppercase, no separators (spec §3).
fn encode_uid(response: &[u8]) -> String {
    let take = response.len().saturating_sub(2).min(8);
    hex::encode_upper(&response[..take])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ShareKind;
    use std::collections::VecDeque;

    /// Scripted [`Transport`] double: each method pops its next scripted
    /// result, panicking if the script runs dry (a test bug, not a
    /// recoverable condition).
    #[derive(Default)]
    struct FakeTransport {
        reader_name: String,
        connect_results: VecDeque<Result<ReaderProtocol, AgentError>>,
        transmit_results: VecDeque<Result<Vec<u8>, AgentError>>,
        state_change_results: VecDeque<Result<(StateChangeOutcome, u32, Vec<u8>), AgentError>>,
        card_present_results: VecDeque<Result<bool, AgentError>>,
        reconnect_count: usize,
    }

    impl Transport for FakeTransport {
        fn establish_context(&mut self) -> Result<(), AgentError> {
            Ok(())
        }

        fn list_readers(&mut self) -> Result<String, AgentError> {
            Ok(self.reader_name.clone())
        }

        fn connect(
            &mut self,
            _reader_name: &str,
            share: ShareKind,
        ) -> Result<ReaderProtocol, AgentError> {
            if share == ShareKind::Exclusive {
                self.reconnect_count += 1;
            }
            self.connect_results
                .pop_front()
                .unwrap_or(Ok(ReaderProtocol::T1))
        }

        fn disconnect(&mut self) -> Result<(), AgentError> {
            Ok(())
        }

        fn transmit(&mut self, _command: &[u8], recv_buf: &mut [u8]) -> Result<usize, AgentError> {
            match self.transmit_results.pop_front().expect("transmit script exhausted") {
                Ok(bytes) => {
                    recv_buf[..bytes.len()].copy_from_slice(&bytes);
                    Ok(bytes.len())
                }
                Err(e) => Err(e),
            }
        }

        fn control(
            &mut self,
            _ioctl: u32,
            _command: &[u8],
            recv_buf: &mut [u8],
        ) -> Result<usize, AgentError> {
            recv_buf[0] = PICC_SUCCESS;
            Ok(1)
        }

        fn await_state_change(
            &mut self,
            _reader_name: &str,
            _timeout: Duration,
        ) -> Result<(StateChangeOutcome, u32, Vec<u8>), AgentError> {
            self.state_change_results
                .pop_front()
                .expect("state-change script exhausted")
        }

        fn card_present(&mut self, _reader_name: &str) -> Result<bool, AgentError> {
            self.card_present_results.pop_front().unwrap_or(Ok(true))
        }
    }

    fn atr_for(protocol_byte: u8) -> Vec<u8> {
        let mut atr = vec![0u8; 16];
        atr[12] = protocol_byte;
        atr
    }

    fn present_event() -> u32 {
        (PcscState::PRESENT | PcscState::CHANGED).bits()
    }

    /// spec §8 scenario 1: empty reader.
    #[test]
    fn scenario_empty_reader_yields_empty_card_info() {
        let mut fake = FakeTransport {
            reader_name: "Test Reader".into(),
            ..Default::default()
        };
        fake.state_change_results.push_back(Ok((
            StateChangeOutcome::Updated,
            (PcscState::EMPTY | PcscState::CHANGED).bits(),
            Vec::new(),
        )));

        let mut session = ReaderSession::new(fake, RetryConfig::default());
        session.reader_name = Some("Test Reader".into());

        let info = session.update();
        assert_eq!(info.card_type, CardFamily::Empty);
    }

    /// spec §8 scenario 2: Mifare Banapass.
    #[test]
    fn scenario_mifare_banapass_round_trip() {
        let mut fake = FakeTransport {
            reader_name: "Test Reader".into(),
            ..Default::default()
        };
        fake.state_change_results.push_back(Ok((
            StateChangeOutcome::Updated,
            present_event(),
            atr_for(0x11),
        )));
        fake.connect_results.push_back(Ok(ReaderProtocol::T0));

        let mut uid_response = vec![0xDEu8, 0xAD, 0xBE, 0xEF];
        uid_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(uid_response));
        fake.transmit_results.push_back(Ok(vec![0x90, 0x00]));
        fake.transmit_results.push_back(Ok(vec![0x90, 0x00]));

        let mut block_response = vec![0u8; 6];
        block_response.extend_from_slice(b"30760120652285557236");
        block_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(block_response));

        let mut session = ReaderSession::new(fake, RetryConfig::default());
        session.reader_name = Some("Test Reader".into());

        let info = session.update();
        assert_eq!(info.card_type, CardFamily::BandaiNamcoBanapass);
        assert_eq!(info.access_code, "30760120652285557236");
        assert_eq!(info.uid, "DEADBEEF");
    }

    /// spec §8 scenario 3: Mifare unknown prefix.
    #[test]
    fn scenario_mifare_unknown_prefix_yields_unknown() {
        let mut fake = FakeTransport {
            reader_name: "Test Reader".into(),
            ..Default::default()
        };
        fake.state_change_results.push_back(Ok((
            StateChangeOutcome::Updated,
            present_event(),
            atr_for(0x11),
        )));
        fake.connect_results.push_back(Ok(ReaderProtocol::T0));
        fake.transmit_results.push_back(Ok(vec![0xAA, 0xBB, 0x90, 0x00]));
        fake.transmit_results.push_back(Ok(vec![0x90, 0x00]));
        fake.transmit_results.push_back(Ok(vec![0x90, 0x00]));

        let mut block_response = vec![0u8; 6];
        block_response.extend_from_slice(b"99999999999999999999");
        block_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(block_response));

        let mut session = ReaderSession::new(fake, RetryConfig::default());
        session.reader_name = Some("Test Reader".into());

        let info = session.update();
        assert_eq!(info.card_type, CardFamily::Unknown);
        assert_eq!(info.access_code, "");
    }

    /// spec §8 scenario 4: FeliCa AIC SEGA, using the decryptor's own
    /// known fixture (see `sbox::tests::known_fixture_decodes_to_expected_access_code`).
    #[test]
    fn scenario_felica_aic_sega_round_trip() {
        let mut fake = FakeTransport {
            reader_name: "Test Reader".into(),
            ..Default::default()
        };
        fake.state_change_results.push_back(Ok((
            StateChangeOutcome::Updated,
            present_event(),
            atr_for(0xF0),
        )));
        fake.connect_results.push_back(Ok(ReaderProtocol::T1));

        let mut uid_response = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        uid_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(uid_response));

        let cipher = hex::decode("683a9d3b50e252c1a8e62a1931dae70f").unwrap();
        let mut felica_response = vec![0u8; 3];
        felica_response.extend_from_slice(&cipher);
        felica_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(felica_response));

        let mut session = ReaderSession::new(fake, RetryConfig::default());
        session.reader_name = Some("Test Reader".into());

        let info = session.update();
        assert_eq!(info.card_type, CardFamily::AicSegaAiMe);
        assert_eq!(info.access_code, "50101234567890123456");
    }

    /// spec §8 scenario 5: FeliCa bad status bytes.
    #[test]
    fn scenario_felica_bad_status_aborts_poll() {
        let mut fake = FakeTransport {
            reader_name: "Test Reader".into(),
            ..Default::default()
        };
        fake.state_change_results.push_back(Ok((
            StateChangeOutcome::Updated,
            present_event(),
            atr_for(0xF0),
        )));
        fake.connect_results.push_back(Ok(ReaderProtocol::T1));

        let mut uid_response = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        uid_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(uid_response));

        let mut felica_response = vec![0xFFu8, 0xFF, 0x00];
        felica_response.extend_from_slice(&[0u8; 16]);
        felica_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(felica_response));

        let mut session = ReaderSession::new(fake, RetryConfig::default());
        session.reader_name = Some("Test Reader".into());

        let info = session.update();
        assert_eq!(info.card_type, CardFamily::Error);
    }

    /// An ISO 15693-3 card has no access-code layout this agent knows, but
    /// its UID should still surface rather than being swallowed as an error.
    #[test]
    fn scenario_iso15693_yields_unknown_with_uid() {
        let mut fake = FakeTransport {
            reader_name: "Test Reader".into(),
            ..Default::default()
        };
        fake.state_change_results.push_back(Ok((
            StateChangeOutcome::Updated,
            present_event(),
            atr_for(0x01),
        )));
        fake.connect_results.push_back(Ok(ReaderProtocol::T1));

        let mut uid_response = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        uid_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(uid_response));

        let mut session = ReaderSession::new(fake, RetryConfig::default());
        session.reader_name = Some("Test Reader".into());

        let info = session.update();
        assert_eq!(info.card_type, CardFamily::Unknown);
        assert_eq!(info.uid, "0102030405060708");
    }

    /// spec §8 scenario 6: transient reset mid-transmit, succeeds after
    /// one reconnect.
    #[test]
    fn scenario_transient_reset_recovers_on_retry() {
        let mut fake = FakeTransport {
            reader_name: "Test Reader".into(),
            ..Default::default()
        };
        fake.state_change_results.push_back(Ok((
            StateChangeOutcome::Updated,
            present_event(),
            atr_for(0x11),
        )));
        fake.connect_results.push_back(Ok(ReaderProtocol::T0));
        // the reconnect triggered by the reset retry
        fake.connect_results.push_back(Ok(ReaderProtocol::T0));

        fake.transmit_results
            .push_back(Err(AgentError::Transient(TransientKind::ResetCard)));
        fake.transmit_results.push_back(Ok(vec![0xAA, 0xBB, 0x90, 0x00]));
        fake.transmit_results.push_back(Ok(vec![0x90, 0x00]));
        fake.transmit_results.push_back(Ok(vec![0x90, 0x00]));

        let mut block_response = vec![0u8; 6];
        block_response.extend_from_slice(b"30760120652285557236");
        block_response.extend_from_slice(&[0x90, 0x00]);
        fake.transmit_results.push_back(Ok(block_response));

        let mut session = ReaderSession::new(fake, RetryConfig::default());
        session.reader_name = Some("Test Reader".into());

        let info = session.update();
        assert_eq!(info.card_type, CardFamily::BandaiNamcoBanapass);
        assert_eq!(session.transport.reconnect_count, 2);
    }
}
