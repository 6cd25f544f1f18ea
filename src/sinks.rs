//! Output Sinks (spec §4.7): the two collaborators a successfully decoded
//! [`CardInfo`] is forwarded to.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AgentError;

/// Virtual-key code for the host's F3 key (spec §6 "Input synthesis").
pub const DEFAULT_VIRTUAL_KEY: u16 = 0x72;

/// Receives a validated access code after a successful poll.
pub trait CardInfoSink {
    fn publish(&mut self, access_code: &str) -> Result<(), AgentError>;
}

/// Overwrites `cards.dat` in the working directory with the literal
/// access-code string (spec §4.7): no header, no trailing newline.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new() -> Self {
        FileSink {
            path: PathBuf::from("cards.dat"),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        FileSink { path }
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CardInfoSink for FileSink {
    fn publish(&mut self, access_code: &str) -> Result<(), AgentError> {
        fs::write(&self.path, access_code)?;
        Ok(())
    }
}

/// Synthesizes two press-release cycles of the configured virtual key,
/// 100ms apart (spec §4.7). On Windows this uses `SendInput`; off Windows
/// it logs the keystroke it would have sent so the crate stays buildable
/// and testable in this development environment.
pub struct KeystrokeSink {
    virtual_key: u16,
    press_release_delay: Duration,
}

impl KeystrokeSink {
    pub fn new() -> Self {
        KeystrokeSink {
            virtual_key: DEFAULT_VIRTUAL_KEY,
            press_release_delay: Duration::from_millis(100),
        }
    }

    pub fn with_virtual_key(virtual_key: u16) -> Self {
        KeystrokeSink {
            virtual_key,
            press_release_delay: Duration::from_millis(100),
        }
    }
}

impl Default for KeystrokeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CardInfoSink for KeystrokeSink {
    fn publish(&mut self, _access_code: &str) -> Result<(), AgentError> {
        for _ in 0..2 {
            self.press_and_release()?;
        }
        Ok(())
    }
}

impl KeystrokeSink {
    #[cfg(windows)]
    fn press_and_release(&self) -> Result<(), AgentError> {
        use windows::Win32::UI::Input::KeyboardAndMouse::{
            SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
            KEYEVENTF_KEYUP, VIRTUAL_KEY,
        };

        let vk = VIRTUAL_KEY(self.virtual_key);

        let make_input = |flags: KEYBD_EVENT_FLAGS| INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: vk,
                    wScan: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };

        let down = make_input(KEYBD_EVENT_FLAGS(0));
        unsafe { SendInput(&[down], std::mem::size_of::<INPUT>() as i32) };
        std::thread::sleep(self.press_release_delay);

        let up = make_input(KEYEVENTF_KEYUP);
        unsafe { SendInput(&[up], std::mem::size_of::<INPUT>() as i32) };
        std::thread::sleep(self.press_release_delay);

        Ok(())
    }

    #[cfg(not(windows))]
    fn press_and_release(&self) -> Result<(), AgentError> {
        log::info!(
            "keystroke sink: would press and release virtual key 0x{:02X}",
            self.virtual_key
        );
        std::thread::sleep(self.press_release_delay);
        std::thread::sleep(self.press_release_delay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_overwrites_with_literal_access_code() {
        let dir = std::env::temp_dir().join(format!(
            "card_session_agent_test_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cards.dat");

        let mut sink = FileSink::with_path(path.clone());
        sink.publish("30760120652285557236").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "30760120652285557236");

        sink.publish("50101234567890123456").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "50101234567890123456");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn keystroke_sink_off_windows_completes_without_error() {
        let mut sink = KeystrokeSink::new();
        assert!(sink.publish("30760120652285557236").is_ok());
    }
}
