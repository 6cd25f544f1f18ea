//! `PluginExitEvent` (spec §6): a named, manually-reset, initially-unset OS
//! event that `Exit()` signals so the host loader can synchronize teardown.

const EVENT_NAME: &str = "PluginExitEvent";

#[cfg(windows)]
pub struct ExitEvent {
    handle: windows::Win32::Foundation::HANDLE,
}

#[cfg(windows)]
impl ExitEvent {
    pub fn create() -> Result<Self, windows::core::Error> {
        use windows::core::PCWSTR;
        use windows::Win32::System::Threading::CreateEventW;

        let mut wide: Vec<u16> = EVENT_NAME.encode_utf16().collect();
        wide.push(0);

        let handle = unsafe {
            CreateEventW(
                None,
                true,  // manual reset
                false, // initially unset
                PCWSTR(wide.as_ptr()),
            )?
        };

        Ok(ExitEvent { handle })
    }

    pub fn signal(&self) -> Result<(), windows::core::Error> {
        use windows::Win32::System::Threading::SetEvent;
        unsafe { SetEvent(self.handle) }
    }
}

#[cfg(windows)]
impl Drop for ExitEvent {
    fn drop(&mut self) {
        use windows::Win32::Foundation::CloseHandle;
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// Off Windows there is no OS event to signal; `Exit()` just logs that it
/// would have signaled `PluginExitEvent`, so the crate remains buildable
/// and testable outside the host platform.
#[cfg(not(windows))]
pub struct ExitEvent;

#[cfg(not(windows))]
impl ExitEvent {
    pub fn create() -> Result<Self, std::io::Error> {
        Ok(ExitEvent)
    }

    pub fn signal(&self) -> Result<(), std::io::Error> {
        log::info!("would signal OS event '{EVENT_NAME}' (non-Windows stub)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_event_create_and_signal_succeed() {
        let event = ExitEvent::create().expect("create exit event");
        event.signal().expect("signal exit event");
    }
}
