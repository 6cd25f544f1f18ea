//! Byte-exact APDU constants used by the session state machine (spec §4.2).

/// Maximum response buffer size for a single `transmit`/`control` call,
/// including the trailing 2-byte status word.
pub const MAX_APDU_SIZE: usize = 261;

/// `FF CA 00 00 00` — standard PC/SC "Get Data" pseudo-APDU requesting the
/// card UID. Works across ISO 14443 and FeliCa.
pub const UID_CMD: [u8; 5] = [0xFF, 0xCA, 0x00, 0x00, 0x00];

/// Load a Mifare Classic key (key A, slot 0) into the reader so the
/// following sector can be authenticated.
pub const LOAD_KEY_CMD: [u8; 10] = [
    0xFF, 0x82, 0x00, 0x00, 0x06, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Authenticate the sector containing block 2 with key A, slot 0.
pub const AUTH_BLOCK2_CMD: [u8; 10] = [0xFF, 0x86, 0x00, 0x00, 0x05, 0x01, 0x00, 0x02, 0x60, 0x00];

/// Read 16 bytes at block 2. Response carries 10 payload bytes at offset 6.
pub const READ_BLOCK2_CMD: [u8; 5] = [0xFF, 0xB0, 0x00, 0x02, 0x10];

/// Vendor-defined control code offset used with `SCARD_CTL_CODE(3500)` for
/// the PICC operating-parameter initialization (spec §4.1).
pub const IOCTL_SMARTCARD_VENDOR_IFD_EXCHANGE_FUNCTION: u32 = 3500;

/// Sets which PICC types the reader will advertise. Sent once at init via
/// `control`.
pub const PICC_OPERATING_PARAM_CMD: [u8; 5] = [0xFF, 0x00, 0x51, 0xFF, 0x00];

/// Status byte meaning "success" in the reader's own response framing
/// (distinct from an ISO 7816 status word).
pub const PICC_SUCCESS: u8 = 0x00;

/// Expected echoed parameter-set identifier in the PICC init response.
pub const PICC_OPERATING_PARAMS: u8 = 0x51;

/// Template for the FeliCa S_PAD-0 block read, wrapping a pseudo
/// InDataExchange command. Bytes 10..18 are overwritten with the card's
/// 8 raw UID bytes before transmission (spec §4.2/§4.3, §9 Design Note:
/// "build from a constant header, the 8 raw UID bytes, and a constant
/// trailer; do not mutate a shared template in place").
const FELICA_READ_BLOCK0_HEADER: [u8; 10] =
    [0xFF, 0xFE, 0x00, 0x00, 0x13, 0x00, 0x06, 0x06, 0x10, 0x01];
const FELICA_READ_BLOCK0_TRAILER: [u8; 5] = [0x0B, 0x00, 0x01, 0x80, 0x00];

/// Builds the 23-byte FeliCa S_PAD-0 read APDU for a specific card by
/// embedding its raw 8-byte UID. Never mutates a shared buffer in place —
/// each call allocates a fresh command.
pub fn felica_read_block0_cmd(uid: &[u8; 8]) -> [u8; 23] {
    let mut cmd = [0u8; 23];
    cmd[0..10].copy_from_slice(&FELICA_READ_BLOCK0_HEADER);
    cmd[10..18].copy_from_slice(uid);
    cmd[18..23].copy_from_slice(&FELICA_READ_BLOCK0_TRAILER);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn felica_template_embeds_uid_without_touching_header_or_trailer() {
        let uid = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let cmd = felica_read_block0_cmd(&uid);
        assert_eq!(cmd.len(), 23);
        assert_eq!(&cmd[0..10], &FELICA_READ_BLOCK0_HEADER);
        assert_eq!(&cmd[10..18], &uid);
        assert_eq!(&cmd[18..23], &FELICA_READ_BLOCK0_TRAILER);
    }

    #[test]
    fn repeated_calls_do_not_leak_state_between_cards() {
        let a = felica_read_block0_cmd(&[0xAA; 8]);
        let b = felica_read_block0_cmd(&[0xBB; 8]);
        assert_eq!(&a[10..18], &[0xAA; 8]);
        assert_eq!(&b[10..18], &[0xBB; 8]);
    }
}
