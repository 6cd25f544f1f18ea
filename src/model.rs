//! Data model shared across the session machine, validators, and sinks
//! (spec §3).

use std::fmt;

/// The family tags a decoded access code can resolve to, plus the three
/// non-card states a poll can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFamily {
    Empty,
    Unknown,
    Error,
    BandaiNamcoBanapass,
    ClassicalAiMe,
    AicSegaAiMeLimited,
    AicSegaAiMe,
    AicBandaiNamcoBanapass,
    AicKonamiEAmusement,
    AicTaitoNesica,
}

impl CardFamily {
    /// `true` for the three states the Supervisor never forwards to the
    /// output sinks (spec §4.6).
    pub fn is_unpublishable(self) -> bool {
        matches!(self, CardFamily::Empty | CardFamily::Unknown | CardFamily::Error)
    }
}

impl fmt::Display for CardFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CardFamily::Empty => "empty",
            CardFamily::Unknown => "unknown",
            CardFamily::Error => "error",
            CardFamily::BandaiNamcoBanapass => "Bandai Namco Banapass",
            CardFamily::ClassicalAiMe => "Classical AiMe",
            CardFamily::AicSegaAiMeLimited => "AIC SEGA AiMe limited edition",
            CardFamily::AicSegaAiMe => "AIC SEGA AiMe",
            CardFamily::AicBandaiNamcoBanapass => "AIC Bandai Namco Banapass",
            CardFamily::AicKonamiEAmusement => "AIC Konami e-Amusement",
            CardFamily::AicTaitoNesica => "AIC Taito NESiCA",
        };
        f.write_str(s)
    }
}

impl Default for CardFamily {
    fn default() -> Self {
        CardFamily::Empty
    }
}

/// Result of one polling cycle (spec §3). `uid` is uppercase hex with no
/// separators; `access_code` is 20 decimal digits unless `card_type` is
/// one of the three non-card families.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardInfo {
    pub card_type: CardFamily,
    pub uid: String,
    pub access_code: String,
}

impl CardInfo {
    pub fn empty() -> Self {
        CardInfo::default()
    }

    pub fn unknown(uid: String) -> Self {
        CardInfo {
            card_type: CardFamily::Unknown,
            uid,
            access_code: String::new(),
        }
    }

    pub fn error() -> Self {
        CardInfo {
            card_type: CardFamily::Error,
            uid: String::new(),
            access_code: String::new(),
        }
    }
}

/// `activeProtocol`, set on `connect` (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderProtocol {
    T0,
    T1,
}

/// `cardProtocol`, read from ATR byte 12 (spec §3, §4.5 step "ReadingATR").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardProtocol {
    Iso15693Part3,
    Iso14443Part3,
    Felica212k,
    Felica424k,
}

/// Raised when ATR byte 12 does not carry a recognized card-protocol tag
/// (spec §4.5 step 2: "If unknown protocol, abort").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCardProtocol(pub u8);

impl fmt::Display for UnknownCardProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized ATR protocol byte: 0x{:02X}", self.0)
    }
}

impl std::error::Error for UnknownCardProtocol {}

impl TryFrom<u8> for CardProtocol {
    type Error = UnknownCardProtocol;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(CardProtocol::Iso15693Part3),
            0x11 => Ok(CardProtocol::Iso14443Part3),
            0xF0 => Ok(CardProtocol::Felica212k),
            0xF1 => Ok(CardProtocol::Felica424k),
            other => Err(UnknownCardProtocol(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpublishable_families_match_supervisor_contract() {
        assert!(CardFamily::Empty.is_unpublishable());
        assert!(CardFamily::Unknown.is_unpublishable());
        assert!(CardFamily::Error.is_unpublishable());
        assert!(!CardFamily::BandaiNamcoBanapass.is_unpublishable());
        assert!(!CardFamily::AicSegaAiMe.is_unpublishable());
    }

    #[test]
    fn display_strings_match_spec_literals() {
        assert_eq!(CardFamily::BandaiNamcoBanapass.to_string(), "Bandai Namco Banapass");
        assert_eq!(CardFamily::AicSegaAiMeLimited.to_string(), "AIC SEGA AiMe limited edition");
        assert_eq!(CardFamily::AicTaitoNesica.to_string(), "AIC Taito NESiCA");
    }

    #[test]
    fn card_protocol_classifies_known_atr_bytes() {
        assert_eq!(CardProtocol::try_from(0x11), Ok(CardProtocol::Iso14443Part3));
        assert_eq!(CardProtocol::try_from(0xF0), Ok(CardProtocol::Felica212k));
        assert_eq!(CardProtocol::try_from(0xF1), Ok(CardProtocol::Felica424k));
        assert!(CardProtocol::try_from(0x42).is_err());
    }

    #[test]
    fn empty_card_info_defaults_to_empty_family_and_blank_strings() {
        let info = CardInfo::empty();
        assert_eq!(info.card_type, CardFamily::Empty);
        assert_eq!(info.uid, "");
        assert_eq!(info.access_code, "");
    }
}
