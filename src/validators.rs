//! Card-family validators (spec §4.4): pure functions that classify a
//! 20-digit candidate access code by prefix, or reject it.

use crate::model::CardFamily;

/// Prefixes identifying a Bandai Namco Banapass card read over Mifare
/// Classic. Repository-provided; `"307"` matches the worked example in
/// spec §8 scenario 2.
pub const BANAPASS_PREFIXES: &[&str] = &["300", "301", "302", "303", "307"];

/// Prefixes identifying a Classical AiMe card read over Mifare Classic
/// (5-digit match, unlike the 3-digit Banapass prefixes).
pub const CLASSICAL_AIME_PREFIXES: &[&str] = &["00100", "00101", "01000", "01001", "20001"];

/// Rejects unless `code` is exactly 20 ASCII decimal digits (spec §4.4
/// step 1, shared by both family validators).
fn is_well_formed_access_code(code: &str) -> bool {
    code.len() == 20 && code.bytes().all(|b| b.is_ascii_digit())
}

/// Classifies a Mifare-path candidate access code (spec §4.4: Mifare
/// validator). Returns `None` if malformed or unrecognized — the caller
/// maps that to `CardFamily::Unknown`.
pub fn validate_mifare(code: &str) -> Option<CardFamily> {
    if !is_well_formed_access_code(code) {
        return None;
    }

    let prefix3 = &code[0..3];
    if BANAPASS_PREFIXES.contains(&prefix3) {
        return Some(CardFamily::BandaiNamcoBanapass);
    }

    let prefix5 = &code[0..5];
    if CLASSICAL_AIME_PREFIXES.contains(&prefix5) {
        return Some(CardFamily::ClassicalAiMe);
    }

    None
}

/// Classifies a FeliCa-path candidate access code (spec §4.4: AIC
/// validator), dispatching on the first three digits.
pub fn validate_aic(code: &str) -> Option<CardFamily> {
    if !is_well_formed_access_code(code) {
        return None;
    }

    match &code[0..3] {
        "500" => Some(CardFamily::AicSegaAiMeLimited),
        "501" => Some(CardFamily::AicSegaAiMe),
        "510" => Some(CardFamily::AicBandaiNamcoBanapass),
        "520" => Some(CardFamily::AicKonamiEAmusement),
        "530" => Some(CardFamily::AicTaitoNesica),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length_or_non_digit() {
        assert_eq!(validate_mifare("3070120652285557236"), None); // 19 chars
        assert_eq!(validate_mifare("3076012065228555723X"), None);
        assert_eq!(validate_aic("5010123456789012345"), None); // 19 chars
    }

    #[test]
    fn scenario_2_banapass_prefix_matches() {
        // spec §8 scenario 2
        let code = "30760120652285557236";
        assert_eq!(validate_mifare(code), Some(CardFamily::BandaiNamcoBanapass));
    }

    #[test]
    fn scenario_3_unrecognized_prefix_is_rejected() {
        // spec §8 scenario 3
        let code = "99999999999999999999";
        assert_eq!(validate_mifare(code), None);
    }

    #[test]
    fn classical_aime_matches_on_five_digit_prefix() {
        let code = "00100123456789012345";
        assert_eq!(validate_mifare(code), Some(CardFamily::ClassicalAiMe));
    }

    #[test]
    fn scenario_4_aic_sega_aime_prefix_matches() {
        // spec §8 scenario 4
        let code = "50101234567890123456";
        assert_eq!(validate_aic(code), Some(CardFamily::AicSegaAiMe));
    }

    #[test]
    fn aic_validator_dispatches_all_five_prefixes() {
        assert_eq!(validate_aic("50000000000000000000"), Some(CardFamily::AicSegaAiMeLimited));
        assert_eq!(validate_aic("50100000000000000000"), Some(CardFamily::AicSegaAiMe));
        assert_eq!(validate_aic("51000000000000000000"), Some(CardFamily::AicBandaiNamcoBanapass));
        assert_eq!(validate_aic("52000000000000000000"), Some(CardFamily::AicKonamiEAmusement));
        assert_eq!(validate_aic("53000000000000000000"), Some(CardFamily::AicTaitoNesica));
        assert_eq!(validate_aic("49000000000000000000"), None);
    }

    #[test]
    fn invariant_every_accepted_code_is_twenty_decimal_digits() {
        for code in ["30760120652285557236", "50101234567890123456"] {
            assert_eq!(code.len(), 20);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
