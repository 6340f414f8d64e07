//! Masking functions for detected PII values.
//!
//! Maskers are pure string transformations. They do not traverse records,
//! decide what counts as PII, or consult the format gates: each one validates
//! its own input against the field's format and produces either a masked form
//! or an explicit invalid marker. Every masker is total — any input string
//! yields an output string.
//!
//! All maskers trim leading and trailing whitespace at entry, and character
//! positions are Unicode scalar values, not bytes.

use crate::classification::{QuasiIdentifier, StandaloneField};

/// Marker emitted when a phone value fails the masker's format check.
pub const INVALID_PHONE: &str = "[INVALID_PHONE]";

/// Marker emitted when an Aadhaar value fails the masker's format check.
pub const INVALID_AADHAR: &str = "[INVALID_AADHAR]";

/// Marker emitted when a passport value fails the masker's format check.
pub const INVALID_PASSPORT: &str = "[INVALID_PASSPORT]";

/// Marker emitted when a UPI id has no `@` or an empty user part.
pub const INVALID_UPI: &str = "[INVALID_UPI]";

/// Full-redaction marker for email addresses.
pub const REDACTED_EMAIL: &str = "[REDACTED_EMAIL]";

/// Full-redaction marker for postal addresses.
pub const REDACTED_ADDRESS: &str = "[REDACTED_ADDRESS]";

/// Full-redaction marker for IP addresses.
pub const REDACTED_IP: &str = "[REDACTED_IP]";

/// Full-redaction marker for device identifiers.
pub const REDACTED_DEVICE: &str = "[REDACTED_DEVICE]";

/// Masks a 10-digit phone number, keeping the first and last two digits.
///
/// `"9876543210"` becomes `"98XXXXXX10"`. Anything that is not exactly ten
/// ASCII digits after trimming becomes [`INVALID_PHONE`].
pub fn mask_phone(raw: &str) -> String {
    let value = raw.trim();
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}XXXXXX{}", &value[..2], &value[8..])
    } else {
        INVALID_PHONE.to_string()
    }
}

/// Masks a 12-digit Aadhaar number, keeping only the last four digits.
///
/// `"123412341234"` becomes `"XXXX XXXX 1234"`. Anything that is not exactly
/// twelve ASCII digits after trimming becomes [`INVALID_AADHAR`].
pub fn mask_aadhaar(raw: &str) -> String {
    let value = raw.trim();
    if value.len() == 12 && value.bytes().all(|b| b.is_ascii_digit()) {
        format!("XXXX XXXX {}", &value[8..])
    } else {
        INVALID_AADHAR.to_string()
    }
}

/// Masks a passport number, keeping only the leading letter.
///
/// `"P1234567"` becomes `"PXXXXXXX"`. Anything that is not one uppercase
/// ASCII letter followed by seven ASCII digits becomes [`INVALID_PASSPORT`].
pub fn mask_passport(raw: &str) -> String {
    let value = raw.trim();
    let bytes = value.as_bytes();
    let valid = bytes.len() == 8
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().all(u8::is_ascii_digit);
    if valid {
        format!("{}XXXXXXX", &value[..1])
    } else {
        INVALID_PASSPORT.to_string()
    }
}

/// Masks a UPI id, obscuring the user part and keeping the domain.
///
/// The user part keeps its first two characters, gains a literal `"XXX"`, and
/// keeps the remainder: `"ab@domain.com"` becomes `"abXXX@domain.com"`, and a
/// one-character user is kept whole (`"a@bank"` becomes `"aXXX@bank"`). A
/// value without `@`, or with an empty user part, becomes [`INVALID_UPI`].
pub fn mask_upi(raw: &str) -> String {
    let value = raw.trim();
    if let Some((user, domain)) = value.split_once('@') {
        if !user.is_empty() {
            let prefix: String = user.chars().take(2).collect();
            let rest: String = user.chars().skip(2).collect();
            return format!("{prefix}XXX{rest}@{domain}");
        }
    }
    INVALID_UPI.to_string()
}

/// Masks a personal name token by token.
///
/// Each whitespace-separated token keeps its first character and replaces the
/// rest with `"X"`; tokens are rejoined with single spaces and empty tokens
/// are skipped. `"John Smith"` becomes `"JXXX SXXXX"`. This masker always
/// succeeds; an all-whitespace input yields an empty string.
pub fn mask_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut masked = String::from(first);
            masked.push_str(&"X".repeat(chars.count()));
            masked
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn mask_full(raw: &str, marker: &str) -> String {
    if raw.is_empty() {
        raw.to_string()
    } else {
        marker.to_string()
    }
}

/// Masker bindings for the classification tables.
impl StandaloneField {
    /// Masks `raw` according to this field's policy.
    pub fn mask(self, raw: &str) -> String {
        match self {
            Self::Phone => mask_phone(raw),
            Self::Aadhaar => mask_aadhaar(raw),
            Self::Passport => mask_passport(raw),
            Self::UpiId => mask_upi(raw),
        }
    }
}

impl QuasiIdentifier {
    /// Masks `raw` according to this field's policy.
    ///
    /// Email is replaced outright; address, IP, and device values are
    /// replaced with their full-redaction markers unless empty, in which
    /// case they pass through unchanged.
    pub fn mask(self, raw: &str) -> String {
        match self {
            Self::Name => mask_name(raw),
            Self::Email => REDACTED_EMAIL.to_string(),
            Self::Address => mask_full(raw, REDACTED_ADDRESS),
            Self::IpAddress => mask_full(raw, REDACTED_IP),
            Self::DeviceId => mask_full(raw, REDACTED_DEVICE),
        }
    }
}
