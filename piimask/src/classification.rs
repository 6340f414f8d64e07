//! Which payload fields are PII, and under what conditions.
//!
//! The tables here are fixed. There is no runtime configuration: a field is
//! classified by its name, and a standalone field is additionally gated by a
//! strict, anchored format pattern. Rule lookup is a match over an enum, not
//! dynamic dispatch.

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_GATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("PHONE_GATE should compile - this is a bug"));

static AADHAAR_GATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{12}$").expect("AADHAAR_GATE should compile - this is a bug"));

static PASSPORT_GATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]\d{7}$").expect("PASSPORT_GATE should compile - this is a bug")
});

// Narrower than `mask_upi`'s own validation: no dots or dashes on either
// side of the `@`. The gate alone decides whether masking is attempted.
static UPI_GATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+@\w+$").expect("UPI_GATE should compile - this is a bug"));

/// A field whose presence and correct format alone constitutes PII.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandaloneField {
    /// 10-digit phone number.
    Phone,
    /// 12-digit Aadhaar number (Indian national ID).
    Aadhaar,
    /// Passport number: one uppercase letter followed by 7 digits.
    Passport,
    /// UPI payment identifier, `user@handle`.
    UpiId,
}

impl StandaloneField {
    /// Every standalone field, in the order the detection pass visits them.
    pub const ALL: [Self; 4] = [Self::Phone, Self::Aadhaar, Self::Passport, Self::UpiId];

    /// The payload key this field is matched under.
    pub fn key(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Aadhaar => "aadhar",
            Self::Passport => "passport",
            Self::UpiId => "upi_id",
        }
    }

    /// Whether `raw` matches this field's strict format gate exactly.
    ///
    /// The gate is an anchored full match, not a substring search, and it is
    /// applied to the raw value as-is (no trimming).
    pub fn matches_format(self, raw: &str) -> bool {
        match self {
            Self::Phone => PHONE_GATE.is_match(raw),
            Self::Aadhaar => AADHAAR_GATE.is_match(raw),
            Self::Passport => PASSPORT_GATE.is_match(raw),
            Self::UpiId => UPI_GATE.is_match(raw),
        }
    }
}

/// A quasi-identifier: a field treated as PII only when it co-occurs with at
/// least one other quasi-identifier in the same record.
///
/// A bare first name identifies nobody; a name next to an IP address starts
/// to. The combinatorial detection pass counts how many of these are present
/// and non-empty, and masks all of them once two or more co-occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuasiIdentifier {
    /// Personal name, masked token by token.
    Name,
    /// Email address.
    Email,
    /// Postal address.
    Address,
    /// IP address (any notation).
    IpAddress,
    /// Hardware or advertising device identifier.
    DeviceId,
}

impl QuasiIdentifier {
    /// Every quasi-identifier, in the order the detection pass visits them.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Address,
        Self::IpAddress,
        Self::DeviceId,
    ];

    /// The payload key this field is matched under.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::IpAddress => "ip_address",
            Self::DeviceId => "device_id",
        }
    }
}
