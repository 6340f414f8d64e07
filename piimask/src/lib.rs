//! Field-level PII detection and masking for JSON record payloads.
//!
//! This crate separates:
//! - **Classification**: which payload fields are PII, and under what
//!   conditions.
//! - **Masking**: how a detected value is obscured.
//!
//! Detection runs two independent passes over one record (a JSON object):
//!
//! - The **standalone pass** checks fields that are PII on their own (phone,
//!   Aadhaar, passport, UPI id). A field is masked only when its raw value
//!   matches the field's strict format gate exactly.
//! - The **combinatorial pass** checks quasi-identifiers (name, email,
//!   address, IP address, device id). No single one of these identifies a
//!   person, but two or more together plausibly re-identify one, so when at
//!   least two are present and non-empty, all of them are masked.
//!
//! Key rules:
//! - Masking is total: every masker accepts any string and returns either a
//!   masked form or an explicit invalid marker. Nothing panics on odd input.
//! - Non-string payload values are coerced to their JSON text before
//!   classification, so numeric phone numbers and the like still match.
//! - Fields outside the fixed rule tables pass through unchanged.
//! - Detection is one-pass: re-running `redact` over already-masked output
//!   re-validates masked values like any other input.
//!
//! What this crate does:
//! - defines the standalone and quasi-identifier field tables
//! - defines the per-field masking functions and redaction markers
//! - provides the [`redact`] entrypoint over a `serde_json` object
//!
//! What it does not do:
//! - perform I/O or logging
//! - scan free text for embedded PII (fields are matched by name)

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod classification;
mod redaction;

// Re-exports
pub use classification::{QuasiIdentifier, StandaloneField};
pub use redaction::{
    mask_aadhaar, mask_name, mask_passport, mask_phone, mask_upi, redact, Record, INVALID_AADHAR,
    INVALID_PASSPORT, INVALID_PHONE, INVALID_UPI, REDACTED_ADDRESS, REDACTED_DEVICE,
    REDACTED_EMAIL, REDACTED_IP,
};
