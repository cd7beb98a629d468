//! A collection of presentation helpers which wrap common formatting tasks needed by web front-ends
//! Each helper is a pure leaf function; none of them coordinate or share state.
//!
//! # Conventions:
//! ### Truthiness
//! Falsy means exactly: `None`, numeric zero, the empty string, `false`
//! ### Locale
//! Money formatting follows English (United Kingdom) conventions throughout
//! ### Errors
//! The only failure is an unrecognised currency code, surfaced to the caller
//! as [`money::MoneyError`] with no local recovery

pub mod casing; // String casing
pub mod fut; // Future output resolution
pub mod money; // Locale money formatting
pub mod truthy; // Truthiness filtering
