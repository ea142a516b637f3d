//! Bearer-token verification primitives.
//!
//! - [`token`] -- JWT identity-token verification (and HS256 issuance for
//!   local development and tests).

pub mod token;
