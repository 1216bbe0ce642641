//! Synthetic person-profile generation and aggregation.
//!
//! The same statistics are computed over two representations of a profile:
//! a named-field struct ([`domain::Profile`]) and a string-keyed mapping
//! ([`domain::KeyedProfile`]). Each run is timed so the representations can
//! be compared.

pub mod app;
pub mod comparison;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod source;
pub mod timing;
