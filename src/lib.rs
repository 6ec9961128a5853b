//! Amalgam merges a header-only C++ library into a single header.
//!
//! Starting from an entry header, project headers are inlined recursively where they are first
//! included. External includes are kept once, at their first occurrence. Line comments and the
//! project's include guards are stripped, and the result is wrapped into a license banner and a
//! single include guard.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod cmd;
pub mod config;
pub mod directive;
#[allow(missing_docs)]
pub mod files;
pub mod inline;
#[allow(missing_docs)]
pub mod print;
mod util;

pub use inline::Inliner;
pub use util::Fallible;
