//! Office-address extraction for Congressional Directory (CDIR) biography text files.
//!
//! The per-document pipeline lives in [`parser`] and is pure: locate the
//! "Office Listings" block, strip noise, segment on periods, repair
//! continuation fragments, split concatenated addresses and classify each
//! result. Everything around it (discovery, filename metadata, name/party
//! header, report writing) is a thin wrapper.

pub mod document;
pub mod error;
pub mod header;
pub mod meta;
pub mod parser;
pub mod report;
pub mod settings;

pub use error::{ExtractError, Result};
