//! Output of collected domains.
//!
//! Domains are written as plain text, one per line in ascending order.

mod text;

pub use text::write_domains;
