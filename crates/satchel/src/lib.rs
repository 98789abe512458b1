//! Formatting, date, and collection helpers.
//!
//! A grab-bag of small, stateless functions: thousands-separator formatting,
//! date arithmetic and long-form rendering, order-preserving dedup, a
//! tab-indenting JSON pretty-printer, and a few file-open conveniences.
//! Everything here is synchronous and dependency-light; the network-facing
//! helpers live in the `satchel-net` crate.

pub mod collect;
pub mod date;
pub mod fs;
pub mod json;
pub mod num;
pub mod text;
pub mod value;

pub use date::DateError;
pub use value::NotAString;
