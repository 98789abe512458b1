//! HTTP helpers: proxy-aware client IP extraction, canned plain-text
//! responses, streaming file download, and a fallback-guarded exchange-rate
//! fetch.
//!
//! Network access goes through the [`HttpClient`] trait so the two
//! network-bound operations ([`download_to_file`] and
//! [`gbp_exchange_rate`]) can be driven by mocks in tests; the production
//! implementation is [`ReqwestClient`]. Both operations block only the
//! calling task; callers wanting timeouts or cancellation wrap them
//! externally.

pub mod client;
pub mod error;
pub mod fetch;
pub mod rates;
pub mod request;
pub mod response;

pub use client::{BoxStream, HttpClient, ReqwestClient};
pub use error::{NetError, Result};
pub use fetch::download_to_file;
pub use rates::gbp_exchange_rate;
pub use request::real_addr;
pub use response::{bad_request, deny_access, redirect_to_home};
