//! Client for the DuckDuckGo zero-click (instant answer) API.
//!
//! ```rust,no_run
//! # async fn run() -> ddg_zero_click::Result<()> {
//! use ddg_zero_click::{Client, QueryOptions};
//!
//! let res = ddg_zero_click::zero_click("DuckDuckGo").await?;
//! println!("{}", res.abstract_html());
//!
//! let options = QueryOptions::default().with_secure(true).with_no_html(true);
//! let res = Client::new().zero_click("rust", &options).await?;
//! for section in res.related_topic_sections() {
//!     println!("{}: {} topics", section.name(), section.topics().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod models;

#[cfg(test)]
mod test;

pub use api::{Client, HttpTransport, Request, Transport, TransportResponse, zero_click};
pub use error::{DecodeError, Error, Result};
pub use models::{Category, Icon, Link, LinkSection, QueryOptions, Response};
