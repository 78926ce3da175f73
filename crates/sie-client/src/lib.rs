/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # sie-client
//!
//! A client for the Banco de México SIE REST API.
//!
//! ## Features
//!
//! - **Request paths**: series id plus optional dates become
//!   `/series/{id}/datos/{start}/{end}` or the `oportuno` latest-value path
//! - **Normalized results**: the nested `bmx.series[].datos[]` envelope is
//!   collapsed to a bare value, a date map, or a map of date maps
//! - **Typed errors**: transport, status, body, JSON, envelope and date
//!   failures are distinct [`Error`] variants with their causes chained
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sie_client::SieClient;
//! use sie_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SieClient::from_config(Config::from_env()?)?;
//!
//!     let fix = client.exchange_rate_determination(None, None).await?;
//!     println!("Latest FIX: {:?}", fix.as_value());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, sie_core::Error>`. Nothing is retried; a
//! failed call leaves the client usable for the next one.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod request;
pub mod response;
pub mod transport;

// Re-export the main client and common types
pub use client::SieClient;
pub use request::{RequestBuilder, SeriesRequest};
pub use response::{HttpResponse, ResponseParser};
pub use sie_core::{Config, DateBound, DateRange, EnvelopeDefect, Error, Result, Series};
pub use sie_models::{DateValues, SeriesResult, SeriesValues};
pub use transport::{HttpClientFactory, Transport};
