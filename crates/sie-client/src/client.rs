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

//! The [`SieClient`] facade

use crate::request::RequestBuilder;
use crate::response::ResponseParser;
use crate::transport::Transport;
use reqwest::ClientBuilder;
use sie_core::{Config, Result, Series};
use sie_models::SeriesResult;
use tracing::{info, instrument};

/// Banxico SIE REST API client
///
/// Builds the request for a series, sends it once and normalizes the answer.
/// The underlying HTTP client is configured with the token, `Accept` and
/// user agent headers when the client is created and reused for every call.
///
/// # Examples
///
/// ```ignore
/// use sie_client::SieClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SieClient::new("my-token")?;
///
///     // Latest FIX exchange rate, a single value
///     let latest = client.exchange_rate_determination(None, None).await?;
///     println!("FIX: {:?}", latest.as_value());
///
///     // A week of liquidation rates, keyed by date
///     let week = client.exchange_rate_liquidation(Some("2020-11-23"), Some("2020-11-27")).await?;
///     for (date, rate) in week.as_dates().into_iter().flat_map(|d| d.iter()) {
///         println!("{}: {}", date, rate);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SieClient {
  requests: RequestBuilder,
  transport: Transport,
  parser: ResponseParser,
}

impl SieClient {
  /// Create a client for `token` against the public SIE endpoint
  ///
  /// # Errors
  ///
  /// Returns [`sie_core::Error::Configuration`] if the token is empty or the
  /// HTTP client cannot be created.
  pub fn new(token: impl Into<String>) -> Result<Self> {
    Self::from_config(Config::new(token))
  }

  /// Create a client against another base URI, e.g. a proxy or mock server
  pub fn with_base_uri(token: impl Into<String>, base_uri: impl Into<String>) -> Result<Self> {
    Self::from_config(Config::new(token).with_base_url(base_uri))
  }

  /// Create a client from a full configuration
  pub fn from_config(config: Config) -> Result<Self> {
    let transport = Transport::new(&config)?;
    Ok(Self::assemble(config, transport))
  }

  /// Create a client on top of a caller supplied HTTP client builder.
  ///
  /// The builder keeps its own settings; the SIE headers and timeout are
  /// added to it.
  pub fn with_http_client(config: Config, builder: ClientBuilder) -> Result<Self> {
    let transport = Transport::with_builder(builder, &config)?;
    Ok(Self::assemble(config, transport))
  }

  fn assemble(config: Config, transport: Transport) -> Self {
    Self { requests: RequestBuilder::new(config.base_url), transport, parser: ResponseParser::new() }
  }

  /// Base URI requests are built on
  pub fn base_uri(&self) -> &str {
    self.requests.base_uri()
  }

  /// Fetch `series` between two optional, loosely formatted dates.
  ///
  /// Without a start date the latest value is requested; with only a start
  /// date that single day is requested.
  ///
  /// # Errors
  ///
  /// [`sie_core::Error::TransportFailed`] when no response is received,
  /// otherwise whatever [`ResponseParser::parse`] reports.
  #[instrument(skip(self))]
  pub async fn fetch_series(&self, series: &str, start: Option<&str>, end: Option<&str>) -> Result<SeriesResult> {
    let request = self.requests.create_request(series, start, end);
    let response = self.transport.send(&request).await?;
    let result = self.parser.parse(response).await?;
    info!("Fetched series {} ({})", series, request.path_suffix());
    Ok(result)
  }

  /// Fetch one of the well-known series
  pub async fn fetch(&self, series: Series, start: Option<&str>, end: Option<&str>) -> Result<SeriesResult> {
    self.fetch_series(series.id(), start, end).await
  }

  /// USD/MXN exchange rate determination (FIX), series `SF43718`
  pub async fn exchange_rate_determination(&self, start: Option<&str>, end: Option<&str>) -> Result<SeriesResult> {
    self.fetch(Series::ExchangeRateDetermination, start, end).await
  }

  /// USD/MXN exchange rate for liquidation of obligations, series `SF60653`
  pub async fn exchange_rate_liquidation(&self, start: Option<&str>, end: Option<&str>) -> Result<SeriesResult> {
    self.fetch(Series::ExchangeRateLiquidation, start, end).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use sie_core::Error;

  #[test]
  fn test_client_creation() {
    let client = SieClient::new("test_token").expect("Failed to create client");
    assert_eq!(client.base_uri(), sie_core::SIE_BASE_URL);
  }

  #[test]
  fn test_client_with_base_uri() {
    let client = SieClient::with_base_uri("test_token", "http://localhost:9999/v1").unwrap();
    assert_eq!(client.base_uri(), "http://localhost:9999/v1");
  }

  #[test]
  fn test_missing_token_is_configuration_error() {
    assert!(matches!(SieClient::new(""), Err(Error::Configuration(_))));
    assert!(matches!(SieClient::new(" \t"), Err(Error::Configuration(_))));
  }

  #[test]
  fn test_custom_http_client_builder() {
    let builder = reqwest::Client::builder().connect_timeout(std::time::Duration::from_secs(2));
    let client = SieClient::with_http_client(Config::new("t"), builder).unwrap();
    assert_eq!(client.base_uri(), sie_core::SIE_BASE_URL);
  }

  #[test]
  fn test_client_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SieClient>();
  }
}
