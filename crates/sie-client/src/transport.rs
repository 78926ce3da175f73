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

//! HTTP transport layer for SIE API requests

use crate::request::SeriesRequest;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder, Response};
use sie_core::{Config, Error, Result, AUTH_HEADER};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Builds the HTTP client used for every request of a [`Transport`].
pub struct HttpClientFactory;

impl HttpClientFactory {
  /// Create a client with the standard SIE headers
  pub fn create(config: &Config) -> Result<Client> {
    Self::create_with(Client::builder(), config)
  }

  /// Add the standard SIE headers and timeout to a caller supplied builder
  pub fn create_with(builder: ClientBuilder, config: &Config) -> Result<Client> {
    config.validate()?;

    builder
      .default_headers(Self::default_headers(config)?)
      .user_agent(config.user_agent.as_str())
      .timeout(Duration::from_secs(config.timeout_secs))
      .redirect(Policy::none())
      .build()
      .map_err(|e| Error::Configuration(format!("Failed to create HTTP client: {}", e)))
  }

  /// `Accept` and token headers sent with every request
  pub fn default_headers(config: &Config) -> Result<HeaderMap> {
    let mut token = HeaderValue::from_str(config.token.trim())
      .map_err(|_| Error::Configuration("API token is not a valid header value".to_string()))?;
    token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static(AUTH_HEADER), token);
    Ok(headers)
  }
}

/// HTTP transport layer for making requests to the SIE API
pub struct Transport {
  client: Client,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self { client: HttpClientFactory::create(config)?, timeout: Duration::from_secs(config.timeout_secs) })
  }

  /// Create a transport on top of a caller supplied client builder
  pub fn with_builder(builder: ClientBuilder, config: &Config) -> Result<Self> {
    Ok(Self {
      client: HttpClientFactory::create_with(builder, config)?,
      timeout: Duration::from_secs(config.timeout_secs),
    })
  }

  /// Send `request` once.
  ///
  /// Any status is returned as-is; only failures to get a response at all
  /// become [`Error::TransportFailed`].
  #[instrument(skip_all, fields(uri = %request.uri()))]
  pub async fn send(&self, request: &SeriesRequest) -> Result<Response> {
    debug!("Making request to: {}", request.uri());

    let response = self
      .client
      .request(request.method().clone(), request.uri())
      .send()
      .await
      .map_err(|e| {
        error!("Request failed: {}", e);
        Error::transport(e)
      })?;

    debug!("Response status: {}", response.status());
    Ok(response)
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport").field("timeout", &self.timeout).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use reqwest::header::USER_AGENT;

  #[test]
  fn test_default_headers() {
    let headers = HttpClientFactory::default_headers(&Config::new("abc123")).unwrap();
    assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");

    let token = headers.get(AUTH_HEADER).unwrap();
    assert_eq!(token, "abc123");
    assert!(token.is_sensitive());
    assert!(headers.get(USER_AGENT).is_none());
  }

  #[test]
  fn test_blank_token_is_rejected() {
    assert!(matches!(HttpClientFactory::create(&Config::new("")), Err(Error::Configuration(_))));
  }

  #[test]
  fn test_token_with_newline_is_rejected() {
    let result = HttpClientFactory::default_headers(&Config::new("abc\ndef"));
    assert!(matches!(result, Err(Error::Configuration(_))));
  }

  #[test]
  fn test_transport_timeout() {
    let transport = Transport::new(&Config::new("t").with_timeout_secs(7)).unwrap();
    assert_eq!(transport.timeout(), Duration::from_secs(7));
  }

  #[tokio::test]
  async fn test_unreachable_uri_is_transport_failure() {
    let transport = Transport::new(&Config::new("t")).unwrap();
    let request = crate::request::RequestBuilder::new("not a uri").create_request("SF43718", None, None);
    let result = transport.send(&request).await;
    assert!(matches!(result, Err(Error::TransportFailed { .. })));
  }
}
