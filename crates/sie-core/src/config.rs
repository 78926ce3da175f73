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

//! Configuration management for the Banxico SIE client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the SIE client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// SIE API token, sent in the `Bmx-Token` header
  #[serde(skip_serializing)]
  pub token: String,

  /// Base URL for the SIE REST API, used verbatim as a path prefix
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// User agent sent with every request
  pub user_agent: String,
}

impl Config {
  /// Create a config for `token` with default values
  pub fn new(token: impl Into<String>) -> Self {
    Config {
      token: token.into(),
      base_url: crate::SIE_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      user_agent: crate::DEFAULT_USER_AGENT.to_string(),
    }
  }

  /// Override the base URL
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Override the request timeout
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let token = env::var("BANXICO_TOKEN")
      .map_err(|_| Error::Configuration("BANXICO_TOKEN not set".to_string()))?;

    let base_url = env::var("SIE_BASE_URL").unwrap_or_else(|_| crate::SIE_BASE_URL.to_string());

    let timeout_secs = env::var("SIE_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Configuration("Invalid SIE_TIMEOUT_SECS".to_string()))?;

    let user_agent =
      env::var("SIE_USER_AGENT").unwrap_or_else(|_| crate::DEFAULT_USER_AGENT.to_string());

    let config = Config { token, base_url, timeout_secs, user_agent };
    config.validate()?;
    Ok(config)
  }

  /// Reject configurations that cannot authenticate
  pub fn validate(&self) -> Result<()> {
    if self.token.trim().is_empty() {
      return Err(Error::Configuration("API token is required".to_string()));
    }
    Ok(())
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("token", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .field("user_agent", &self.user_agent)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_defaults() {
    let config = Config::new("test_token");
    assert_eq!(config.token, "test_token");
    assert_eq!(config.base_url, crate::SIE_BASE_URL);
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_config_rejects_blank_token() {
    let config = Config::new("   ");
    assert!(matches!(config.validate(), Err(Error::Configuration(_))));
  }

  #[test]
  fn test_config_overrides() {
    let config = Config::new("t").with_base_url("http://localhost:8080").with_timeout_secs(5);
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_secs, 5);
  }

  #[test]
  fn test_debug_hides_token() {
    let config = Config::new("super-secret");
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
  }

  #[test]
  fn test_serialized_config_omits_token() {
    let config = Config::new("super-secret").with_base_url("http://localhost:8080");
    let json = serde_json::to_value(&config).unwrap();
    assert!(json.get("token").is_none());
    assert_eq!(json["base_url"], "http://localhost:8080");
    assert!(!json.to_string().contains("super-secret"));
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("BANXICO_TOKEN", "env_token");
    env::set_var("SIE_TIMEOUT_SECS", "12");
    let config = Config::from_env().unwrap();
    assert_eq!(config.token, "env_token");
    assert_eq!(config.timeout_secs, 12);
  }
}
