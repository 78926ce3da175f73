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

//! # sie-core
//!
//! Core types shared by the sie-* crates: configuration, the error taxonomy,
//! the table of well-known series and the date handling used to build
//! request paths.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{BoxError, EnvelopeDefect, Error, Result};
pub use types::{normalize_date, normalize_date_string, DateBound, DateRange, CANONICAL_DATE_FORMAT};

use std::str::FromStr;

/// Base URL for the Banxico SIE REST API
pub const SIE_BASE_URL: &str = "https://www.banxico.org.mx/SieAPIRest/service/v1";

/// Path segment the service reads as "latest available value"
pub const LATEST_SENTINEL: &str = "oportuno";

/// Header carrying the API token (`Bmx-Token`), lowercase as HTTP/2 requires
pub const AUTH_HEADER: &str = "bmx-token";

/// User agent sent when the configuration does not override it
pub const DEFAULT_USER_AGENT: &str = concat!("sie-client/", env!("CARGO_PKG_VERSION"));

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// USD/MXN exchange rate used to settle obligations (FIX)
pub const SERIES_USD_EXCHANGE_RATE_DETERMINATION: &str = "SF43718";

/// USD/MXN exchange rate for payments of dollar-denominated obligations
pub const SERIES_USD_EXCHANGE_RATE_LIQUIDATION: &str = "SF60653";

/// Series the client exposes named operations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
  /// `SF43718`
  ExchangeRateDetermination,
  /// `SF60653`
  ExchangeRateLiquidation,
}

impl Series {
  /// Every well-known series
  pub const ALL: [Series; 2] = [Series::ExchangeRateDetermination, Series::ExchangeRateLiquidation];

  /// Identifier used in the request path
  pub const fn id(&self) -> &'static str {
    match self {
      Series::ExchangeRateDetermination => SERIES_USD_EXCHANGE_RATE_DETERMINATION,
      Series::ExchangeRateLiquidation => SERIES_USD_EXCHANGE_RATE_LIQUIDATION,
    }
  }

  /// Name of the client operation bound to this series
  pub const fn name(&self) -> &'static str {
    match self {
      Series::ExchangeRateDetermination => "exchange_rate_determination",
      Series::ExchangeRateLiquidation => "exchange_rate_liquidation",
    }
  }
}

impl std::fmt::Display for Series {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.id())
  }
}

impl FromStr for Series {
  type Err = Error;

  /// Accepts either the series id or the operation name.
  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
    Series::ALL
      .into_iter()
      .find(|series| series.id().eq_ignore_ascii_case(&wanted) || series.name() == wanted)
      .ok_or_else(|| Error::Configuration(format!("Unknown series: {}", s)))
  }
}
