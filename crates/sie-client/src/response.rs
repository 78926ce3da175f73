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

//! Validation and normalization of series responses

use chrono::NaiveDate;
use serde_json::Value;
use sie_core::{BoxError, EnvelopeDefect, Error, Result, CANONICAL_DATE_FORMAT};
use sie_models::{DateValues, RawSeries, SeriesResult, SeriesValues};
use tracing::{debug, error, instrument};

/// The only status the service uses for a successful answer
pub const HTTP_STATUS_SUCCESS: u16 = 200;

/// Date layout used by the service in `fecha`
pub const RESPONSE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Status code plus a body that is read lazily
#[allow(async_fn_in_trait)]
pub trait HttpResponse {
  /// HTTP status code
  fn status_code(&self) -> u16;

  /// Read the whole body as text
  async fn body_text(self) -> std::result::Result<String, BoxError>;
}

impl HttpResponse for reqwest::Response {
  fn status_code(&self) -> u16 {
    self.status().as_u16()
  }

  async fn body_text(self) -> std::result::Result<String, BoxError> {
    self.text().await.map_err(Into::into)
  }
}

/// Turns SIE responses into [`SeriesResult`] values.
///
/// Every step fails fast; nothing is skipped and no partial result is
/// returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser;

impl ResponseParser {
  /// Create a parser
  pub fn new() -> Self {
    Self
  }

  /// Check the status, read the body and normalize it
  #[instrument(skip_all, fields(status = response.status_code()))]
  pub async fn parse<R: HttpResponse>(&self, response: R) -> Result<SeriesResult> {
    let status = response.status_code();
    if status != HTTP_STATUS_SUCCESS {
      error!("Request failed with status: {}", status);
      return Err(Error::RequestFailed { status });
    }

    let text = response.body_text().await.map_err(Error::body_read)?;
    debug!("Response body length: {} bytes", text.len());
    #[cfg(feature = "debug-logging")]
    debug!(body = %text, "Response body");

    self.parse_body(&text)
  }

  /// Normalize an already read response body
  pub fn parse_body(&self, text: &str) -> Result<SeriesResult> {
    let mut root: Value = serde_json::from_str(text).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      Error::MalformedJson(e)
    })?;

    if !root.is_object() {
      return Err(EnvelopeDefect::NotAnObject.into());
    }

    let entries = match root.get_mut("bmx").and_then(|bmx| bmx.get_mut("series")).map(Value::take) {
      Some(Value::Array(entries)) => entries,
      _ => return Err(EnvelopeDefect::MissingSeries.into()),
    };

    let mut series = SeriesValues::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
      let raw: RawSeries = serde_json::from_value(entry)
        .map_err(|e| EnvelopeDefect::InvalidSeries { index, reason: e.to_string() })?;
      let dates = series_dates(&raw)?;
      debug!(series = %raw.id_serie, points = dates.len(), "Parsed series");
      series.insert(raw.id_serie, dates);
    }

    Ok(SeriesResult::collapse(series))
  }
}

/// Date map of one series, in the order the service sent the data
fn series_dates(raw: &RawSeries) -> Result<DateValues> {
  let mut dates = DateValues::with_capacity(raw.datos.len());
  for datum in &raw.datos {
    dates.insert(canonical_date(&datum.fecha)?, datum.dato.clone());
  }
  Ok(dates)
}

/// `DD/MM/YYYY` to `YYYY-MM-DD`
fn canonical_date(fecha: &str) -> Result<String> {
  NaiveDate::parse_from_str(fecha, RESPONSE_DATE_FORMAT)
    .map(|date| date.format(CANONICAL_DATE_FORMAT).to_string())
    .map_err(|source| Error::InvalidDateFormat { value: fecha.to_string(), source })
}
