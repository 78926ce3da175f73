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

use thiserror::Error;

/// Boxed cause carried by transport and body-read failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for sie-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error, e.g. a missing token
  #[error("Configuration error: {0}")]
  Configuration(String),

  /// The HTTP request could not be sent or no response was received
  #[error("HTTP request failed")]
  TransportFailed {
    /// Underlying transport error
    #[source]
    source: BoxError,
  },

  /// The service answered with a status other than 200
  #[error("Request failed with status {status}")]
  RequestFailed {
    /// HTTP status code returned by the service
    status: u16,
  },

  /// The response body could not be read
  #[error("Could not get response content")]
  BodyReadFailed {
    /// Underlying read error
    #[source]
    source: BoxError,
  },

  /// The response body is not valid JSON
  #[error("Response parsing failed: malformed JSON")]
  MalformedJson(#[from] serde_json::Error),

  /// The response body is JSON but not a series envelope
  #[error("Response parsing failed: {0}")]
  MalformedEnvelope(EnvelopeDefect),

  /// A datum carried a date that is not `DD/MM/YYYY`
  #[error("Invalid date format: {value:?}")]
  InvalidDateFormat {
    /// The offending date text
    value: String,
    /// Parser error
    #[source]
    source: chrono::ParseError,
  },
}

impl Error {
  /// Wrap a transport-level failure
  pub fn transport<E>(source: E) -> Self
  where
    E: Into<BoxError>,
  {
    Error::TransportFailed { source: source.into() }
  }

  /// Wrap a body read failure
  pub fn body_read<E>(source: E) -> Self
  where
    E: Into<BoxError>,
  {
    Error::BodyReadFailed { source: source.into() }
  }

  /// HTTP status attached to the error, if any
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::RequestFailed { status } => Some(*status),
      _ => None,
    }
  }

  /// Numeric code mirroring the service client's historical exception codes.
  ///
  /// Non-200 statuses report the status itself.
  pub fn code(&self) -> u16 {
    match self {
      Error::RequestFailed { status } => *status,
      Error::BodyReadFailed { .. } => 1,
      Error::MalformedJson(_) => 2,
      Error::MalformedEnvelope(defect) => defect.code(),
      _ => 0,
    }
  }
}

/// Ways a decoded body can fail to match the series envelope shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeDefect {
  /// The top-level JSON value is not an object
  NotAnObject,
  /// `bmx.series` is missing or is not an array
  MissingSeries,
  /// A series entry or one of its data points has the wrong shape
  InvalidSeries {
    /// Position of the entry within `bmx.series`
    index: usize,
    /// Description of the violation
    reason: String,
  },
}

impl EnvelopeDefect {
  /// Sub-code reported through [`Error::code`]
  pub fn code(&self) -> u16 {
    match self {
      EnvelopeDefect::NotAnObject => 3,
      EnvelopeDefect::MissingSeries => 4,
      EnvelopeDefect::InvalidSeries { .. } => 5,
    }
  }
}

impl std::fmt::Display for EnvelopeDefect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EnvelopeDefect::NotAnObject => write!(f, "top-level value is not an object"),
      EnvelopeDefect::MissingSeries => write!(f, "missing bmx.series array"),
      EnvelopeDefect::InvalidSeries { index, reason } => {
        write!(f, "invalid series at index {}: {}", index, reason)
      }
    }
  }
}

impl From<EnvelopeDefect> for Error {
  fn from(defect: EnvelopeDefect) -> Self {
    Error::MalformedEnvelope(defect)
  }
}

/// Result type alias for sie-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error as _;

  #[test]
  fn test_request_failed_exposes_status() {
    let err = Error::RequestFailed { status: 404 };
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.code(), 404);
    assert_eq!(err.to_string(), "Request failed with status 404");
  }

  #[test]
  fn test_envelope_defect_codes() {
    assert_eq!(Error::from(EnvelopeDefect::NotAnObject).code(), 3);
    assert_eq!(Error::from(EnvelopeDefect::MissingSeries).code(), 4);
    let err = Error::from(EnvelopeDefect::InvalidSeries { index: 2, reason: "no idSerie".into() });
    assert_eq!(err.code(), 5);
    assert!(err.to_string().contains("index 2"));
  }

  #[test]
  fn test_transport_error_keeps_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = Error::transport(io);
    let source = err.source().expect("cause should be chained");
    assert_eq!(source.to_string(), "refused");
    assert_eq!(err.status(), None);
  }

  #[test]
  fn test_invalid_date_keeps_cause() {
    let parse_err = chrono::NaiveDate::parse_from_str("99/99/2020", "%d/%m/%Y").unwrap_err();
    let err = Error::InvalidDateFormat { value: "99/99/2020".into(), source: parse_err };
    assert!(err.source().is_some());
    assert!(err.to_string().contains("99/99/2020"));
  }
}
