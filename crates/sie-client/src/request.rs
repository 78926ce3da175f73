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

//! Construction of series requests

use reqwest::Method;
use sie_core::{DateRange, SIE_BASE_URL};

/// A GET request for one series, ready to hand to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
  method: Method,
  uri: String,
  range: DateRange,
}

impl SeriesRequest {
  /// HTTP method, always GET
  pub fn method(&self) -> &Method {
    &self.method
  }

  /// Full request URI
  pub fn uri(&self) -> &str {
    &self.uri
  }

  /// Date range the path was built from
  pub fn range(&self) -> DateRange {
    self.range
  }

  /// Segment(s) after `/datos/`
  pub fn path_suffix(&self) -> String {
    self.range.path_suffix()
  }
}

/// Builds request URIs of the form `{base}/series/{id}/datos/{suffix}`.
///
/// The base URI is used verbatim; slashes are neither added nor removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
  base_uri: String,
}

impl RequestBuilder {
  /// Create a builder for `base_uri`
  pub fn new(base_uri: impl Into<String>) -> Self {
    Self { base_uri: base_uri.into() }
  }

  /// Prefix every request URI starts with
  pub fn base_uri(&self) -> &str {
    &self.base_uri
  }

  /// Build the request for `series` between two loosely formatted dates.
  ///
  /// Missing or unparsable start dates request the latest value; a start
  /// without a usable end requests that single day.
  pub fn create_request(&self, series: &str, start: Option<&str>, end: Option<&str>) -> SeriesRequest {
    self.create_range_request(series, DateRange::resolve(start, end))
  }

  /// Build the request for `series` over an already resolved range
  pub fn create_range_request(&self, series: &str, range: DateRange) -> SeriesRequest {
    let uri = format!("{}/series/{}/datos/{}", self.base_uri, series, range.path_suffix());
    SeriesRequest { method: Method::GET, uri, range }
  }
}

impl Default for RequestBuilder {
  fn default() -> Self {
    Self::new(SIE_BASE_URL)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use url::Url;

  #[test]
  fn test_latest_request() {
    let request = RequestBuilder::default().create_request("SF43718", None, None);
    assert_eq!(request.method(), &Method::GET);

    let url = Url::parse(request.uri()).unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("www.banxico.org.mx"));
    assert_eq!(url.path(), "/SieAPIRest/service/v1/series/SF43718/datos/oportuno");
  }

  #[test]
  fn test_single_day_request() {
    let builder = RequestBuilder::new("http://www.example.com");
    let request = builder.create_request("SF60653", Some("2020-12-01"), None);

    let url = Url::parse(request.uri()).unwrap();
    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host_str(), Some("www.example.com"));
    assert_eq!(url.path(), "/series/SF60653/datos/2020-12-01/2020-12-01");
    assert_eq!(request.path_suffix(), "2020-12-01/2020-12-01");
  }

  #[test]
  fn test_date_range_request() {
    let request = RequestBuilder::default().create_request("SF60653", Some("2020-11-26"), Some("2020-11-27"));
    assert_eq!(
      request.uri(),
      "https://www.banxico.org.mx/SieAPIRest/service/v1/series/SF60653/datos/2020-11-26/2020-11-27"
    );
  }

  #[test]
  fn test_loose_dates_are_normalized() {
    let request = RequestBuilder::new("http://h").create_request("SF43718", Some("12/01/2020"), Some("20201215"));
    assert_eq!(request.uri(), "http://h/series/SF43718/datos/2020-12-01/2020-12-15");
  }

  #[test]
  fn test_unparsable_start_falls_back_to_latest() {
    let request = RequestBuilder::new("http://h").create_request("SF43718", Some("soon"), Some("2020-11-27"));
    assert_eq!(request.uri(), "http://h/series/SF43718/datos/oportuno");
    assert_eq!(request.range(), DateRange::Latest);
  }

  #[test]
  fn test_base_uri_is_used_verbatim() {
    let request = RequestBuilder::new("http://h/v1/").create_request("SF43718", None, None);
    assert_eq!(request.uri(), "http://h/v1//series/SF43718/datos/oportuno");

    let request = RequestBuilder::new("").create_request("SF43718", None, None);
    assert_eq!(request.uri(), "/series/SF43718/datos/oportuno");
  }

  #[test]
  fn test_every_suffix_has_a_known_shape() {
    let inputs = [None, Some("2020-11-26"), Some("garbage"), Some("2020-11-27")];
    let builder = RequestBuilder::new("http://h");
    for start in inputs {
      for end in inputs {
        let request = builder.create_request("SF43718", start, end);
        let suffix = request.uri().strip_prefix("http://h/series/SF43718/datos/").unwrap();
        let parts: Vec<&str> = suffix.split('/').collect();
        match parts.as_slice() {
          ["oportuno"] => assert_eq!(request.range(), DateRange::Latest),
          [a, b] if a == b => assert!(matches!(request.range(), DateRange::SingleDay(_) | DateRange::Between(..))),
          [_, _] => assert!(matches!(request.range(), DateRange::Between(..))),
          other => panic!("unexpected suffix {:?}", other),
        }
      }
    }
  }
}
