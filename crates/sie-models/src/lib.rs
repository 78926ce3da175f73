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

//! # sie-models
//!
//! Data models for Banxico SIE API responses.
//!
//! - [`envelope`] mirrors the JSON the service sends (`bmx.series[].datos[]`).
//! - [`result`] holds the normalized shapes handed back to callers: a bare
//!   value, a date map, or a map of date maps keyed by series id.
//!
//! ## Usage
//!
//! ```ignore
//! use sie_models::envelope::SeriesEnvelope;
//!
//! let envelope: SeriesEnvelope = serde_json::from_str(&response_json)?;
//! ```

#![warn(clippy::all)]

pub mod envelope;
pub mod result;

pub use envelope::{is_numeric, Bmx, Datum, RawSeries, SeriesEnvelope};
pub use result::{DateValues, OrderedMap, SeriesResult, SeriesValues};
