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

//! Normalized series results

use serde::ser::{Serialize, SerializeMap, Serializer};

/// String-keyed map that remembers insertion order.
///
/// Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

/// Canonical date (`YYYY-MM-DD`) to value
pub type DateValues = OrderedMap<String>;

/// Series identifier to its dated values
pub type SeriesValues = OrderedMap<DateValues>;

impl<V> OrderedMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Create an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// First entry in insertion order
    pub fn first(&self) -> Option<(&str, &V)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Last entry in insertion order
    pub fn last(&self) -> Option<(&str, &V)> {
        self.entries.last().map(|(k, v)| (k.as_str(), v))
    }

    /// The only value, or the map itself when it does not hold exactly one entry
    pub fn into_single(mut self) -> Result<V, Self> {
        if self.entries.len() == 1 {
            if let Some((_, value)) = self.entries.pop() {
                return Ok(value);
            }
        }
        Err(self)
    }

    /// Consume the map, keeping insertion order
    pub fn into_inner(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Result of a series request after redundant nesting has been removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesResult {
    /// One series with exactly one data point
    Value(String),
    /// One series with any other number of data points
    Dates(DateValues),
    /// More than one series
    Series(SeriesValues),
}

impl SeriesResult {
    /// Remove single-entry layers, outermost first.
    ///
    /// At most two layers are unwrapped: a lone series becomes its date map,
    /// and a lone data point of that series becomes its value. Several series
    /// are never unwrapped.
    pub fn collapse(series: SeriesValues) -> Self {
        let dates = match series.into_single() {
            Ok(dates) => dates,
            Err(series) => return SeriesResult::Series(series),
        };
        match dates.into_single() {
            Ok(value) => SeriesResult::Value(value),
            Err(dates) => SeriesResult::Dates(dates),
        }
    }

    /// The bare value, for a single data point
    pub fn as_value(&self) -> Option<&str> {
        match self {
            SeriesResult::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The date map, for a single series
    pub fn as_dates(&self) -> Option<&DateValues> {
        match self {
            SeriesResult::Dates(dates) => Some(dates),
            _ => None,
        }
    }

    /// The per-series date maps, for several series
    pub fn as_series(&self) -> Option<&SeriesValues> {
        match self {
            SeriesResult::Series(series) => Some(series),
            _ => None,
        }
    }

    /// Value parsed as a float, for the single-value shape
    pub fn value_as_f64(&self) -> Option<f64> {
        self.as_value().and_then(|value| value.trim().parse().ok())
    }
}

impl Serialize for SeriesResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeriesResult::Value(value) => serializer.serialize_str(value),
            SeriesResult::Dates(dates) => dates.serialize(serializer),
            SeriesResult::Series(series) => series.serialize(serializer),
        }
    }
}
