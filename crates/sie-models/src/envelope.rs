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

//! Wire model of the SIE series response

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEnvelope {
    /// Banxico wrapper object
    pub bmx: Bmx,
}

/// Contents of the `bmx` wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bmx {
    /// Series in the order the service returned them
    pub series: Vec<RawSeries>,
}

/// One series as sent by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Series identifier, e.g. `SF43718`
    #[serde(rename = "idSerie")]
    pub id_serie: String,

    /// Human readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,

    /// Data points in the order the service returned them
    pub datos: Vec<Datum>,
}

/// One data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Observation date, `DD/MM/YYYY`
    pub fecha: String,

    /// Observed value, kept as its original text
    #[serde(deserialize_with = "deserialize_numeric_text")]
    pub dato: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericRepr {
    Number(serde_json::Number),
    Text(String),
}

/// Accept a JSON number or a numeric string, keeping the textual form.
fn deserialize_numeric_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumericRepr::deserialize(deserializer) {
        Ok(NumericRepr::Number(number)) => Ok(number.to_string()),
        Ok(NumericRepr::Text(text)) if is_numeric(&text) => Ok(text),
        Ok(NumericRepr::Text(text)) => Err(serde::de::Error::custom(format!(
            "dato {:?} is not numeric",
            text
        ))),
        Err(_) => Err(serde::de::Error::custom("dato must be a number or a numeric string")),
    }
}

/// Whether `text` reads as a decimal number.
///
/// Surrounding whitespace, a sign, a fraction and an exponent are allowed;
/// `inf`, `NaN` and thousands separators are not.
pub fn is_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && trimmed.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_deserialization() {
        let value = json!({
            "bmx": {
                "series": [{
                    "idSerie": "SF43718",
                    "titulo": "Tipo de cambio Pesos por dólar E.U.A.",
                    "datos": [{"fecha": "27/11/2020", "dato": "20.0777"}]
                }]
            }
        });

        let envelope: SeriesEnvelope = serde_json::from_value(value).unwrap();
        let series = &envelope.bmx.series[0];
        assert_eq!(series.id_serie, "SF43718");
        assert!(series.titulo.is_some());
        assert_eq!(series.datos[0].fecha, "27/11/2020");
        assert_eq!(series.datos[0].dato, "20.0777");
    }

    #[test]
    fn test_numeric_dato_is_kept_as_text() {
        let datum: Datum = serde_json::from_value(json!({"fecha": "26/11/2020", "dato": 20.0467})).unwrap();
        assert_eq!(datum.dato, "20.0467");

        let datum: Datum = serde_json::from_value(json!({"fecha": "26/11/2020", "dato": 7})).unwrap();
        assert_eq!(datum.dato, "7");
    }

    #[test]
    fn test_non_numeric_dato_is_rejected() {
        for dato in [json!("N/E"), json!(""), json!("NaN"), json!("1,234.5"), json!(null), json!(true)] {
            let result = serde_json::from_value::<Datum>(json!({"fecha": "26/11/2020", "dato": dato}));
            assert!(result.is_err(), "dato {:?} should be rejected", dato);
        }
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        assert!(serde_json::from_value::<RawSeries>(json!({"datos": []})).is_err());
        assert!(serde_json::from_value::<RawSeries>(json!({"idSerie": "SF43718"})).is_err());
        assert!(serde_json::from_value::<RawSeries>(json!({"idSerie": 43718, "datos": []})).is_err());
        assert!(serde_json::from_value::<Datum>(json!({"fecha": 20201127, "dato": "1"})).is_err());
    }

    #[test]
    fn test_is_numeric() {
        for text in ["20.0777", "-1.5", "+3", " 42 ", "1e3", ".5", "0", "1e400"] {
            assert!(is_numeric(text), "{:?}", text);
        }
        for text in ["", "abc", "inf", "-", "1.2.3", "N/E", "e5"] {
            assert!(!is_numeric(text), "{:?}", text);
        }
    }
}
