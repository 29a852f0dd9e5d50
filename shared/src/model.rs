use serde::Deserialize;
use thiserror::Error;

use crate::domain::Month;

/// One observed month, exactly as it appears in the fetched document.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    pub month: u32,
    /// Deviation from the base temperature, in degrees Celsius
    pub variance: f64,
}

impl TemperatureRecord {
    /// Zero-based month index, the heatmap row
    pub fn month_index(&self) -> Option<usize> {
        Month::from_number(self.month).map(Month::index)
    }
}

/// The full fetched document. Loaded once, never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<TemperatureRecord>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("dataset contains no monthly variance records")]
    EmptyDataset,
    #[error("record {index} has month {month}, expected 1-12")]
    MalformedRecord { index: usize, month: u32 },
}

impl Dataset {
    /// Absolute temperature for a record: base plus variance.
    pub fn temperature(&self, record: &TemperatureRecord) -> f64 {
        self.base_temperature + record.variance
    }

    /// Rejects documents the renderer cannot place: an empty record list,
    /// or records whose month falls outside 1-12.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.monthly_variance.is_empty() {
            return Err(DataError::EmptyDataset);
        }

        for (index, record) in self.monthly_variance.iter().enumerate() {
            if Month::from_number(record.month).is_none() {
                return Err(DataError::MalformedRecord {
                    index,
                    month: record.month,
                });
            }
        }

        Ok(())
    }

    /// The two tooltip lines for a record: "{year} - {month name}" and the
    /// temperature rounded to two decimals.
    pub fn tooltip_lines(&self, record: &TemperatureRecord) -> (String, String) {
        let month_name = Month::from_number(record.month).map_or("?", Month::name);
        let heading = format!("{} - {}", record.year, month_name);
        let body = format!("Temperatura: {:.2}°C", self.temperature(record));
        (heading, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                { "year": 1753, "month": 1, "variance": -1.366 },
                { "year": 1753, "month": 2, "variance": -2.223 },
                { "year": 1754, "month": 1, "variance": -0.146 }
            ]
        }"#
    }

    #[test]
    fn deserializes_the_document_shape() {
        let dataset: Dataset = serde_json::from_str(sample_json()).unwrap();
        assert!((dataset.base_temperature - 8.66).abs() < f64::EPSILON);
        assert_eq!(dataset.monthly_variance.len(), 3);
        assert_eq!(dataset.monthly_variance[1].month, 2);
        assert_eq!(dataset.monthly_variance[1].month_index(), Some(1));
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn temperature_offsets_variance_from_base() {
        let dataset: Dataset = serde_json::from_str(sample_json()).unwrap();
        let record = dataset.monthly_variance[0];
        assert!((dataset.temperature(&record) - 7.294).abs() < 1e-9);
    }

    #[test]
    fn empty_record_list_is_an_error() {
        let dataset: Dataset =
            serde_json::from_str(r#"{ "baseTemperature": 8.0, "monthlyVariance": [] }"#).unwrap();
        assert_eq!(dataset.validate(), Err(DataError::EmptyDataset));
    }

    #[test]
    fn month_outside_range_is_an_error() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                TemperatureRecord {
                    year: 1900,
                    month: 1,
                    variance: 0.0,
                },
                TemperatureRecord {
                    year: 1900,
                    month: 13,
                    variance: 0.0,
                },
            ],
        };
        assert_eq!(
            dataset.validate(),
            Err(DataError::MalformedRecord { index: 1, month: 13 })
        );
    }

    #[test]
    fn tooltip_text_matches_the_documented_format() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![TemperatureRecord {
                year: 1900,
                month: 1,
                variance: -0.5,
            }],
        };
        let (heading, body) = dataset.tooltip_lines(&dataset.monthly_variance[0]);
        assert_eq!(heading, "1900 - January");
        assert_eq!(body, "Temperatura: 7.50°C");
    }
}
