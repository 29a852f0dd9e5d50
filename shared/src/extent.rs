use crate::model::{DataError, Dataset};

/// The four scalars every scale is derived from: raw year bounds and the
/// absolute temperature bounds (base plus variance, not raw variance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub min_year: i32,
    pub max_year: i32,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl Extents {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, DataError> {
        let mut records = dataset.monthly_variance.iter();
        let first = records.next().ok_or(DataError::EmptyDataset)?;

        let mut extents = Self {
            min_year: first.year,
            max_year: first.year,
            min_temp: dataset.temperature(first),
            max_temp: dataset.temperature(first),
        };

        for record in records {
            let temp = dataset.temperature(record);
            extents.min_year = extents.min_year.min(record.year);
            extents.max_year = extents.max_year.max(record.year);
            extents.min_temp = extents.min_temp.min(temp);
            extents.max_temp = extents.max_temp.max(temp);
        }

        Ok(extents)
    }

    /// Number of year columns on the heatmap
    pub const fn year_count(&self) -> usize {
        (self.max_year - self.min_year) as usize + 1
    }

    pub fn temp_range(&self) -> f64 {
        self.max_temp - self.min_temp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemperatureRecord;

    fn record(year: i32, month: u32, variance: f64) -> TemperatureRecord {
        TemperatureRecord {
            year,
            month,
            variance,
        }
    }

    #[test]
    fn extents_span_years_and_absolute_temperatures() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                record(1760, 1, -1.5),
                record(1753, 6, 0.25),
                record(2015, 12, 1.0),
            ],
        };

        let extents = Extents::from_dataset(&dataset).unwrap();
        assert_eq!(extents.min_year, 1753);
        assert_eq!(extents.max_year, 2015);
        assert!((extents.min_temp - 6.5).abs() < f64::EPSILON);
        assert!((extents.max_temp - 9.0).abs() < f64::EPSILON);
        assert_eq!(extents.year_count(), 263);
    }

    #[test]
    fn empty_dataset_is_rejected_instead_of_yielding_nan() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: Vec::new(),
        };
        assert_eq!(
            Extents::from_dataset(&dataset),
            Err(DataError::EmptyDataset)
        );
    }

    #[test]
    fn single_record_collapses_to_a_point() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![record(1900, 1, 0.5)],
        };
        let extents = Extents::from_dataset(&dataset).unwrap();
        assert_eq!(extents.min_year, extents.max_year);
        assert!((extents.temp_range()).abs() < f64::EPSILON);
        assert_eq!(extents.year_count(), 1);
    }
}
