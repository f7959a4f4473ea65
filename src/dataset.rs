use serde::{Deserialize, Serialize};
use crate::error::{HeatmapError, HeatmapResult};

/// One monthly reading: the deviation from the base temperature.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    /// 1-based, January = 1.
    pub month: u32,
    #[serde(rename = "variance")]
    pub variance_celsius: f64,
}

impl Observation {
    pub fn new(year: i32, month: u32, variance_celsius: f64) -> Self {
        Observation { year, month, variance_celsius }
    }

    /// 0-based month, the domain of the month band scale. `None` for
    /// month 0.
    pub fn month_index(&self) -> Option<usize> {
        (self.month as usize).checked_sub(1)
    }
}

/// Wire shape of a dataset document, before validation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDocument {
    pub base_temperature: f64,
    pub monthly_variance: Vec<Observation>,
}

/// A validated, read-only series of observations around a base temperature.
///
/// Non-empty, every month in 1..=12 and every absolute temperature finite;
/// all checked once in [`Dataset::new`] so nothing downstream has to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "DatasetDocument", into = "DatasetDocument")]
pub struct Dataset {
    base_temperature_celsius: f64,
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(base_temperature_celsius: f64, observations: Vec<Observation>) -> HeatmapResult<Self> {
        if observations.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }

        for (index, obs) in observations.iter().enumerate() {
            if !(1..=12).contains(&obs.month) {
                return Err(HeatmapError::OutOfRangeMonth {
                    index,
                    year: obs.year,
                    month: obs.month,
                });
            }
            if !obs.variance_celsius.is_finite() {
                return Err(HeatmapError::NonFiniteVariance {
                    index,
                    year: obs.year,
                    month: obs.month,
                });
            }
            if !(base_temperature_celsius + obs.variance_celsius).is_finite() {
                return Err(HeatmapError::NonFiniteTemperature {
                    index,
                    year: obs.year,
                    month: obs.month,
                });
            }
        }

        Ok(Dataset { base_temperature_celsius, observations })
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature_celsius
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Absolute temperature of an observation.
    pub fn temperature_of(&self, obs: &Observation) -> f64 {
        self.base_temperature_celsius + obs.variance_celsius
    }

    pub fn variances(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().map(|obs| obs.variance_celsius)
    }

    /// Observed (min, max) year.
    pub fn year_extent(&self) -> HeatmapResult<(i32, i32)> {
        let min = self.observations.iter().map(|obs| obs.year).min();
        let max = self.observations.iter().map(|obs| obs.year).max();
        min.zip(max).ok_or(HeatmapError::EmptyDataset)
    }

    /// Observed (min, max) variance.
    pub fn variance_extent(&self) -> HeatmapResult<(f64, f64)> {
        extent(self.variances()).ok_or(HeatmapError::EmptyDataset)
    }

    /// (min, max) absolute temperature.
    pub fn temperature_extent(&self) -> HeatmapResult<(f64, f64)> {
        let (min, max) = self.variance_extent()?;
        Ok((self.base_temperature_celsius + min, self.base_temperature_celsius + max))
    }
}

impl TryFrom<DatasetDocument> for Dataset {
    type Error = HeatmapError;

    fn try_from(raw: DatasetDocument) -> Result<Self, Self::Error> {
        Dataset::new(raw.base_temperature, raw.monthly_variance)
    }
}

impl From<Dataset> for DatasetDocument {
    fn from(dataset: Dataset) -> Self {
        DatasetDocument {
            base_temperature: dataset.base_temperature_celsius,
            monthly_variance: dataset.observations,
        }
    }
}

pub(crate) fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            8.66,
            vec![
                Observation::new(1753, 1, -1.366),
                Observation::new(1753, 2, -2.223),
                Observation::new(2015, 9, 1.234),
                Observation::new(1890, 7, 0.5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_extents() {
        let dataset = sample();
        assert_eq!(dataset.year_extent().unwrap(), (1753, 2015));
        assert_eq!(dataset.variance_extent().unwrap(), (-2.223, 1.234));

        let (min_t, max_t) = dataset.temperature_extent().unwrap();
        assert!((min_t - (8.66 - 2.223)).abs() < 1e-12);
        assert!((max_t - (8.66 + 1.234)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert!(matches!(Dataset::new(8.66, vec![]), Err(HeatmapError::EmptyDataset)));
    }

    #[test]
    fn test_out_of_range_month_is_rejected() {
        for month in [0, 13] {
            let result = Dataset::new(8.66, vec![
                Observation::new(1900, 1, 0.0),
                Observation::new(1901, month, 0.0),
            ]);
            match result {
                Err(HeatmapError::OutOfRangeMonth { index, year, month: m }) => {
                    assert_eq!(index, 1);
                    assert_eq!(year, 1901);
                    assert_eq!(m, month);
                }
                other => panic!("expected OutOfRangeMonth, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_finite_variance_is_rejected() {
        let result = Dataset::new(8.66, vec![Observation::new(1900, 3, f64::NAN)]);
        assert!(matches!(result, Err(HeatmapError::NonFiniteVariance { index: 0, .. })));
    }

    #[test]
    fn test_non_finite_temperature_is_rejected() {
        let result = Dataset::new(1e308, vec![
            Observation::new(1900, 1, 0.0),
            Observation::new(1900, 2, 1e308),
        ]);
        assert!(matches!(result, Err(HeatmapError::NonFiniteTemperature { index: 1, month: 2, .. })));

        let result = Dataset::new(f64::NAN, vec![Observation::new(1900, 1, 0.0)]);
        assert!(matches!(result, Err(HeatmapError::NonFiniteTemperature { index: 0, .. })));
    }

    #[test]
    fn test_month_index() {
        assert_eq!(Observation::new(1900, 1, 0.0).month_index(), Some(0));
        assert_eq!(Observation::new(1900, 12, 0.0).month_index(), Some(11));
        assert_eq!(Observation::new(1900, 0, 0.0).month_index(), None);
    }

    #[test]
    fn test_duplicates_are_accepted() {
        let dataset = Dataset::new(8.66, vec![
            Observation::new(1900, 1, 0.1),
            Observation::new(1900, 1, 0.2),
        ])
        .unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.base_temperature(), 8.66);
        assert_eq!(dataset.observations()[1], Observation::new(1753, 2, -2.223));

        let dumped = serde_json::to_value(&dataset).unwrap();
        assert_eq!(dumped["monthlyVariance"][0]["variance"], -1.366);
    }

    #[test]
    fn test_json_goes_through_validation() {
        let json = r#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 1753, "month": 14, "variance": 0.0}]}"#;
        assert!(serde_json::from_str::<Dataset>(json).is_err());

        let empty = r#"{"baseTemperature": 8.66, "monthlyVariance": []}"#;
        assert!(serde_json::from_str::<Dataset>(empty).is_err());
    }
}
