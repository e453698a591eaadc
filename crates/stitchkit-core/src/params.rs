//! Pattern synthesis parameters.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// Tunable parameters for pattern synthesis.
///
/// The penalty constants and the neighbor count are empirically chosen
/// heuristics; they are configuration, not constants, so that different
/// yarn gauges and shapes can be tuned without code changes. Defaults match
/// the values the pipeline was calibrated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternParams {
    /// Target stitch length: the ideal distance a single stitch spans
    /// between two consecutive rings.
    pub stitch_width: f64,

    /// Arc-length spacing to resample each ring at before alignment.
    /// `None` uses the rings as supplied (the slicing exporter usually
    /// resamples already).
    pub resample_spacing: Option<f64>,

    /// Re-order each ring's points by angle around the centroid before use.
    /// Needed when slice points arrive without connectivity information.
    pub sort_points: bool,

    /// Cost added to an increase at a point not classified as a bulge.
    pub increase_penalty: f64,

    /// Cost added to a decrease at a point not classified as an indent.
    pub decrease_penalty: f64,

    /// How many nearest neighbors on the adjacent ring the shape classifier
    /// consults per point.
    pub neighbor_count: usize,

    /// Vertical lift applied to a sew-on component's last ring when it is
    /// grafted onto its parent segment.
    pub sew_on_lift: f64,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            stitch_width: 0.15,
            resample_spacing: None,
            sort_points: false,
            increase_penalty: 30.0,
            decrease_penalty: 30.0,
            neighbor_count: 3,
            sew_on_lift: 0.2,
        }
    }
}

impl PatternParams {
    /// Validates the parameter set.
    pub fn validate(&self) -> GeometryResult<()> {
        if self.stitch_width <= 0.0 {
            return Err(GeometryError::NonPositiveParameter {
                name: "stitch_width",
                value: self.stitch_width,
            });
        }
        if let Some(spacing) = self.resample_spacing {
            if spacing <= 0.0 {
                return Err(GeometryError::NonPositiveParameter {
                    name: "resample_spacing",
                    value: spacing,
                });
            }
        }
        if self.neighbor_count == 0 {
            return Err(GeometryError::NonPositiveParameter {
                name: "neighbor_count",
                value: 0.0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(PatternParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let params = PatternParams {
            stitch_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GeometryError::NonPositiveParameter {
                name: "stitch_width",
                ..
            })
        ));

        let params = PatternParams {
            resample_spacing: Some(-1.0),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = PatternParams {
            neighbor_count: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: PatternParams = serde_json::from_str(r#"{"stitch_width": 0.2}"#).unwrap();
        assert_eq!(params.stitch_width, 0.2);
        assert_eq!(params.neighbor_count, 3);
        assert_eq!(params.increase_penalty, 30.0);
    }
}
