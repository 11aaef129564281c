//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::params::InterestParams;

/// Amounts at the end of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Years elapsed (0 = start)
    pub year: u32,

    /// Balance with interest compounded annually
    pub compound_amount: i128,

    /// Balance with interest on the principal only
    pub simple_amount: i128,
}

impl ProjectionPoint {
    /// Larger of the two series at this year
    pub fn max_amount(&self) -> i128 {
        self.compound_amount.max(self.simple_amount)
    }
}

/// Complete projection for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Inputs that produced the points
    pub params: InterestParams,

    /// One point per year, index 0 = year 0
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub fn new(params: InterestParams) -> Self {
        Self {
            params,
            points: Vec::with_capacity(params.years as usize + 1),
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at maturity
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Largest amount across both series
    pub fn max_amount(&self) -> Option<i128> {
        self.points.iter().map(ProjectionPoint::max_amount).max()
    }

    /// Comparison at maturity, if there is anything to compare
    pub fn summary(&self) -> Option<MaturitySummary> {
        self.final_point().map(|p| MaturitySummary {
            year: p.year,
            compound_amount: p.compound_amount,
            simple_amount: p.simple_amount,
        })
    }
}

/// Final-year comparison of the two series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturitySummary {
    pub year: u32,
    pub compound_amount: i128,
    pub simple_amount: i128,
}

impl MaturitySummary {
    /// Extra earned by compounding over simple interest
    pub fn compounding_advantage(&self) -> i128 {
        self.compound_amount - self.simple_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_has_no_summary() {
        let result = ProjectionResult::new(InterestParams::default());
        assert!(result.is_empty());
        assert!(result.summary().is_none());
        assert!(result.max_amount().is_none());
    }

    #[test]
    fn test_point_serializes_camel_case() {
        let point = ProjectionPoint { year: 3, compound_amount: 1331, simple_amount: 1300 };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"year":3,"compoundAmount":1331,"simpleAmount":1300}"#);
    }
}
