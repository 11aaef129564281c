//! Stateful calculator that owns the inputs and the derived chart
//!
//! Every edit replaces one input and rebuilds the whole chart model. There is
//! no incremental update; a projection is at most 101 points.

use log::{debug, warn};

use crate::chart::ChartModel;
use crate::params::{parse_amount, parse_years, Field, InputError, InterestParams};
use crate::projection::ProjectionEngine;

/// Input state plus the chart derived from it
///
/// # Example
/// ```
/// use interest_chart::InterestCalculator;
///
/// let mut calc = InterestCalculator::new();
/// calc.set_rate(5.0);
/// let summary = calc.model().summary.as_ref().unwrap();
/// assert_eq!(summary.compound, "$1,629");
/// ```
#[derive(Debug, Clone)]
pub struct InterestCalculator {
    engine: ProjectionEngine,
    params: InterestParams,
    model: ChartModel,
}

impl InterestCalculator {
    /// Calculator seeded with the default inputs
    pub fn new() -> Self {
        Self::with_params(InterestParams::default())
    }

    /// Calculator seeded with given inputs, clamped into bounds
    pub fn with_params(params: InterestParams) -> Self {
        let engine = ProjectionEngine::new();
        let params = bounded(params);
        let model = ChartModel::build(engine.project(&params));
        Self { engine, params, model }
    }

    /// Current inputs after clamping
    pub fn params(&self) -> &InterestParams {
        &self.params
    }

    /// Chart for the current inputs
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    pub fn set_principal(&mut self, principal: f64) -> &ChartModel {
        self.set_params(InterestParams { principal, ..self.params })
    }

    pub fn set_rate(&mut self, rate: f64) -> &ChartModel {
        self.set_params(InterestParams { rate, ..self.params })
    }

    pub fn set_years(&mut self, years: u32) -> &ChartModel {
        self.set_params(InterestParams { years, ..self.params })
    }

    /// Replace all inputs and recompute
    pub fn set_params(&mut self, params: InterestParams) -> &ChartModel {
        self.params = bounded(params);
        self.recompute();
        &self.model
    }

    /// Apply raw text typed into one of the entry fields.
    ///
    /// Unparsable text leaves the state untouched and returns the error.
    pub fn apply_text(&mut self, field: Field, text: &str) -> Result<&ChartModel, InputError> {
        let model = match field {
            Field::Principal => {
                let value = parse_amount(field, text)?;
                self.set_principal(value)
            }
            Field::Rate => {
                let value = parse_amount(field, text)?;
                self.set_rate(value)
            }
            Field::Years => {
                let value = parse_years(text)?;
                self.set_years(value)
            }
        };
        Ok(model)
    }

    fn recompute(&mut self) {
        let projection = self.engine.project(&self.params);
        self.model = ChartModel::build(projection);
        debug!(
            "recomputed chart: {} points, {} ticks",
            self.model.points().len(),
            self.model.axis.ticks.len()
        );
    }
}

impl Default for InterestCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn bounded(params: InterestParams) -> InterestParams {
    if let Err(e) = params.validate() {
        let clamped = params.clamped();
        warn!("{}; clamped inputs to {:?}", e, clamped);
        clamped
    } else {
        params
    }
}
