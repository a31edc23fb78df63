use crate::error::{Result, SwapError};
use crate::models::{ComparisonRow, Food};
use crate::substitution::calculations;

/// Where the substitution flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    SourceSelected,
    SourceQuantified,
    TargetSelected,
}

/// Tracks source/target selections for one substitution.
///
/// Quantities live here as already-validated gram amounts; raw user input is
/// parsed before it reaches the session. The target quantity is always
/// derived from the other three values, never set directly.
#[derive(Debug, Default)]
pub struct SubstitutionSession {
    source: Option<Food>,
    source_quantity: Option<f64>,
    target: Option<Food>,
    target_quantity: Option<f64>,
}

impl SubstitutionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (
            &self.source,
            self.source_quantity,
            &self.target,
            self.target_quantity,
        ) {
            (None, _, _, _) => Phase::Empty,
            (Some(_), None, _, _) => Phase::SourceSelected,
            (Some(_), Some(_), Some(_), Some(_)) => Phase::TargetSelected,
            (Some(_), Some(_), _, _) => Phase::SourceQuantified,
        }
    }

    pub fn source(&self) -> Option<&Food> {
        self.source.as_ref()
    }

    pub fn source_quantity(&self) -> Option<f64> {
        self.source_quantity
    }

    pub fn target(&self) -> Option<&Food> {
        self.target.as_ref()
    }

    pub fn target_quantity(&self) -> Option<f64> {
        self.target_quantity
    }

    /// Pick the source food. Any previous quantity and target are dropped.
    pub fn select_source(&mut self, food: Food) {
        self.source = Some(food);
        self.source_quantity = None;
        self.clear_target();
    }

    /// Set the source quantity in grams.
    ///
    /// Invalid input (non-finite or not positive) clears the quantity and the
    /// derived target quantity but keeps the selected foods, so the flow
    /// falls back to SourceSelected rather than resetting.
    pub fn set_source_quantity(&mut self, grams: f64) -> Result<()> {
        match calculations::validate_quantity(grams) {
            Ok(grams) => {
                self.source_quantity = Some(grams);
                self.refresh_target_quantity()
            }
            Err(e) => {
                self.source_quantity = None;
                self.target_quantity = None;
                Err(e)
            }
        }
    }

    /// Pick the target food and derive its equivalent quantity.
    ///
    /// The source itself is rejected. A target with nothing on the matched
    /// macro channel stays selected but gets no derived quantity, so the
    /// comparison stays hidden; the error is reported to the caller.
    pub fn select_target(&mut self, food: Food) -> Result<()> {
        if let Some(source) = &self.source {
            if source.id == food.id {
                return Err(SwapError::InvalidInput(format!(
                    "{} cannot substitute itself",
                    food.name
                )));
            }
        }

        self.target = Some(food);
        self.refresh_target_quantity()
    }

    /// Clear the source food, cascading to an empty session.
    pub fn clear_source(&mut self) {
        self.source = None;
        self.source_quantity = None;
        self.clear_target();
    }

    /// Clear only the target side.
    pub fn clear_target(&mut self) {
        self.target = None;
        self.target_quantity = None;
    }

    /// Comparison rows for the current selections, once the flow is complete.
    pub fn comparison(&self) -> Option<Vec<ComparisonRow>> {
        match (
            &self.source,
            self.source_quantity,
            &self.target,
            self.target_quantity,
        ) {
            (Some(source), Some(from_g), Some(target), Some(to_g)) => {
                Some(calculations::compare(source, from_g, target, to_g))
            }
            _ => None,
        }
    }

    /// Recompute the derived target quantity from the current selections.
    fn refresh_target_quantity(&mut self) -> Result<()> {
        self.target_quantity = None;

        let (Some(source), Some(grams), Some(target)) =
            (&self.source, self.source_quantity, &self.target)
        else {
            return Ok(());
        };

        self.target_quantity = Some(calculations::equivalent_quantity(source, target, grams)?);
        Ok(())
    }
}
