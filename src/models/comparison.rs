use crate::substitution::constants::round_to;

/// One line of the side-by-side nutrition comparison.
///
/// Values are stored pre-rounded to `decimals`, so `delta()` reproduces
/// exactly what a reader would compute from the printed numbers.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    /// Display label for the dimension.
    pub label: &'static str,

    /// Value on the source side.
    pub from_value: f64,

    /// Value on the target side.
    pub to_value: f64,

    /// Whether this row is the macro channel held constant by the swap.
    pub is_dominant: bool,

    /// Display unit suffix.
    pub unit: &'static str,

    /// Decimal places used for display and delta rounding.
    pub decimals: u32,
}

impl ComparisonRow {
    pub fn new(
        label: &'static str,
        from_value: f64,
        to_value: f64,
        is_dominant: bool,
        unit: &'static str,
        decimals: u32,
    ) -> Self {
        Self {
            label,
            from_value,
            to_value,
            is_dominant,
            unit,
            decimals,
        }
    }

    /// Signed change from source to target, at this row's display precision.
    pub fn delta(&self) -> f64 {
        round_to(self.to_value - self.from_value, self.decimals)
    }
}
