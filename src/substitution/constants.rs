/// Atwater energy factors (kcal per gram).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Reference portion that catalog values are expressed against.
pub const REFERENCE_PORTION_G: f64 = 100.0;

/// Display precision for gram weights and energy.
pub const WEIGHT_DECIMALS: u32 = 0;
pub const ENERGY_DECIMALS: u32 = 0;

/// Display precision for macro gram values.
pub const MACRO_DECIMALS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Prompt thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum matches shown in a food picker.
pub const MAX_SEARCH_RESULTS: usize = 6;

/// Minimum Jaro-Winkler similarity for "did you mean" suggestions.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum suggestions offered when a search comes back empty.
pub const MAX_SUGGESTIONS: usize = 5;

/// Round to `decimals` places, ties away from zero.
///
/// The one rounding rule of the crate: derived quantities, row values and
/// deltas all go through here.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
