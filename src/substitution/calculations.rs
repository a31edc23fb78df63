use crate::error::{Result, SwapError};
use crate::models::{ComparisonRow, Food, MacroClass};
use crate::substitution::constants::*;

/// Nutrition totals for a concrete portion of one food.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nutrition {
    pub weight: f64,
    pub energy_kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Check that a gram amount is usable: finite and strictly positive.
pub fn validate_quantity(grams: f64) -> Result<f64> {
    if !grams.is_finite() || grams <= 0.0 {
        return Err(SwapError::InvalidQuantity(format!("{grams}")));
    }
    Ok(grams)
}

/// Parse raw user input as a gram amount.
///
/// Blank, non-numeric, zero and negative input all come back as
/// InvalidQuantity carrying the offending text.
pub fn parse_quantity(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SwapError::InvalidQuantity("(empty)".to_string()));
    }

    let grams: f64 = trimmed
        .parse()
        .map_err(|_| SwapError::InvalidQuantity(trimmed.to_string()))?;

    validate_quantity(grams).map_err(|_| SwapError::InvalidQuantity(trimmed.to_string()))
}

/// Grams of the target food holding the source's classified macro constant.
///
/// Rounded to the nearest whole gram, ties away from zero. A target with
/// nothing on the matched channel is a ZeroChannel error, never an
/// infinite or NaN quantity.
pub fn equivalent_quantity(source: &Food, target: &Food, source_grams: f64) -> Result<f64> {
    let source_grams = validate_quantity(source_grams)?;

    let channel = source.class;
    let target_per_100g = target.channel_per_100g(channel);
    if target_per_100g == 0.0 {
        return Err(SwapError::ZeroChannel {
            target: target.name.clone(),
            channel,
        });
    }

    let source_amount = source.channel_per_100g(channel) * source_grams / REFERENCE_PORTION_G;
    Ok(round_to(
        REFERENCE_PORTION_G * source_amount / target_per_100g,
        0,
    ))
}

/// Nutrition totals for `grams` of a food.
///
/// Energy uses the fixed Atwater factors (4/4/9 kcal per gram). Weight is the
/// identity dimension, carried so comparison rows stay symmetric.
pub fn nutrition_for(food: &Food, grams: f64) -> Nutrition {
    let multiplier = grams / REFERENCE_PORTION_G;
    let energy_per_portion = food.protein * KCAL_PER_G_PROTEIN
        + food.carbs * KCAL_PER_G_CARB
        + food.fat * KCAL_PER_G_FAT;

    Nutrition {
        weight: grams,
        energy_kcal: energy_per_portion * multiplier,
        protein: food.protein * multiplier,
        carbs: food.carbs * multiplier,
        fat: food.fat * multiplier,
    }
}

/// Build the five comparison rows: weight, energy, then one row per macro.
///
/// Row values are pre-rounded to display precision (whole grams/kcal for
/// weight and energy, one decimal for macros). `is_dominant` marks the
/// source's classified channel; weight and energy never carry it.
pub fn compare(
    source: &Food,
    source_grams: f64,
    target: &Food,
    target_grams: f64,
) -> Vec<ComparisonRow> {
    let from = nutrition_for(source, source_grams);
    let to = nutrition_for(target, target_grams);

    vec![
        ComparisonRow::new(
            "Weight",
            round_to(from.weight, WEIGHT_DECIMALS),
            round_to(to.weight, WEIGHT_DECIMALS),
            false,
            "g",
            WEIGHT_DECIMALS,
        ),
        ComparisonRow::new(
            "Energy",
            round_to(from.energy_kcal, ENERGY_DECIMALS),
            round_to(to.energy_kcal, ENERGY_DECIMALS),
            false,
            "kcal",
            ENERGY_DECIMALS,
        ),
        ComparisonRow::new(
            "Protein",
            round_to(from.protein, MACRO_DECIMALS),
            round_to(to.protein, MACRO_DECIMALS),
            source.class == MacroClass::Protein,
            "g",
            MACRO_DECIMALS,
        ),
        ComparisonRow::new(
            "Carbs",
            round_to(from.carbs, MACRO_DECIMALS),
            round_to(to.carbs, MACRO_DECIMALS),
            source.class == MacroClass::Carb,
            "g",
            MACRO_DECIMALS,
        ),
        ComparisonRow::new(
            "Fat",
            round_to(from.fat, MACRO_DECIMALS),
            round_to(to.fat, MACRO_DECIMALS),
            source.class == MacroClass::Fat,
            "g",
            MACRO_DECIMALS,
        ),
    ]
}
