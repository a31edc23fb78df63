use assert_float_eq::assert_float_absolute_eq;

use food_swap_rs::error::SwapError;
use food_swap_rs::models::{Food, MacroClass};
use food_swap_rs::substitution::{
    compare, equivalent_quantity, nutrition_for, round_to, MACRO_DECIMALS,
};

fn make_food(id: u32, name: &str, p: f64, c: f64, f: f64, class: MacroClass) -> Food {
    Food {
        id,
        name: name.to_string(),
        protein: p,
        carbs: c,
        fat: f,
        class,
    }
}

fn arroz() -> Food {
    make_food(1, "Arroz", 2.7, 28.0, 0.3, MacroClass::Carb)
}

fn batata() -> Food {
    make_food(2, "Batata", 2.0, 17.0, 0.1, MacroClass::Carb)
}

#[test]
fn test_protein_example_from_the_tables() {
    let source = make_food(1, "Frango", 20.0, 0.0, 5.0, MacroClass::Protein);
    let target = make_food(2, "Tofu", 10.0, 2.0, 5.0, MacroClass::Protein);

    // 150 g * 20/100 = 30 g protein; 100 * 30 / 10 = 300 g of target.
    assert_float_absolute_eq!(equivalent_quantity(&source, &target, 150.0).unwrap(), 300.0);
}

#[test]
fn test_zero_channel_never_leaks_non_finite() {
    let source = make_food(1, "Frango", 20.0, 0.0, 5.0, MacroClass::Protein);
    let target = make_food(2, "Alface", 0.0, 2.0, 0.1, MacroClass::Carb);

    let result = equivalent_quantity(&source, &target, 150.0);
    match result {
        Err(SwapError::ZeroChannel { target, channel }) => {
            assert_eq!(target, "Alface");
            assert_eq!(channel, MacroClass::Protein);
        }
        other => panic!("expected ZeroChannel, got {:?}", other),
    }
}

#[test]
fn test_energy_uses_atwater_factors() {
    let food = make_food(1, "Frango", 20.0, 0.0, 5.0, MacroClass::Protein);
    let nutrition = nutrition_for(&food, 100.0);

    assert_float_absolute_eq!(nutrition.energy_kcal, 125.0);
}

#[test]
fn test_comparison_delta_round_trips_at_row_precision() {
    let rows = compare(&arroz(), 100.0, &batata(), 165.0);

    for row in &rows {
        let recomputed = round_to(row.to_value - row.from_value, row.decimals);
        assert_float_absolute_eq!(row.delta(), recomputed, 1e-9);
    }
}

#[test]
fn test_end_to_end_arroz_to_batata() {
    let source = arroz();
    let target = batata();

    // 100 g of Arroz carries 28 g of carbs; Batata needs 165 g to match.
    let target_grams = equivalent_quantity(&source, &target, 100.0).unwrap();
    assert_float_absolute_eq!(target_grams, 165.0);

    let rows = compare(&source, 100.0, &target, target_grams);

    let weight = &rows[0];
    assert_float_absolute_eq!(weight.from_value, 100.0);
    assert_float_absolute_eq!(weight.to_value, 165.0);

    let carbs = &rows[3];
    assert_eq!(carbs.label, "Carbs");
    assert!(carbs.is_dominant);
    assert_float_absolute_eq!(carbs.from_value, 28.0);
    assert_float_absolute_eq!(carbs.to_value, 28.1);
    assert_float_absolute_eq!(carbs.delta(), 0.1, 1e-9);

    // Weight and energy rows never carry the dominant mark.
    assert!(!rows[0].is_dominant);
    assert!(!rows[1].is_dominant);
}

#[test]
fn test_macro_rows_use_one_decimal() {
    let rows = compare(&arroz(), 100.0, &batata(), 165.0);

    for row in &rows[2..] {
        assert_eq!(row.decimals, MACRO_DECIMALS);
        assert_eq!(row.unit, "g");
        // Stored values already sit on the display grid.
        assert_float_absolute_eq!(row.from_value, round_to(row.from_value, row.decimals), 1e-12);
        assert_float_absolute_eq!(row.to_value, round_to(row.to_value, row.decimals), 1e-12);
    }
}

#[test]
fn test_fat_dominant_swap() {
    let source = make_food(1, "Azeite", 0.0, 0.0, 100.0, MacroClass::Fat);
    let target = make_food(2, "Manteiga", 0.9, 0.1, 81.0, MacroClass::Fat);

    // 10 g of olive oil = 10 g fat; 100 * 10 / 81 = 12.34... -> 12 g.
    let target_grams = equivalent_quantity(&source, &target, 10.0).unwrap();
    assert_float_absolute_eq!(target_grams, 12.0);

    let rows = compare(&source, 10.0, &target, target_grams);
    assert!(rows[4].is_dominant);
    assert_eq!(rows[4].label, "Fat");
}
