use crate::models::Food;
use crate::state::SubstitutionSession;
use crate::substitution::calculations::nutrition_for;
use crate::substitution::constants::{round_to, REFERENCE_PORTION_G};

/// Display the swap summary and the five-row comparison table.
pub fn display_result(session: &SubstitutionSession) {
    let (Some(source), Some(from_g), Some(target), Some(to_g)) = (
        session.source(),
        session.source_quantity(),
        session.target(),
        session.target_quantity(),
    ) else {
        println!("Nothing to show yet.");
        return;
    };

    println!();
    println!(
        "{:.0} g {} = {:.0} g {}",
        round_to(from_g, 0),
        source.name,
        round_to(to_g, 0),
        target.name
    );

    let Some(rows) = session.comparison() else {
        return;
    };

    println!();
    println!("=== What else changes ===");
    println!();

    let max_label_len = rows.iter().map(|r| r.label.len()).max().unwrap_or(8);

    for row in &rows {
        let precision = row.decimals as usize;
        let from = format!("{:.*} {}", precision, row.from_value, row.unit);
        let to = format!("{:.*} {}", precision, row.to_value, row.unit);

        let delta = row.delta();
        let note = if row.is_dominant {
            "  [held constant]".to_string()
        } else if delta != 0.0 {
            format!("  ({:+.*})", precision, delta)
        } else {
            String::new()
        };

        println!(
            "  {:<width$} {:>12} -> {:<12}{}",
            row.label,
            from,
            to,
            note,
            width = max_label_len
        );
    }

    println!();
}

/// Display one food's per-100 g panel.
pub fn display_food(food: &Food) {
    let per_portion = nutrition_for(food, REFERENCE_PORTION_G);

    println!();
    println!("=== {} (#{}) ===", food.name, food.id);
    println!();
    println!("  per 100 g:");
    println!("  Energy  {:>7.0} kcal", per_portion.energy_kcal);
    println!("  Protein {:>7.1} g", per_portion.protein);
    println!("  Carbs   {:>7.1} g", per_portion.carbs);
    println!("  Fat     {:>7.1} g", per_portion.fat);
    println!("  Held on swap: {}", food.class);
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  #{:<4} {} - P:{} C:{} F:{} per 100 g [{}]",
            food.id, food.name, food.protein, food.carbs, food.fat, food.class
        );
    }

    println!();
}
