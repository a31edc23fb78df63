use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Food;
use crate::search::{normalize, SearchIndex};
use crate::substitution::calculations::parse_quantity;
use crate::substitution::constants::{MAX_SEARCH_RESULTS, MAX_SUGGESTIONS, SUGGESTION_THRESHOLD};

/// Prompt for a food by free-text search.
///
/// Empty input cancels and returns None. When the query matches nothing, fall
/// back to fuzzy suggestions over the whole catalog. `exclude` keeps one id
/// out of both the search results and the suggestions.
pub fn prompt_food(index: &SearchIndex, prompt: &str, exclude: Option<u32>) -> Result<Option<Food>> {
    loop {
        let query: String = Input::new()
            .with_prompt(format!("{} (Enter to cancel)", prompt))
            .allow_empty(true)
            .interact_text()?;

        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let matches = index.search(query, exclude);

        if matches.is_empty() {
            match suggest(index, query, exclude)? {
                Some(food) => return Ok(Some(food)),
                None => {
                    println!("No food matches '{}'", query);
                    continue;
                }
            }
        }

        let shown = matches.len().min(MAX_SEARCH_RESULTS);
        let mut options: Vec<String> = matches[..shown]
            .iter()
            .map(|entry| entry.food.name.clone())
            .collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which one?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < shown {
            return Ok(Some(matches[selection].food.clone()));
        }
        // "None of these" loops back to a fresh query.
    }
}

/// Fuzzy "did you mean" fallback over the whole catalog.
fn suggest(index: &SearchIndex, query: &str, exclude: Option<u32>) -> Result<Option<Food>> {
    let needle = normalize(query);

    let mut candidates: Vec<(&Food, f64)> = index
        .entries()
        .iter()
        .filter(|entry| exclude != Some(entry.food.id))
        .map(|entry| (&entry.food, jaro_winkler(&entry.search_key, &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then(|| food.clone()));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|(food, _)| food.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Did you mean one of these?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        return Ok(Some(candidates[selection].0.clone()));
    }

    Ok(None)
}

/// Prompt for the source quantity in grams. Re-asks until the input parses as
/// a positive, finite number.
pub fn prompt_quantity(food_name: &str) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("How many grams of {}?", food_name))
            .interact_text()?;

        match parse_quantity(&input) {
            Ok(grams) => return Ok(grams),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
