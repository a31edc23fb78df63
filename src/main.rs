use clap::Parser;
use std::path::Path;

use food_swap_rs::cli::{Cli, Command};
use food_swap_rs::error::{Result, SwapError};
use food_swap_rs::interface::{
    display_food, display_food_list, display_result, prompt_food, prompt_quantity, prompt_yes_no,
};
use food_swap_rs::search::SearchIndex;
use food_swap_rs::state::{load_catalog, SubstitutionSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Swap => cmd_swap(&cli.file),
        Command::Search { terms } => cmd_search(&cli.file, &terms),
        Command::Show { id } => cmd_show(&cli.file, id),
        Command::List => cmd_list(&cli.file),
    }
}

/// Load the catalog and build the search index, or explain what is missing.
fn load_index(file_path: &str) -> Result<Option<SearchIndex>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog not found: {}", file_path);
        eprintln!("Point --file at a .json or .csv catalog.");
        return Ok(None);
    }

    let catalog = load_catalog(path)?;
    Ok(Some(SearchIndex::build(catalog)))
}

/// Run the interactive substitution flow.
fn cmd_swap(file_path: &str) -> Result<()> {
    let Some(index) = load_index(file_path)? else {
        return Ok(());
    };

    if index.is_empty() {
        println!("The catalog is empty; nothing to swap.");
        return Ok(());
    }

    println!("Loaded {} foods", index.len());
    println!();

    let mut session = SubstitutionSession::new();

    loop {
        let Some(source) = prompt_food(&index, "Food to replace", None)? else {
            break;
        };
        let source_id = source.id;
        let source_name = source.name.clone();
        session.select_source(source);

        let grams = prompt_quantity(&source_name)?;
        session.set_source_quantity(grams)?;

        loop {
            let Some(target) = prompt_food(&index, "Food to use instead", Some(source_id))? else {
                session.clear_target();
                break;
            };

            match session.select_target(target) {
                Ok(()) => break,
                Err(e @ SwapError::ZeroChannel { .. }) => {
                    println!("No valid substitution: {}", e);
                    session.clear_target();
                }
                Err(e) => return Err(e),
            }
        }

        if session.target().is_some() {
            display_result(&session);
        }

        if !prompt_yes_no("Swap another?", true)? {
            break;
        }
        session.clear_source();
        println!();
    }

    Ok(())
}

/// Run one query against the catalog and print the matches.
fn cmd_search(file_path: &str, terms: &[String]) -> Result<()> {
    let Some(index) = load_index(file_path)? else {
        return Ok(());
    };

    let query = terms.join(" ");
    let matches = index.search(&query, None);
    let foods: Vec<&food_swap_rs::Food> = matches.iter().map(|entry| &entry.food).collect();

    display_food_list(&foods, "Matching foods");
    Ok(())
}

/// Print one food's per-100 g panel.
fn cmd_show(file_path: &str, id: u32) -> Result<()> {
    let Some(index) = load_index(file_path)? else {
        return Ok(());
    };

    let food = index
        .food_by_id(id)
        .ok_or_else(|| SwapError::FoodNotFound(format!("id {}", id)))?;

    display_food(food);
    Ok(())
}

/// Print the whole catalog.
fn cmd_list(file_path: &str) -> Result<()> {
    let Some(index) = load_index(file_path)? else {
        return Ok(());
    };

    let foods: Vec<&food_swap_rs::Food> = index.entries().iter().map(|entry| &entry.food).collect();
    display_food_list(&foods, "Catalog");
    Ok(())
}
