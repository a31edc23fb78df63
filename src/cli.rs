use clap::{Parser, Subcommand};

/// FoodSwap finds the equivalent portion when substituting one food for another.
#[derive(Parser, Debug)]
#[command(name = "food_swap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog file (.json or .csv).
    #[arg(short, long, default_value = "foods.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively pick a source food, quantity, and replacement.
    Swap,

    /// Search the catalog; every term must match.
    Search {
        /// Search terms.
        terms: Vec<String>,
    },

    /// Print one food's per-100 g panel.
    Show {
        /// Catalog id of the food.
        id: u32,
    },

    /// Print the whole catalog.
    List,
}

impl Default for Command {
    fn default() -> Self {
        Command::Swap
    }
}
