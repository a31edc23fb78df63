use std::fmt;

use serde::{Deserialize, Serialize};

/// Macronutrient classification assigned by the catalog.
///
/// Authoritative metadata, not derived from the numbers: a food classified
/// `Carb` keeps its carb amount constant when substituted, even if another
/// macro happens to be numerically larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MacroClass {
    #[serde(rename = "P")]
    Protein,

    #[serde(rename = "C")]
    Carb,

    #[serde(rename = "F")]
    Fat,
}

impl MacroClass {
    /// Lowercase display name of the channel.
    pub fn label(self) -> &'static str {
        match self {
            MacroClass::Protein => "protein",
            MacroClass::Carb => "carbs",
            MacroClass::Fat => "fat",
        }
    }
}

impl fmt::Display for MacroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog food with nutritional data per 100 g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Id")]
    pub id: u32,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbs")]
    pub carbs: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,

    #[serde(rename = "Class")]
    pub class: MacroClass,
}

impl Food {
    /// Grams per 100 g on the given macro channel.
    #[inline]
    pub fn channel_per_100g(&self, channel: MacroClass) -> f64 {
        match channel {
            MacroClass::Protein => self.protein,
            MacroClass::Carb => self.carbs,
            MacroClass::Fat => self.fat,
        }
    }

    /// Grams per 100 g on this food's own classified channel.
    #[inline]
    pub fn dominant_per_100g(&self) -> f64 {
        self.channel_per_100g(self.class)
    }

    /// Basic validation: non-negative macro values.
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} (#{}): P:{} C:{} F:{} per 100 g, class:{}",
            self.name, self.id, self.protein, self.carbs, self.fat, self.class
        )
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Food {}

impl std::hash::Hash for Food {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
