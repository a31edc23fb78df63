use crate::models::Food;
use crate::search::normalize::normalize;

/// A catalog entry paired with its precomputed search key.
#[derive(Debug, Clone)]
pub struct IndexedFood {
    pub food: Food,

    /// Normalized name used for matching, never for display.
    pub search_key: String,
}

/// Immutable snapshot of the catalog with normalized search keys.
///
/// Entries keep catalog order. The snapshot is rebuilt wholesale when the
/// catalog changes; nothing is patched in place.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedFood>,
}

impl SearchIndex {
    /// Build an index from a catalog. Order is preserved and every entry is
    /// kept; duplicates are the loader's problem, not the index's.
    pub fn build(catalog: Vec<Food>) -> Self {
        let entries = catalog
            .into_iter()
            .map(|food| IndexedFood {
                search_key: normalize(&food.name),
                food,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexedFood] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a food by catalog id.
    pub fn food_by_id(&self, id: u32) -> Option<&Food> {
        self.entries
            .iter()
            .map(|entry| &entry.food)
            .find(|food| food.id == id)
    }

    /// Multi-term substring search over normalized names.
    ///
    /// The query is normalized and split on whitespace runs; every term must
    /// appear somewhere in the entry's search key (AND semantics, order of
    /// terms irrelevant). An empty or whitespace-only query matches all
    /// entries. Results are unranked and keep catalog order; the caller
    /// truncates if it wants fewer.
    ///
    /// `exclude` drops that id from the results. `None` drops nothing, so an
    /// id of 0 can be excluded like any other.
    pub fn search(&self, query: &str, exclude: Option<u32>) -> Vec<&IndexedFood> {
        if query.trim().is_empty() {
            return self
                .entries
                .iter()
                .filter(|entry| exclude != Some(entry.food.id))
                .collect();
        }

        let normalized = normalize(query);
        let terms: Vec<&str> = normalized.split_whitespace().collect();

        self.entries
            .iter()
            .filter(|entry| exclude != Some(entry.food.id))
            .filter(|entry| terms.iter().all(|term| entry.search_key.contains(term)))
            .collect()
    }
}
