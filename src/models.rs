//! Data models for parsed reaction records

/// One ingredient of a reaction: the resource consumed and how many
/// units each batch of the produced resource requires.
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub name: String,
    pub amount_per_batch: i64,
}

/// One parsed reaction: the produced resource, how many units a single
/// batch yields, and the ingredients consumed per batch.
#[derive(Debug, Clone)]
pub struct RecipeRecord {
    pub produced: String,
    pub batch_size: i64,
    pub ingredients: Vec<Ingredient>,
}
