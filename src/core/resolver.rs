use crate::core::rates::RateTable;
use crate::domain::model::{CategoryId, CategorySpec};
use crate::domain::ports::CategoryClassifier;

/// Substring match on each category's own name, first hit in declared order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl CategoryClassifier for KeywordClassifier {
    fn classify(&self, name: &str) -> CategoryId {
        let normalized = name.to_lowercase();
        for category in CategoryId::ALL {
            match category {
                CategoryId::General => break,
                specific if normalized.contains(specific.keyword()) => return specific,
                _ => {}
            }
        }
        CategoryId::General
    }
}

pub struct CategoryResolver<C: CategoryClassifier = KeywordClassifier> {
    classifier: C,
    table: RateTable,
}

impl CategoryResolver<KeywordClassifier> {
    pub fn new(table: RateTable) -> Self {
        Self::with_classifier(KeywordClassifier, table)
    }
}

impl Default for CategoryResolver<KeywordClassifier> {
    fn default() -> Self {
        Self::new(RateTable::DEFAULT)
    }
}

impl<C: CategoryClassifier> CategoryResolver<C> {
    pub fn with_classifier(classifier: C, table: RateTable) -> Self {
        Self { classifier, table }
    }

    pub fn resolve(&self, name: &str) -> (CategoryId, CategorySpec) {
        let category = self.classifier.classify(name);
        tracing::debug!("Resolved '{}' to category {}", name, category);
        (category, self.table.spec(category))
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }
}

/// Resolve with the keyword classifier and the built-in tables.
pub fn resolve(name: &str) -> (CategoryId, CategorySpec) {
    let category = KeywordClassifier.classify(name);
    (category, RateTable::DEFAULT.spec(category))
}
