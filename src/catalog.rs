//! Process-wide word catalog.
//!
//! Built once at startup from a full scan of the words table. The only way to
//! obtain a `WordCatalog` is through [`WordCatalog::load`] (or `from_words`),
//! so a half-built or empty catalog is never visible to request handlers.
//! After construction it is immutable and shared behind an `Arc`.

use std::collections::HashMap;

use crate::db::Store;
use crate::domain::Word;
use crate::error::CatalogError;

#[derive(Debug)]
pub struct WordCatalog {
    /// Words in scan order; sampling iterates this
    words: Vec<Word>,
    /// Word id -> position in `words`
    index: HashMap<String, usize>,
}

impl WordCatalog {
    /// Scan the store and build the catalog. Fails closed on an empty table.
    pub fn load(store: &dyn Store) -> Result<Self, CatalogError> {
        let words = store.scan_words()?;
        let catalog = Self::from_words(words)?;
        tracing::info!("Word catalog loaded with {} words", catalog.len());
        Ok(catalog)
    }

    /// Build from already-fetched words. A repeated id replaces the earlier
    /// record in place.
    pub fn from_words(scanned: Vec<Word>) -> Result<Self, CatalogError> {
        let mut words: Vec<Word> = Vec::with_capacity(scanned.len());
        let mut index = HashMap::with_capacity(scanned.len());

        for word in scanned {
            match index.get(&word.id) {
                Some(&pos) => words[pos] = word,
                None => {
                    index.insert(word.id.clone(), words.len());
                    words.push(word);
                }
            }
        }

        if words.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { words, index })
    }

    pub fn get(&self, id: &str) -> Option<&Word> {
        self.index.get(id).map(|&pos| &self.words[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::testing::TestEnv;

    #[test]
    fn test_load_from_store() {
        let env = TestEnv::new();
        env.seed_words(&["a", "b", "c"]);

        let catalog = WordCatalog::load(&env.store).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("b").unwrap().correct, "b");
        assert!(catalog.get("z").is_none());

        let ids: Vec<_> = catalog.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_table_fails_closed() {
        let env = TestEnv::new();
        assert!(matches!(WordCatalog::load(&env.store), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_store_failure_fails_closed() {
        let env = TestEnv::new();
        env.seed_words(&["a"]);
        {
            let conn = env.pool.lock().unwrap();
            conn.execute("DROP TABLE words", []).unwrap();
        }

        let result = WordCatalog::load(&env.store);
        assert!(matches!(
            result,
            Err(CatalogError::StoreUnavailable(StoreError::Sqlite(_)))
        ));
    }

    #[test]
    fn test_duplicate_ids_keep_last_record() {
        let catalog = WordCatalog::from_words(vec![
            Word::new("a", "first", Vec::<String>::new()),
            Word::new("b", "b", Vec::<String>::new()),
            Word::new("a", "second", Vec::<String>::new()),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().correct, "second");
        assert!(catalog.contains("b"));
    }
}
