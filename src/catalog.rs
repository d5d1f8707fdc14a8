//! Resolves the question set and destination lists from storage
//!
//! Stored records win when present and non-empty; otherwise the built-in
//! samples are used. A blob that fails to parse is logged and skipped.

use anyhow::Result;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::places::{StoredPlace, TravelLocation, sample_locations};
use crate::questionnaire::{Question, StoredQuestion, default_questions};
use crate::storage::{LocalStore, PLACES_KEY, QUESTIONS_KEY};

/// Where a catalog list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Stored,
    BuiltIn,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stored => write!(f, "stored"),
            Source::BuiltIn => write!(f, "built-in"),
        }
    }
}

fn load_stored<T: DeserializeOwned>(store: &LocalStore, key: &str) -> Option<Vec<T>> {
    match store.get::<Vec<T>>(key) {
        Ok(Some(items)) if !items.is_empty() => Some(items),
        Ok(_) => {
            debug!("No stored records under '{}'", key);
            None
        }
        Err(e) => {
            warn!("Ignoring stored records under '{}': {:#}", key, e);
            None
        }
    }
}

/// Questionnaire questions in display order
pub fn questions(store: &LocalStore) -> (Vec<Question>, Source) {
    match load_stored::<StoredQuestion>(store, QUESTIONS_KEY) {
        Some(mut stored) => {
            stored.sort_by_key(|q| q.order);
            let questions = stored.into_iter().map(|q| q.question).collect();
            (questions, Source::Stored)
        }
        None => (default_questions(), Source::BuiltIn),
    }
}

/// Locations offered by the manual search
pub fn search_locations(store: &LocalStore) -> (Vec<TravelLocation>, Source) {
    match load_stored::<StoredPlace>(store, PLACES_KEY) {
        Some(places) => (
            places.into_iter().map(TravelLocation::from).collect(),
            Source::Stored,
        ),
        None => (sample_locations(), Source::BuiltIn),
    }
}

/// Writes the built-in questions and sample places into the store
pub fn seed(store: &LocalStore) -> Result<()> {
    let questions: Vec<StoredQuestion> = default_questions()
        .into_iter()
        .enumerate()
        .map(|(order, question)| StoredQuestion {
            question,
            order: order as i64,
        })
        .collect();
    store.set(QUESTIONS_KEY, &questions)?;

    let places: Vec<StoredPlace> = sample_locations().iter().map(StoredPlace::from).collect();
    store.set(PLACES_KEY, &places)?;

    Ok(())
}

/// Removes stored questions and places; returns how many keys were removed
pub fn reset(store: &LocalStore) -> Result<usize> {
    let mut removed = 0;
    for key in [QUESTIONS_KEY, PLACES_KEY] {
        if store.remove(key)? {
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> LocalStore {
        let dir = std::env::temp_dir().join(format!("travelnexa-catalog-{}", uuid::Uuid::new_v4()));
        LocalStore::open(dir).unwrap()
    }

    #[test]
    fn test_empty_store_uses_built_ins() {
        let store = temp_store();
        let (questions, source) = questions(&store);
        assert_eq!(source, Source::BuiltIn);
        assert_eq!(questions, default_questions());

        let (locations, source) = search_locations(&store);
        assert_eq!(source, Source::BuiltIn);
        assert_eq!(locations.len(), 4);
    }

    #[test]
    fn test_empty_stored_list_falls_back() {
        let store = temp_store();
        store.set(QUESTIONS_KEY, &Vec::<StoredQuestion>::new()).unwrap();
        assert_eq!(questions(&store).1, Source::BuiltIn);
    }

    #[test]
    fn test_stored_questions_sorted_by_order() {
        let store = temp_store();
        let mut defaults = default_questions();
        let stored = vec![
            StoredQuestion { question: defaults.remove(1), order: 5 },
            StoredQuestion { question: defaults.remove(0), order: 1 },
        ];
        store.set(QUESTIONS_KEY, &stored).unwrap();

        let (questions, source) = questions(&store);
        assert_eq!(source, Source::Stored);
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);
    }

    #[test]
    fn test_seed_then_reset() {
        let store = temp_store();
        seed(&store).unwrap();
        assert_eq!(questions(&store).1, Source::Stored);

        let (locations, source) = search_locations(&store);
        assert_eq!(source, Source::Stored);
        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Eiffel Tower", "Colosseum", "Statue of Liberty", "Sydney Opera House"]
        );

        assert_eq!(reset(&store).unwrap(), 2);
        assert_eq!(reset(&store).unwrap(), 0);
        assert_eq!(search_locations(&store).1, Source::BuiltIn);
    }
}
