//! Query grammar: plus-words and minus-words.
//!
//! A query token with a leading `-` excludes documents containing the rest of
//! the token; any other token is a required plus-word. Stop words are
//! discarded from both sets. Two parse modes exist: [`parse_query`] produces
//! deduplicated ordered sets for the sequential paths, [`parse_flat_query`]
//! preserves duplicates in list form to seed the parallel paths, which
//! deduplicate after their fan-out.

use crate::error::SearchError;
use crate::tfidf::tokenizer::{is_valid_word, split_into_words};
use std::collections::{BTreeSet, HashSet};

/// A single classified query token.
pub(crate) struct QueryWord<'a> {
    pub word: &'a str,
    pub is_minus: bool,
    pub is_stop: bool,
}

/// Deduplicated query: ordered plus and minus word sets.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

/// Query with duplicates preserved, in token order.
#[derive(Debug, Default)]
pub(crate) struct FlatQuery {
    pub plus_words: Vec<String>,
    pub minus_words: Vec<String>,
}

pub(crate) fn parse_query_word<'a>(
    text: &'a str,
    stop_words: &HashSet<String>,
) -> Result<QueryWord<'a>, SearchError> {
    if text.is_empty() {
        return Err(SearchError::InvalidQuery(text.to_string()));
    }
    let (word, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if word.is_empty() || word.starts_with('-') || !is_valid_word(word) {
        return Err(SearchError::InvalidQuery(text.to_string()));
    }
    Ok(QueryWord {
        word,
        is_minus,
        is_stop: stop_words.contains(word),
    })
}

pub(crate) fn parse_query(text: &str, stop_words: &HashSet<String>) -> Result<Query, SearchError> {
    let mut query = Query::default();
    for token in split_into_words(text) {
        let query_word = parse_query_word(token, stop_words)?;
        if query_word.is_stop {
            continue;
        }
        if query_word.is_minus {
            query.minus_words.insert(query_word.word.to_string());
        } else {
            query.plus_words.insert(query_word.word.to_string());
        }
    }
    Ok(query)
}

pub(crate) fn parse_flat_query(
    text: &str,
    stop_words: &HashSet<String>,
) -> Result<FlatQuery, SearchError> {
    let mut query = FlatQuery::default();
    for token in split_into_words(text) {
        let query_word = parse_query_word(token, stop_words)?;
        if query_word.is_stop {
            continue;
        }
        if query_word.is_minus {
            query.minus_words.push(query_word.word.to_string());
        } else {
            query.plus_words.push(query_word.word.to_string());
        }
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_plus_and_minus_words() {
        let query = parse_query("nasty rat -not", &stop_words(&[])).unwrap();
        assert_eq!(
            query.plus_words,
            BTreeSet::from(["nasty".to_string(), "rat".to_string()])
        );
        assert_eq!(query.minus_words, BTreeSet::from(["not".to_string()]));
    }

    #[test]
    fn test_stop_words_discarded_from_both_sets() {
        let query = parse_query("cat -in the", &stop_words(&["in", "the"])).unwrap();
        assert_eq!(query.plus_words, BTreeSet::from(["cat".to_string()]));
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn test_unique_mode_deduplicates() {
        let query = parse_query("cat cat -dog -dog", &stop_words(&[])).unwrap();
        assert_eq!(query.plus_words.len(), 1);
        assert_eq!(query.minus_words.len(), 1);
    }

    #[test]
    fn test_flat_mode_preserves_duplicates() {
        let query = parse_flat_query("cat cat -dog -dog", &stop_words(&[])).unwrap();
        assert_eq!(query.plus_words, vec!["cat".to_string(), "cat".to_string()]);
        assert_eq!(query.minus_words, vec!["dog".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_double_minus_is_rejected() {
        let result = parse_query("fluffy --cat", &stop_words(&[]));
        assert_eq!(
            result.unwrap_err(),
            SearchError::InvalidQuery("--cat".to_string())
        );
    }

    #[test]
    fn test_lone_minus_is_rejected() {
        let result = parse_query("fluffy - tail", &stop_words(&[]));
        assert_eq!(result.unwrap_err(), SearchError::InvalidQuery("-".to_string()));
    }

    #[test]
    fn test_trailing_minus_token_is_rejected() {
        assert!(parse_query("fluffy -", &stop_words(&[])).is_err());
    }

    #[test]
    fn test_control_byte_is_rejected() {
        assert!(parse_query("spar\x12row", &stop_words(&[])).is_err());
        assert!(parse_query("-spar\x12row", &stop_words(&[])).is_err());
    }

    #[test]
    fn test_minus_word_keeps_interior_hyphen() {
        let query = parse_query("-well-known", &stop_words(&[])).unwrap();
        assert_eq!(
            query.minus_words,
            BTreeSet::from(["well-known".to_string()])
        );
    }
}
