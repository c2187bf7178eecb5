use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A practice word with its correct spelling and the distractors shown beside it.
///
/// Serialized as `{ "word", "correct", "incorrect": [..] }`, the shape both the
/// seed files and the `/words` response use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "word")]
    pub id: String,
    pub correct: String,
    #[serde(default)]
    pub incorrect: BTreeSet<String>,
}

impl Word {
    pub fn new<I, S>(id: &str, correct: &str, incorrect: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.to_string(),
            correct: correct.to_string(),
            incorrect: incorrect.into_iter().map(Into::into).collect(),
        }
    }
}

/// One answered drill item as submitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOutcome {
    pub word: String,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_wire_format() {
        let word = Word::new("necessary", "necessary", ["neccessary", "necesary"]);
        let json = serde_json::to_value(&word).unwrap();

        assert_eq!(json["word"], "necessary");
        assert_eq!(json["correct"], "necessary");
        // Sets are emitted sorted
        assert_eq!(json["incorrect"], serde_json::json!(["neccessary", "necesary"]));
    }

    #[test]
    fn test_word_missing_incorrect_defaults_empty() {
        let word: Word = serde_json::from_str(r#"{"word":"a","correct":"a"}"#).unwrap();
        assert!(word.incorrect.is_empty());
    }

    #[test]
    fn test_duplicate_incorrect_forms_collapse() {
        let word: Word =
            serde_json::from_str(r#"{"word":"a","correct":"a","incorrect":["b","b","c"]}"#).unwrap();
        assert_eq!(word.incorrect.len(), 2);
    }

    #[test]
    fn test_outcome_uses_camel_case() {
        let outcome: WordOutcome =
            serde_json::from_str(r#"{"word":"receive","isCorrect":true}"#).unwrap();
        assert_eq!(outcome.word, "receive");
        assert!(outcome.is_correct);
    }
}
