use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::normalize::normalize_question;
use crate::models::Interaction;

/// Everything the bot knows, in the shape it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Normalized question -> distinct answers in the order they were taught.
    #[serde(default)]
    pub knowledge_base: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub history: Vec<Interaction>,
}

impl KnowledgeBase {
    /// Find the answers stored for a normalized question.
    ///
    /// Stored keys are normalized during the scan as well, so entries added
    /// to the data file by hand still match.
    pub fn lookup(&self, normalized: &str) -> Option<&[String]> {
        if let Some(answers) = self.knowledge_base.get(normalized) {
            return Some(answers.as_slice());
        }
        self.knowledge_base
            .iter()
            .find(|(stored, _)| normalize_question(stored) == normalized)
            .map(|(_, answers)| answers.as_slice())
    }

    /// Add an answer under a normalized question. Returns false when the
    /// exact answer is already known.
    pub fn teach(&mut self, normalized: &str, answer: &str) -> bool {
        let answers = self
            .knowledge_base
            .entry(normalized.to_string())
            .or_default();
        if answers.iter().any(|known| known == answer) {
            return false;
        }
        answers.push(answer.to_string());
        true
    }

    pub fn record(&mut self, interaction: Interaction) {
        self.history.push(interaction);
    }

    pub fn question_count(&self) -> usize {
        self.knowledge_base.len()
    }

    pub fn learned_count(&self) -> usize {
        self.history.iter().filter(|i| i.learned).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_base_default_is_empty() {
        let kb = KnowledgeBase::default();
        assert_eq!(kb.question_count(), 0);
        assert!(kb.history.is_empty());
    }

    #[test]
    fn knowledge_base_teach_creates_entry() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.teach("co to jest kot", "zwierzę domowe"));
        assert_eq!(
            kb.lookup("co to jest kot"),
            Some(&["zwierzę domowe".to_string()][..])
        );
    }

    #[test]
    fn knowledge_base_teach_deduplicates_answers() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.teach("kot", "zwierzę"));
        assert!(
            !kb.teach("kot", "zwierzę"),
            "teach: identical answer should not be added twice"
        );
        assert_eq!(kb.lookup("kot").map(|a| a.len()), Some(1));
    }

    #[test]
    fn knowledge_base_teach_preserves_answer_order() {
        let mut kb = KnowledgeBase::default();
        kb.teach("kot", "zwierzę");
        kb.teach("kot", "mruczy");
        kb.teach("kot", "zwierzę");
        kb.teach("kot", "lubi mleko");
        assert_eq!(
            kb.lookup("kot").unwrap(),
            &["zwierzę", "mruczy", "lubi mleko"]
        );
    }

    #[test]
    fn knowledge_base_lookup_miss_returns_none() {
        let kb = KnowledgeBase::default();
        assert!(kb.lookup("cokolwiek").is_none());
    }

    #[test]
    fn knowledge_base_lookup_matches_non_normalized_stored_keys() {
        let mut kb = KnowledgeBase::default();
        kb.knowledge_base
            .insert("Co to jest Kot?".to_string(), vec!["zwierzę".to_string()]);
        assert_eq!(
            kb.lookup("co to jest kot").map(|a| a[0].as_str()),
            Some("zwierzę"),
            "lookup: hand-edited keys should match after normalization"
        );
    }

    #[test]
    fn knowledge_base_record_appends_history() {
        let mut kb = KnowledgeBase::default();
        kb.record(Interaction::answered("a", "b"));
        kb.record(Interaction::learned("c", "d"));
        assert_eq!(kb.history.len(), 2);
        assert_eq!(kb.history[0].question, "a");
        assert_eq!(kb.learned_count(), 1);
    }

    #[test]
    fn knowledge_base_deserializes_with_missing_fields() {
        let kb: KnowledgeBase = serde_json::from_str("{}").unwrap();
        assert_eq!(kb, KnowledgeBase::default());

        let kb: KnowledgeBase =
            serde_json::from_str(r#"{"knowledge_base": {"kot": ["zwierzę"]}}"#).unwrap();
        assert_eq!(kb.question_count(), 1);
        assert!(kb.history.is_empty());
    }
}
