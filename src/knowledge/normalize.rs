use regex::Regex;
use std::sync::OnceLock;

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"))
}

/// Lower-case a question and strip everything except word characters and
/// whitespace. The result is the knowledge base key.
pub fn normalize_question(question: &str) -> String {
    let lowered = question.to_lowercase();
    punctuation().replace_all(&lowered, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_question_strips_punctuation() {
        assert_eq!(normalize_question("co to jest kot?"), "co to jest kot");
        assert_eq!(normalize_question("Hej, jak się masz?!"), "hej jak się masz");
    }

    #[test]
    fn normalize_question_folds_case() {
        assert_eq!(normalize_question("CO TO JEST KOT"), "co to jest kot");
        assert_eq!(
            normalize_question("ŻÓŁW"),
            "żółw",
            "normalize_question: Polish letters should be lower-cased, not stripped"
        );
    }

    #[test]
    fn normalize_question_keeps_digits_and_underscores() {
        assert_eq!(normalize_question("ile to 2_3?"), "ile to 2_3");
    }

    #[test]
    fn normalize_question_trims_outer_whitespace() {
        assert_eq!(normalize_question("  ? kot !  "), "kot");
    }

    #[test]
    fn normalize_question_only_punctuation_is_empty() {
        assert_eq!(normalize_question("?!..."), "");
    }
}
