use regex::Regex;

lazy_static::lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r#"[.,!?;:'"]"#).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonical form of a free-text answer used for comparison.
///
/// Strips `. , ! ? ; : ' "`, collapses whitespace runs to one space, trims and
/// lowercases. Absent input normalizes to the empty string.
pub fn normalize(answer: Option<&str>) -> String {
    let Some(answer) = answer else {
        return String::new();
    };
    let stripped = PUNCTUATION.replace_all(answer, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_lowercase()
}

/// True when the user answered and both answers normalize to the same text.
/// An empty answer counts as no answer.
pub fn is_correct(user_answer: Option<&str>, correct_answer: &str) -> bool {
    match user_answer {
        Some(answer) if !answer.is_empty() => {
            normalize(Some(answer)) == normalize(Some(correct_answer))
        }
        _ => false,
    }
}
