use crate::locale::Locale;
use crate::models::{HintInfo, Question, QuestionType};

/// Builds the hint payload for a question.
///
/// Fill-in-blank hints disclose the length and first letter of the trimmed
/// answer. Other variants only get guidance text.
pub fn generate_hint(question: &Question, locale: Locale) -> HintInfo {
    let strings = locale.strings();
    match question.kind {
        QuestionType::FillInBlank => {
            let answer = question.correct_answer.trim();
            HintInfo {
                length: Some(answer.chars().count()),
                first_char: Some(
                    answer
                        .chars()
                        .next()
                        .map(|c| c.to_uppercase().collect())
                        .unwrap_or_default(),
                ),
                text: strings.hint_missing_word.to_string(),
            }
        }
        QuestionType::MultipleChoice => HintInfo {
            length: None,
            first_char: None,
            text: strings.hint_eliminate_options.to_string(),
        },
        QuestionType::Other(_) => HintInfo {
            length: None,
            first_char: None,
            text: strings.hint_word_order.to_string(),
        },
    }
}
