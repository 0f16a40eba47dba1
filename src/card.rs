use crate::hint::generate_hint;
use crate::locale::Locale;
use crate::logger;
use crate::models::{AnswerRecord, HintInfo, Question, QuestionType};

/// Ephemeral state of the card for one question.
///
/// Keyed by the question id. A different id means a fresh `CardState`, never
/// an in-place patch of the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    pub question_id: String,
    pub input_buffer: String,
    /// Cursor into `input_buffer`, counted in chars.
    pub cursor_position: usize,
    pub hint_visible: bool,
    pub hint: Option<HintInfo>,
}

impl CardState {
    pub fn for_question(question_id: &str) -> Self {
        Self {
            question_id: question_id.to_string(),
            ..Self::default()
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_index)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input_buffer.len())
    }

    fn input_len(&self) -> usize {
        self.input_buffer.chars().count()
    }
}

/// Interaction logic of the question card.
///
/// Every handler takes the question and the externally owned answer record.
/// Once `record.is_answered` is set the handlers ignore the event; the card
/// itself never remembers that it submitted.
#[derive(Debug)]
pub struct QuestionCard {
    state: CardState,
    locale: Locale,
}

impl QuestionCard {
    pub fn new(question: &Question, locale: Locale) -> Self {
        Self {
            state: CardState::for_question(&question.id),
            locale,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Discards the ephemeral state when `question` is not the one the state
    /// belongs to. Returns whether a reset happened.
    pub fn sync(&mut self, question: &Question) -> bool {
        if self.state.question_id == question.id {
            return false;
        }
        logger::log(&format!(
            "Card switched from question {} to {}",
            self.state.question_id, question.id
        ));
        self.state = CardState::for_question(&question.id);
        true
    }

    /// Returns the memoized hint, generating it on first request.
    pub fn ensure_hint(&mut self, question: &Question) -> &HintInfo {
        self.sync(question);
        let locale = self.locale;
        self.state.hint.get_or_insert_with(|| {
            logger::log(&format!("Generated hint for question {}", question.id));
            generate_hint(question, locale)
        })
    }

    /// Flips hint visibility. Not available once the question is answered.
    pub fn toggle_hint(&mut self, question: &Question, record: &AnswerRecord) -> bool {
        self.sync(question);
        if record.is_answered {
            return false;
        }
        self.ensure_hint(question);
        self.state.hint_visible = !self.state.hint_visible;
        true
    }

    /// Reports `option` verbatim through `on_answer`. Returns whether the
    /// callback fired.
    pub fn select_option<F>(
        &mut self,
        question: &Question,
        record: &AnswerRecord,
        option: &str,
        on_answer: F,
    ) -> bool
    where
        F: FnOnce(String),
    {
        self.sync(question);
        if record.is_answered || question.kind != QuestionType::MultipleChoice {
            return false;
        }
        on_answer(option.to_string());
        true
    }

    /// Selects the option at `index` in display order.
    pub fn select_option_at<F>(
        &mut self,
        question: &Question,
        record: &AnswerRecord,
        index: usize,
        on_answer: F,
    ) -> bool
    where
        F: FnOnce(String),
    {
        match question.options().get(index) {
            Some(option) => self.select_option(question, record, option, on_answer),
            None => false,
        }
    }

    /// Reports the trimmed draft through `on_answer`. Blank drafts are
    /// ignored. The draft itself is left as typed.
    pub fn submit<F>(&mut self, question: &Question, record: &AnswerRecord, on_answer: F) -> bool
    where
        F: FnOnce(String),
    {
        self.sync(question);
        if record.is_answered || question.kind != QuestionType::FillInBlank {
            return false;
        }
        let trimmed = self.state.input_buffer.trim();
        if trimmed.is_empty() {
            return false;
        }
        on_answer(trimmed.to_string());
        true
    }

    fn editable(&mut self, question: &Question, record: &AnswerRecord) -> bool {
        self.sync(question);
        !record.is_answered && question.kind == QuestionType::FillInBlank
    }

    pub fn insert_char(&mut self, question: &Question, record: &AnswerRecord, c: char) {
        if !self.editable(question, record) {
            return;
        }
        let idx = self.state.byte_index(self.state.cursor_position);
        self.state.input_buffer.insert(idx, c);
        self.state.cursor_position += 1;
    }

    pub fn backspace(&mut self, question: &Question, record: &AnswerRecord) {
        if !self.editable(question, record) || self.state.cursor_position == 0 {
            return;
        }
        let idx = self.state.byte_index(self.state.cursor_position - 1);
        self.state.input_buffer.remove(idx);
        self.state.cursor_position -= 1;
    }

    pub fn move_cursor_left(&mut self, question: &Question, record: &AnswerRecord) {
        if self.editable(question, record) {
            self.state.cursor_position = self.state.cursor_position.saturating_sub(1);
        }
    }

    pub fn move_cursor_right(&mut self, question: &Question, record: &AnswerRecord) {
        if self.editable(question, record) && self.state.cursor_position < self.state.input_len() {
            self.state.cursor_position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_in_blank(id: &str, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            kind: QuestionType::FillInBlank,
            question_text: "I would like a cup of ___.".to_string(),
            options: None,
            correct_answer: correct.to_string(),
            explanation: String::new(),
            audio_url: None,
        }
    }

    fn multiple_choice(id: &str) -> Question {
        Question {
            id: id.to_string(),
            kind: QuestionType::MultipleChoice,
            question_text: "Which letter did you hear?".to_string(),
            options: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            correct_answer: "B".to_string(),
            explanation: String::new(),
            audio_url: None,
        }
    }

    fn type_text(card: &mut QuestionCard, q: &Question, record: &AnswerRecord, text: &str) {
        for c in text.chars() {
            card.insert_char(q, record, c);
        }
    }

    #[test]
    fn test_submit_trims_but_keeps_punctuation() {
        let q = fill_in_blank("f1", "Hello");
        let record = AnswerRecord::default();
        let mut card = QuestionCard::new(&q, Locale::En);
        type_text(&mut card, &q, &record, "  hello! ");

        let mut sent = Vec::new();
        assert!(card.submit(&q, &record, |r| sent.push(r)));
        assert_eq!(sent, ["hello!"]);
        assert_eq!(card.state().input_buffer, "  hello! ");
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let q = fill_in_blank("f1", "Hello");
        let record = AnswerRecord::default();
        let mut card = QuestionCard::new(&q, Locale::En);
        let mut calls = 0;
        assert!(!card.submit(&q, &record, |_| calls += 1));
        type_text(&mut card, &q, &record, "   \t");
        assert!(!card.submit(&q, &record, |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_handlers_are_noops_once_answered() {
        let fib = fill_in_blank("f1", "Hello");
        let mc = multiple_choice("m1");
        let answered = AnswerRecord::answered("hello");
        let mut calls = 0;

        let mut card = QuestionCard::new(&fib, Locale::En);
        type_text(&mut card, &fib, &AnswerRecord::default(), "hello");
        assert!(!card.submit(&fib, &answered, |_| calls += 1));
        type_text(&mut card, &fib, &answered, "more");
        assert_eq!(card.state().input_buffer, "hello");

        let mut card = QuestionCard::new(&mc, Locale::En);
        assert!(!card.select_option(&mc, &answered, "C", |_| calls += 1));
        assert!(!card.select_option_at(&mc, &answered, 0, |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_select_option_reports_verbatim() {
        let q = multiple_choice("m1");
        let mut card = QuestionCard::new(&q, Locale::En);
        let mut sent = None;
        assert!(card.select_option_at(&q, &AnswerRecord::default(), 2, |r| sent = Some(r)));
        assert_eq!(sent.as_deref(), Some("C"));
    }

    #[test]
    fn test_select_option_out_of_range() {
        let q = multiple_choice("m1");
        let mut card = QuestionCard::new(&q, Locale::En);
        let mut calls = 0;
        assert!(!card.select_option_at(&q, &AnswerRecord::default(), 3, |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_options_only_selectable_on_multiple_choice() {
        let q = fill_in_blank("f1", "Hello");
        let mut card = QuestionCard::new(&q, Locale::En);
        let mut calls = 0;
        assert!(!card.select_option(&q, &AnswerRecord::default(), "Hello", |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_hint_is_memoized() {
        let q = fill_in_blank("f1", "Hello");
        let mut card = QuestionCard::new(&q, Locale::En);
        let first = card.ensure_hint(&q).clone();
        let second = card.ensure_hint(&q).clone();
        assert_eq!(first, second);
        assert_eq!(first.length, Some(5));
    }

    #[test]
    fn test_hint_recomputed_after_question_round_trip() {
        let a = fill_in_blank("a", "Hello");
        let b = multiple_choice("b");
        let mut card = QuestionCard::new(&a, Locale::En);
        let before = card.ensure_hint(&a).clone();

        assert!(card.sync(&b));
        assert!(card.state().hint.is_none());
        assert!(card.sync(&a));
        assert!(card.state().hint.is_none());

        let after = card.ensure_hint(&a).clone();
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_hint_flips_visibility() {
        let q = multiple_choice("m1");
        let record = AnswerRecord::default();
        let mut card = QuestionCard::new(&q, Locale::En);
        assert!(card.toggle_hint(&q, &record));
        assert!(card.state().hint_visible);
        assert!(card.state().hint.is_some());
        assert!(card.toggle_hint(&q, &record));
        assert!(!card.state().hint_visible);
        assert!(card.state().hint.is_some());
    }

    #[test]
    fn test_toggle_hint_unavailable_when_answered() {
        let q = multiple_choice("m1");
        let mut card = QuestionCard::new(&q, Locale::En);
        assert!(!card.toggle_hint(&q, &AnswerRecord::answered("A")));
        assert!(!card.state().hint_visible);
        assert!(card.state().hint.is_none());
    }

    #[test]
    fn test_state_resets_on_question_change() {
        let a = fill_in_blank("a", "Hello");
        let b = fill_in_blank("b", "World");
        let record = AnswerRecord::default();
        let mut card = QuestionCard::new(&a, Locale::En);
        type_text(&mut card, &a, &record, "hel");
        card.toggle_hint(&a, &record);

        assert!(card.sync(&b));
        assert_eq!(card.state(), &CardState::for_question("b"));
        assert!(!card.sync(&b));
    }

    #[test]
    fn test_handlers_reset_stale_state() {
        let a = fill_in_blank("a", "Hello");
        let b = fill_in_blank("b", "World");
        let record = AnswerRecord::default();
        let mut card = QuestionCard::new(&a, Locale::En);
        type_text(&mut card, &a, &record, "hel");

        let mut calls = 0;
        assert!(!card.submit(&b, &record, |_| calls += 1));
        assert_eq!(calls, 0);
        assert_eq!(card.state().question_id, "b");
    }

    #[test]
    fn test_cursor_editing_with_multibyte_input() {
        let q = fill_in_blank("f1", "phở");
        let record = AnswerRecord::default();
        let mut card = QuestionCard::new(&q, Locale::Vi);
        type_text(&mut card, &q, &record, "phở");
        card.move_cursor_left(&q, &record);
        card.backspace(&q, &record);
        assert_eq!(card.state().input_buffer, "pở");
        assert_eq!(card.state().cursor_position, 1);

        card.insert_char(&q, &record, 'h');
        assert_eq!(card.state().input_buffer, "phở");
        card.move_cursor_right(&q, &record);
        card.move_cursor_right(&q, &record);
        assert_eq!(card.state().cursor_position, 3);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let q = fill_in_blank("f1", "x");
        let record = AnswerRecord::default();
        let mut card = QuestionCard::new(&q, Locale::En);
        card.backspace(&q, &record);
        card.move_cursor_left(&q, &record);
        assert!(card.state().input_buffer.is_empty());
        assert_eq!(card.state().cursor_position, 0);
    }
}
