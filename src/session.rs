use crate::audio::AudioPlayer;
use crate::card::QuestionCard;
use crate::locale::Locale;
use crate::logger;
use crate::models::{AnswerRecord, AppState, Question, QuestionType};
use crate::normalize::is_correct;
use crate::view::{CardView, Phase, card_view};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Session controller: owns the questions and their answer records and
/// hosts one `QuestionCard` for the current question.
#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    pub answers: Vec<AnswerRecord>,
    pub current_index: usize,
    pub deck_name: String,
    pub card: QuestionCard,
}

impl QuizSession {
    /// `None` for an empty deck.
    pub fn new(deck_name: impl Into<String>, questions: Vec<Question>, locale: Locale) -> Option<Self> {
        let card = QuestionCard::new(questions.first()?, locale);
        let answers = vec![AnswerRecord::default(); questions.len()];
        Some(Self {
            questions,
            answers,
            current_index: 0,
            deck_name: deck_name.into(),
            card,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_record(&self) -> &AnswerRecord {
        &self.answers[self.current_index]
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Answer callback target. The first answer for a question wins.
    pub fn record_answer(&mut self, index: usize, response: String) {
        let Some(record) = self.answers.get_mut(index) else {
            return;
        };
        if record.is_answered {
            logger::log(&format!("Ignored second answer for question {}", index + 1));
            return;
        }
        logger::log(&format!(
            "Recorded answer for question {} ({})",
            index + 1,
            self.questions[index].id
        ));
        *record = AnswerRecord::answered(response);
    }

    pub fn go_to(&mut self, index: usize) {
        if index >= self.questions.len() {
            return;
        }
        self.current_index = index;
        self.card.sync(&self.questions[index]);
    }

    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.go_to(self.current_index + 1);
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.go_to(self.current_index - 1);
        true
    }

    /// Clears all answers and starts over, optionally with new questions order.
    pub fn restart(&mut self, questions: Option<Vec<Question>>) {
        if let Some(questions) = questions.filter(|q| !q.is_empty()) {
            self.questions = questions;
        }
        self.answers = vec![AnswerRecord::default(); self.questions.len()];
        self.current_index = 0;
        // The first question may keep its id, so sync alone would not reset.
        self.card = QuestionCard::new(&self.questions[0], self.card.locale());
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered).count()
    }

    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| a.is_answered && is_correct(a.user_answer.as_deref(), &q.correct_answer))
            .count()
    }

    pub fn view(&self) -> CardView {
        card_view(
            self.current_question(),
            self.current_record(),
            self.card.state(),
            self.card.locale(),
        )
    }

    fn select_option_at(&mut self, option_index: usize) {
        let index = self.current_index;
        let mut response = None;
        self.card.select_option_at(
            &self.questions[index],
            &self.answers[index],
            option_index,
            |r| response = Some(r),
        );
        if let Some(response) = response {
            self.record_answer(index, response);
        }
    }

    fn submit(&mut self) {
        let index = self.current_index;
        let mut response = None;
        self.card
            .submit(&self.questions[index], &self.answers[index], |r| response = Some(r));
        if let Some(response) = response {
            self.record_answer(index, response);
        }
    }

    fn toggle_hint(&mut self) {
        let index = self.current_index;
        self.card.toggle_hint(&self.questions[index], &self.answers[index]);
    }

    fn play_audio(&self, audio: &mut dyn AudioPlayer) {
        if let Some(url) = self.current_question().audio_url() {
            audio.play(url);
        }
    }

    fn advance_or_finish(&mut self, app_state: &mut AppState) {
        if !self.next() {
            *app_state = AppState::Summary;
        }
    }
}

/// Maps an option key to its index: `a`/`A` or `1` for the first option.
fn option_index_for(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        '1'..='9' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
    audio: &mut dyn AudioPlayer,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
            return;
        }
        KeyCode::Char('p') if ctrl => {
            session.play_audio(audio);
            return;
        }
        KeyCode::Down => {
            session.next();
            return;
        }
        KeyCode::Up => {
            session.previous();
            return;
        }
        _ => {}
    }

    if Phase::of(session.current_record()) == Phase::Answered {
        if key.code == KeyCode::Enter {
            session.advance_or_finish(app_state);
        }
        return;
    }

    if key.code == KeyCode::Tab {
        session.toggle_hint();
        return;
    }

    let index = session.current_index;
    match session.questions[index].kind {
        QuestionType::MultipleChoice => {
            if let KeyCode::Char(c) = key.code
                && !ctrl
                && let Some(option_index) = option_index_for(c)
            {
                session.select_option_at(option_index);
            }
        }
        QuestionType::FillInBlank => {
            if key.code == KeyCode::Enter {
                session.submit();
                return;
            }
            let QuizSession {
                questions,
                answers,
                card,
                ..
            } = session;
            let (question, record) = (&questions[index], &answers[index]);
            match key.code {
                KeyCode::Left => card.move_cursor_left(question, record),
                KeyCode::Right => card.move_cursor_right(question, record),
                KeyCode::Backspace => card.backspace(question, record),
                KeyCode::Char(c) if !ctrl => card.insert_char(question, record, c),
                _ => {}
            }
        }
        // No input modality; Enter moves on.
        QuestionType::Other(_) => {
            if key.code == KeyCode::Enter {
                session.advance_or_finish(app_state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LoggingAudioPlayer;

    fn questions() -> Vec<Question> {
        vec![
            Question {
                id: "1".to_string(),
                kind: QuestionType::FillInBlank,
                question_text: "___, nice to meet you.".to_string(),
                options: None,
                correct_answer: "Hello".to_string(),
                explanation: "A greeting.".to_string(),
                audio_url: Some("hello.mp3".to_string()),
            },
            Question {
                id: "2".to_string(),
                kind: QuestionType::MultipleChoice,
                question_text: "Which letter?".to_string(),
                options: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
                correct_answer: "B".to_string(),
                explanation: "B it is.".to_string(),
                audio_url: None,
            },
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(session: &mut QuizSession, state: &mut AppState, codes: &[KeyCode]) {
        let mut audio = LoggingAudioPlayer::default();
        for code in codes {
            handle_quiz_input(session, key(*code), state, &mut audio);
        }
    }

    fn type_str(session: &mut QuizSession, state: &mut AppState, text: &str) {
        let codes: Vec<KeyCode> = text.chars().map(KeyCode::Char).collect();
        press(session, state, &codes);
    }

    #[test]
    fn test_empty_deck_has_no_session() {
        assert!(QuizSession::new("empty", vec![], Locale::En).is_none());
    }

    #[test]
    fn test_fill_in_blank_flow() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;

        type_str(&mut session, &mut state, "  hello! ");
        press(&mut session, &mut state, &[KeyCode::Enter]);

        assert_eq!(session.answers[0], AnswerRecord::answered("hello!"));
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.view().phase, Phase::Answered);
    }

    #[test]
    fn test_blank_enter_does_not_answer() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;
        type_str(&mut session, &mut state, "   ");
        press(&mut session, &mut state, &[KeyCode::Enter]);
        assert!(!session.answers[0].is_answered);
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_multiple_choice_flow_and_summary() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;

        type_str(&mut session, &mut state, "hi");
        press(&mut session, &mut state, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(session.current_index, 1);

        press(&mut session, &mut state, &[KeyCode::Char('c')]);
        assert_eq!(session.answers[1], AnswerRecord::answered("C"));

        // Further picks are ignored once answered.
        press(&mut session, &mut state, &[KeyCode::Char('b')]);
        assert_eq!(session.answers[1].user_answer.as_deref(), Some("C"));

        press(&mut session, &mut state, &[KeyCode::Enter]);
        assert_eq!(state, AppState::Summary);
        assert_eq!(session.answered_count(), 2);
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn test_record_answer_only_once() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        session.record_answer(1, "A".to_string());
        session.record_answer(1, "B".to_string());
        assert_eq!(session.answers[1].user_answer.as_deref(), Some("A"));
        session.record_answer(9, "A".to_string());
    }

    #[test]
    fn test_navigation_resets_card_state() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;
        type_str(&mut session, &mut state, "hel");
        press(&mut session, &mut state, &[KeyCode::Tab]);
        assert!(session.card.state().hint_visible);

        press(&mut session, &mut state, &[KeyCode::Down]);
        assert_eq!(session.card.state().question_id, "2");
        assert!(session.card.state().input_buffer.is_empty());
        assert!(!session.card.state().hint_visible);
        assert!(session.card.state().hint.is_none());

        press(&mut session, &mut state, &[KeyCode::Up]);
        assert_eq!(session.current_index, 0);
        assert!(session.card.state().input_buffer.is_empty());
    }

    #[test]
    fn test_hint_toggle_ignored_after_answer() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;
        session.go_to(1);
        press(&mut session, &mut state, &[KeyCode::Char('a'), KeyCode::Tab]);
        assert!(!session.card.state().hint_visible);
    }

    #[test]
    fn test_escape_asks_for_confirmation() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;
        press(&mut session, &mut state, &[KeyCode::Esc]);
        assert_eq!(state, AppState::QuizQuitConfirm);
    }

    #[test]
    fn test_ctrl_p_requests_audio() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;
        let mut audio = LoggingAudioPlayer::default();
        handle_quiz_input(
            &mut session,
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL),
            &mut state,
            &mut audio,
        );
        assert_eq!(audio.last_requested.as_deref(), Some("hello.mp3"));
        assert!(session.card.state().input_buffer.is_empty());
    }

    #[test]
    fn test_restart_clears_answers() {
        let mut session = QuizSession::new("deck", questions(), Locale::En).unwrap();
        let mut state = AppState::Quiz;
        type_str(&mut session, &mut state, "hello");
        press(&mut session, &mut state, &[KeyCode::Enter]);

        session.restart(None);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.current_index, 0);
        assert!(session.card.state().input_buffer.is_empty());
    }

    #[test]
    fn test_option_index_for_keys() {
        assert_eq!(option_index_for('a'), Some(0));
        assert_eq!(option_index_for('C'), Some(2));
        assert_eq!(option_index_for('1'), Some(0));
        assert_eq!(option_index_for('!'), None);
    }
}
