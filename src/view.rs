//! Render selector: a pure function from the card's inputs to a description
//! of what to draw. Drawing lives in `ui::card`.

use crate::card::CardState;
use crate::locale::Locale;
use crate::models::{AnswerRecord, HintInfo, Question, QuestionType};
use crate::normalize::is_correct;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered,
}

impl Phase {
    pub fn of(record: &AnswerRecord) -> Self {
        if record.is_answered {
            Phase::Answered
        } else {
            Phase::Unanswered
        }
    }
}

/// Display treatment of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceTreatment {
    Selectable,
    Correct,
    IncorrectSelected,
    Dimmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub letter: char,
    pub text: String,
    pub treatment: ChoiceTreatment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTreatment {
    Editable,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub value: String,
    pub placeholder: &'static str,
    pub treatment: FieldTreatment,
    /// Submit label; `None` once answered.
    pub submit_label: Option<&'static str>,
    /// Live character count line; `None` once answered.
    pub typed_count: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputView {
    Choices(Vec<ChoiceView>),
    TextField(TextFieldView),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintView {
    pub length: Option<String>,
    pub first_char: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub correct: bool,
    pub heading: &'static str,
    /// Uppercased correct answer, only shown for a wrong answer.
    pub correct_answer: Option<String>,
    pub correct_answer_label: &'static str,
    pub explanation_label: &'static str,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub phase: Phase,
    pub type_label: String,
    pub question_id: String,
    /// Hint toggle label; `None` hides the toggle.
    pub hint_toggle: Option<&'static str>,
    pub audio_url: Option<String>,
    pub hint: Option<HintView>,
    pub question_text: String,
    pub input: InputView,
    pub feedback: Option<FeedbackView>,
}

/// Letter label for the option at `index`: `A`, `B`, `C`...
pub fn option_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32('A' as u32 + i))
        .unwrap_or('?')
}

fn choice_treatment(option: &str, question: &Question, record: &AnswerRecord) -> ChoiceTreatment {
    if !record.is_answered {
        ChoiceTreatment::Selectable
    } else if option == question.correct_answer {
        ChoiceTreatment::Correct
    } else if record.user_answer.as_deref() == Some(option) {
        ChoiceTreatment::IncorrectSelected
    } else {
        ChoiceTreatment::Dimmed
    }
}

fn hint_view(hint: &HintInfo, locale: Locale) -> HintView {
    let strings = locale.strings();
    HintView {
        length: hint
            .length
            .filter(|len| *len > 0)
            .map(|len| format!("{}: {} {}", strings.hint_length, len, strings.hint_letters)),
        first_char: hint
            .first_char
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!("{}: \"{}\"", strings.hint_starts_with, c)),
        text: Some(hint.text.clone()).filter(|text| !text.is_empty()),
    }
}

fn text_field_view(
    record: &AnswerRecord,
    state: &CardState,
    correct: bool,
    locale: Locale,
) -> TextFieldView {
    let strings = locale.strings();
    if record.is_answered {
        let value = match record.user_answer.as_deref() {
            Some(answer) if !answer.is_empty() => answer.to_string(),
            _ => state.input_buffer.clone(),
        };
        return TextFieldView {
            value,
            placeholder: strings.input_placeholder,
            treatment: if correct {
                FieldTreatment::Correct
            } else {
                FieldTreatment::Incorrect
            },
            submit_label: None,
            typed_count: None,
        };
    }
    TextFieldView {
        value: state.input_buffer.clone(),
        placeholder: strings.input_placeholder,
        treatment: FieldTreatment::Editable,
        submit_label: Some(strings.submit),
        typed_count: Some(format!(
            "{}: {}",
            strings.typed_count,
            state.input_buffer.chars().count()
        )),
    }
}

/// Describes the card for the given inputs.
///
/// `state` is ignored when it belongs to another question, so a stale state
/// can never leak into the view.
pub fn card_view(
    question: &Question,
    record: &AnswerRecord,
    state: &CardState,
    locale: Locale,
) -> CardView {
    let fresh;
    let state = if state.question_id == question.id {
        state
    } else {
        fresh = CardState::for_question(&question.id);
        &fresh
    };

    let strings = locale.strings();
    let phase = Phase::of(record);
    let correct = is_correct(record.user_answer.as_deref(), &question.correct_answer);

    let hint_toggle = match phase {
        Phase::Unanswered if state.hint_visible => Some(strings.hint_hide),
        Phase::Unanswered => Some(strings.hint_show),
        Phase::Answered => None,
    };

    let hint = match (phase, &state.hint) {
        (Phase::Unanswered, Some(hint)) if state.hint_visible => Some(hint_view(hint, locale)),
        _ => None,
    };

    let input = match question.kind {
        QuestionType::MultipleChoice => InputView::Choices(
            question
                .options()
                .iter()
                .enumerate()
                .map(|(idx, option)| ChoiceView {
                    letter: option_letter(idx),
                    text: option.clone(),
                    treatment: choice_treatment(option, question, record),
                })
                .collect(),
        ),
        QuestionType::FillInBlank => {
            InputView::TextField(text_field_view(record, state, correct, locale))
        }
        QuestionType::Other(_) => InputView::None,
    };

    let feedback = match phase {
        Phase::Answered => Some(FeedbackView {
            correct,
            heading: if correct {
                strings.verdict_correct
            } else {
                strings.verdict_incorrect
            },
            correct_answer: (!correct).then(|| question.correct_answer.to_uppercase()),
            correct_answer_label: strings.correct_answer,
            explanation_label: strings.explanation,
            explanation: question.explanation.clone(),
        }),
        Phase::Unanswered => None,
    };

    CardView {
        phase,
        type_label: question.kind.label(),
        question_id: question.id.clone(),
        hint_toggle,
        audio_url: question.audio_url().map(str::to_string),
        hint,
        question_text: question.question_text.clone(),
        input,
        feedback,
    }
}
