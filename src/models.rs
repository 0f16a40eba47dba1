use serde::{Deserialize, Deserializer, Serialize};

/// Question variant. Decides which input modality the card renders.
///
/// Serialized as the upper snake case tag used by deck files
/// (`"MULTIPLE_CHOICE"`, `"FILL_IN_BLANK"`); any other tag is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    FillInBlank,
    Other(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::FillInBlank => "FILL_IN_BLANK",
            QuestionType::Other(tag) => tag,
        }
    }

    /// Tag shown in the card header, underscores replaced by spaces.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "MULTIPLE_CHOICE" => QuestionType::MultipleChoice,
            "FILL_IN_BLANK" => QuestionType::FillInBlank,
            _ => QuestionType::Other(tag),
        }
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Question {
    /// Options in display order; empty when the deck omitted them.
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Audio source, treating an empty URL as absent.
    pub fn audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
        RawId::Float(id) => id.to_string(),
    })
}

/// Answer record owned by the session controller and handed to the card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    pub user_answer: Option<String>,
    pub is_answered: bool,
}

impl AnswerRecord {
    pub fn answered(response: impl Into<String>) -> Self {
        Self {
            user_answer: Some(response.into()),
            is_answered: true,
        }
    }
}

/// Partial-disclosure data shown before answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintInfo {
    pub length: Option<usize>,
    pub first_char: Option<String>,
    pub text: String,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}
