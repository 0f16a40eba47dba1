use crate::logger;
use crate::models::Question;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the `*.json` decks in `dir`, sorted by path. A missing directory
/// yields an empty list.
pub fn get_deck_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && let Some(ext) = path.extension()
                && ext == "json"
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

pub fn deck_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parses a deck: a JSON array of questions. Questions without a correct
/// answer are dropped.
pub fn parse_deck(content: &str) -> io::Result<Vec<Question>> {
    let parsed: Vec<Question> = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid deck: {}", e)))?;
    let total = parsed.len();

    let questions: Vec<Question> = parsed
        .into_iter()
        .filter(|q| !q.correct_answer.trim().is_empty())
        .collect();
    if questions.len() < total {
        logger::log(&format!(
            "Skipped {} question(s) without a correct answer",
            total - questions.len()
        ));
    }

    let mut seen = HashSet::new();
    for q in &questions {
        if !seen.insert(q.id.as_str()) {
            logger::log(&format!("Duplicate question id {} in deck", q.id));
        }
    }

    Ok(questions)
}

pub fn load_deck(path: &Path) -> io::Result<Vec<Question>> {
    let content = fs::read_to_string(path)?;
    let questions = parse_deck(&content)?;
    logger::log(&format!(
        "Loaded {} question(s) from {}",
        questions.len(),
        path.display()
    ));
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    const DECK: &str = r#"[
        {
            "id": 1,
            "type": "MULTIPLE_CHOICE",
            "questionText": "What time is the train?",
            "options": ["7:00", "7:30", "8:00"],
            "correctAnswer": "7:30",
            "explanation": "Seven thirty.",
            "audioUrl": "train.mp3"
        },
        {
            "id": "2",
            "type": "FILL_IN_BLANK",
            "questionText": "The weather is ___ today.",
            "correctAnswer": "sunny",
            "explanation": "Sunny."
        },
        {
            "id": "3",
            "type": "FILL_IN_BLANK",
            "questionText": "Broken",
            "correctAnswer": "  "
        }
    ]"#;

    #[test]
    fn test_parse_deck() {
        let questions = parse_deck(DECK).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "1");
        assert_eq!(questions[0].kind, QuestionType::MultipleChoice);
        assert_eq!(questions[1].kind, QuestionType::FillInBlank);
    }

    #[test]
    fn test_bundled_deck_parses() {
        let questions = parse_deck(include_str!("../decks/everyday_listening.json")).unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(
            questions[4].kind,
            QuestionType::Other("SENTENCE_ORDER".to_string())
        );
        assert!(questions[2].audio_url().is_none());
    }

    #[test]
    fn test_parse_deck_rejects_malformed_json() {
        let err = parse_deck("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_get_deck_files_filters_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("b.json"), "[]").unwrap();
        fs::write(temp_dir.path().join("a.json"), "[]").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let files = get_deck_files(temp_dir.path());
        let names: Vec<String> = files.iter().map(|p| deck_name(p)).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_get_deck_files_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(get_deck_files(&temp_dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_load_deck_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("listening.json");
        fs::write(&path, DECK).unwrap();
        let questions = load_deck(&path).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(deck_name(&path), "listening");
    }

    #[test]
    fn test_load_deck_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_deck(&temp_dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
