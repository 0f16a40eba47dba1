/// Language of the card's fixed copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Vi,
    En,
}

/// Fixed copy used by the hint generator and the card view.
#[derive(Debug)]
pub struct Strings {
    pub hint_missing_word: &'static str,
    pub hint_eliminate_options: &'static str,
    pub hint_word_order: &'static str,
    pub hint_show: &'static str,
    pub hint_hide: &'static str,
    pub hint_length: &'static str,
    pub hint_letters: &'static str,
    pub hint_starts_with: &'static str,
    pub input_placeholder: &'static str,
    pub submit: &'static str,
    pub typed_count: &'static str,
    pub verdict_correct: &'static str,
    pub verdict_incorrect: &'static str,
    pub correct_answer: &'static str,
    pub explanation: &'static str,
}

const VI: Strings = Strings {
    hint_missing_word: "Hãy tập trung nghe kỹ từ còn thiếu trong đoạn audio.",
    hint_eliminate_options: "Gợi ý: Hãy loại bỏ những đáp án bạn nghe thấy rõ ràng là không khớp với ngữ cảnh.",
    hint_word_order: "Gợi ý: Chú ý thứ tự các thành phần S + V + O trong câu.",
    hint_show: "Gợi ý 💡",
    hint_hide: "Ẩn Gợi ý",
    hint_length: "Độ dài",
    hint_letters: "chữ cái",
    hint_starts_with: "Bắt đầu bằng",
    input_placeholder: "Nhập đáp án bạn nghe được...",
    submit: "GỬI",
    typed_count: "Đã nhập",
    verdict_correct: "TUYỆT VỜI!",
    verdict_incorrect: "CHƯA CHÍNH XÁC",
    correct_answer: "Đáp án đúng",
    explanation: "Giải thích & Dịch thuật",
};

const EN: Strings = Strings {
    hint_missing_word: "Listen carefully for the missing word in the audio.",
    hint_eliminate_options: "Hint: rule out the options that clearly do not match what you hear.",
    hint_word_order: "Hint: pay attention to the S + V + O order of the sentence.",
    hint_show: "Hint 💡",
    hint_hide: "Hide hint",
    hint_length: "Length",
    hint_letters: "letters",
    hint_starts_with: "Starts with",
    input_placeholder: "Type what you heard...",
    submit: "SUBMIT",
    typed_count: "Typed",
    verdict_correct: "GREAT!",
    verdict_incorrect: "NOT QUITE",
    correct_answer: "Correct answer",
    explanation: "Explanation & Translation",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Vi => &VI,
            Locale::En => &EN,
        }
    }

    /// Parses a locale tag such as `vi`, `en` or `en-US`.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "vi" => Some(Locale::Vi),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}
