pub mod audio;
pub mod card;
pub mod config;
pub mod deck;
pub mod hint;
pub mod locale;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view;


// Re-exports for convenience
pub use audio::{AudioPlayer, CommandAudioPlayer, LoggingAudioPlayer};
pub use card::{CardState, QuestionCard};
pub use config::Config;
pub use deck::{get_deck_files, load_deck};
pub use hint::generate_hint;
pub use locale::Locale;
pub use models::{AnswerRecord, AppState, HintInfo, Question, QuestionType};
pub use normalize::{is_correct, normalize};
pub use session::{QuizSession, handle_quiz_input};
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
pub use view::{CardView, card_view};
