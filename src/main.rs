use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use listening_quiz::{
    AppState, Config, Question, QuizSession, audio, deck, draw_menu, draw_quit_confirmation,
    draw_quiz, draw_summary, handle_quiz_input, logger,
};
use rand::seq::SliceRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

/// Restores the terminal when dropped, including on early `?` returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

fn prepare_questions(mut questions: Vec<Question>, shuffle: bool) -> Vec<Question> {
    if shuffle {
        questions.shuffle(&mut rand::thread_rng());
    }
    questions
}

fn main() -> io::Result<()> {
    let config = Config::from_env();
    logger::init(&config.log_path);
    logger::log(&format!("Starting with {:?}", config));

    let mut audio = audio::player_for(config.audio_command.as_deref());

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &config, audio.as_mut());
    drop(guard);

    if let Err(e) = &result {
        logger::log(&format!("Terminal error: {}", e));
    }
    logger::log("Exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &Config,
    audio: &mut dyn audio::AudioPlayer,
) -> io::Result<()> {
    let mut app_state = AppState::Menu;
    let deck_files = deck::get_deck_files(&config.decks_dir);
    let mut selected_file_index: usize = 0;
    let mut quiz_session: Option<QuizSession> = None;
    let mut status: Option<String> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(
                f,
                &deck_files,
                selected_file_index,
                &config.decks_dir,
                status.as_deref(),
            ),
            AppState::Quiz => {
                if let Some(session) = &quiz_session {
                    draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &quiz_session {
                    draw_summary(f, session);
                }
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        match app_state {
            AppState::Menu => match key.code {
                KeyCode::Up => {
                    selected_file_index = selected_file_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if selected_file_index < deck_files.len().saturating_sub(1) {
                        selected_file_index += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(path) = deck_files.get(selected_file_index) {
                        match deck::load_deck(path) {
                            Ok(questions) => {
                                let questions = prepare_questions(questions, config.shuffle);
                                match QuizSession::new(deck::deck_name(path), questions, config.locale) {
                                    Some(session) => {
                                        quiz_session = Some(session);
                                        status = None;
                                        app_state = AppState::Quiz;
                                    }
                                    None => {
                                        status = Some(format!("{} has no questions", path.display()));
                                    }
                                }
                            }
                            Err(e) => {
                                logger::log(&format!("Failed to load {}: {}", path.display(), e));
                                status = Some(format!("Could not load {}: {}", path.display(), e));
                            }
                        }
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            AppState::Quiz => {
                if let Some(session) = &mut quiz_session {
                    handle_quiz_input(session, key, &mut app_state, audio);
                }
            }
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') => {
                    quiz_session = None;
                    app_state = AppState::Menu;
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    app_state = AppState::Quiz;
                }
                _ => {}
            },
            AppState::Summary => match key.code {
                KeyCode::Char('r') => {
                    if let Some(session) = &mut quiz_session {
                        let reordered = config
                            .shuffle
                            .then(|| prepare_questions(session.questions.clone(), true));
                        session.restart(reordered);
                        app_state = AppState::Quiz;
                    }
                }
                KeyCode::Char('m') => {
                    app_state = AppState::Menu;
                    quiz_session = None;
                }
                KeyCode::Char('q') => break,
                _ => {}
            },
        }
    }

    Ok(())
}
