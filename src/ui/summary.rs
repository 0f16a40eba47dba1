use crate::normalize::is_correct;
use crate::session::QuizSession;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_summary(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_summary_chunks(f.area());

    let title_text = format!("Session Summary - {}", session.deck_name);
    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(Span::styled(
        format!(
            "Score: {} / {}  (answered {})",
            session.correct_count(),
            session.questions.len(),
            session.answered_count()
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    summary_text.push_line(Line::from(""));

    for (i, (question, record)) in session.questions.iter().zip(&session.answers).enumerate() {
        let (mark, color) = if !record.is_answered {
            ("[ ]", Color::DarkGray)
        } else if is_correct(record.user_answer.as_deref(), &question.correct_answer) {
            ("[✓]", Color::Green)
        } else {
            ("[✕]", Color::Red)
        };
        summary_text.push_line(Line::from(vec![
            Span::styled(mark, Style::default().fg(color)),
            Span::from(format!(
                " {}. {}",
                i + 1,
                truncate_string(&question.question_text, 60)
            )),
        ]));
        if let Some(user_answer) = &record.user_answer {
            summary_text.push_line(Line::from(format!(
                "   Your Answer: {}",
                truncate_string(user_answer, 56)
            )));
        }
        if record.is_answered {
            summary_text.push_line(Line::from(format!(
                "   Correct: {}",
                truncate_string(&question.correct_answer, 56)
            )));
        }
        summary_text.push_line(Line::from(""));
    }

    let summary = Paragraph::new(summary_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let help_text = vec![Line::from(vec![
        Span::styled("r", key),
        Span::from(" Retry  "),
        Span::styled("m", key),
        Span::from(" Main Menu  "),
        Span::styled("q", key),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
