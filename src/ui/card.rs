use crate::ui::layout::{CardHeights, calculate_card_chunks};
use crate::utils::single_line_scroll;
use crate::view::{
    CardView, ChoiceTreatment, ChoiceView, FeedbackView, FieldTreatment, HintView, InputView,
    Phase, TextFieldView,
};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Rows `text` takes once wrapped to `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

fn hint_lines(hint: &HintView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let accent = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    if let Some(length) = &hint.length {
        lines.push(Line::from(Span::styled(format!("📏 {}", length), accent)));
    }
    if let Some(first_char) = &hint.first_char {
        lines.push(Line::from(Span::styled(format!("🔤 {}", first_char), accent)));
    }
    if let Some(text) = &hint.text {
        lines.push(Line::from(Span::styled(
            format!("ℹ️ {}", text),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn info_text(view: &CardView) -> Text<'static> {
    let mut text = Text::default();
    if let Some(url) = &view.audio_url {
        text.push_line(Line::from(vec![
            Span::styled("♪ ", Style::default().fg(Color::Magenta)),
            Span::from(url.clone()),
            Span::from("  "),
            Span::styled("Ctrl+P", key_style()),
            Span::from(" Play"),
        ]));
    }
    if let Some(hint) = &view.hint {
        for line in hint_lines(hint) {
            text.push_line(line);
        }
    }
    text
}

fn choice_line(choice: &ChoiceView) -> Line<'static> {
    let style = match choice.treatment {
        ChoiceTreatment::Selectable => Style::default().fg(Color::White),
        ChoiceTreatment::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        ChoiceTreatment::IncorrectSelected => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        ChoiceTreatment::Dimmed => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    };
    Line::from(vec![
        Span::styled(format!("[{}] ", choice.letter), style.add_modifier(Modifier::BOLD)),
        Span::styled(choice.text.clone(), style),
    ])
}

fn feedback_text(feedback: &FeedbackView) -> Text<'static> {
    let (mark, color) = if feedback.correct {
        ("✓", Color::Green)
    } else {
        ("✕", Color::Red)
    };
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        format!("{} {}", mark, feedback.heading),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    if let Some(answer) = &feedback.correct_answer {
        text.push_line(Line::from(vec![
            Span::styled(
                format!("{}: ", feedback.correct_answer_label),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                answer.clone(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ]));
    }
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        feedback.explanation_label,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));
    for line in feedback.explanation.lines() {
        text.push_line(Line::from(line.to_string()));
    }
    text
}

/// Rows wanted by each optional section for a card drawn `width` wide.
pub fn card_heights(view: &CardView, width: u16) -> CardHeights {
    let inner = width.saturating_sub(4);

    let mut info_rows = 0u16;
    if view.audio_url.is_some() {
        info_rows += 1;
    }
    if let Some(hint) = &view.hint {
        info_rows += u16::from(hint.length.is_some()) + u16::from(hint.first_char.is_some());
        if let Some(text) = &hint.text {
            info_rows += wrapped_height(&format!("ℹ️ {}", text), inner);
        }
    }

    let input = match &view.input {
        InputView::Choices(choices) if choices.is_empty() => 0,
        InputView::Choices(choices) => u16::try_from(choices.len()).unwrap_or(u16::MAX).saturating_add(2),
        InputView::TextField(_) => 3,
        InputView::None => 0,
    };

    let feedback = match &view.feedback {
        Some(feedback) => {
            let mut rows = 3 + u16::from(feedback.correct_answer.is_some());
            if !feedback.explanation.is_empty() {
                rows += wrapped_height(&feedback.explanation, inner);
            }
            rows + 2
        }
        None => 0,
    };

    CardHeights {
        info: if info_rows > 0 { info_rows + 2 } else { 0 },
        input,
        feedback,
    }
}

fn draw_text_field(f: &mut Frame, area: Rect, field: &TextFieldView, cursor: usize) {
    let border = match field.treatment {
        FieldTreatment::Editable => Color::Blue,
        FieldTreatment::Correct => Color::Green,
        FieldTreatment::Incorrect => Color::Red,
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title("Your Answer");
    if let Some(submit) = field.submit_label {
        block = block.title_bottom(Line::from(vec![
            Span::styled("Enter", key_style()),
            Span::from(format!(" {} ", submit)),
        ]));
    }
    if let Some(count) = &field.typed_count {
        block = block.title_bottom(Line::from(format!(" {} ", count)).right_aligned());
    }

    let inner_width = usize::from(area.width.saturating_sub(2));
    let editable = field.treatment == FieldTreatment::Editable;
    let (scroll_x, cursor_col) = if editable {
        single_line_scroll(&field.value, cursor, inner_width)
    } else {
        (0, 0)
    };

    let content = if field.value.is_empty() && editable {
        Line::from(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let style = match field.treatment {
            FieldTreatment::Editable => Style::default(),
            FieldTreatment::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            FieldTreatment::Incorrect => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        };
        Line::from(Span::styled(field.value.clone(), style))
    };

    let input = Paragraph::new(content).scroll((0, scroll_x)).block(block);
    f.render_widget(input, area);

    if editable && area.width > 2 && area.height > 2 {
        f.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
    }
}

fn help_line(view: &CardView) -> Line<'static> {
    let mut spans = Vec::new();
    match (view.phase, &view.input) {
        (Phase::Unanswered, InputView::Choices(_)) => {
            spans.extend([Span::styled("A-Z/1-9", key_style()), Span::from(" Choose  ")]);
        }
        (Phase::Unanswered, InputView::TextField(_)) => {
            spans.extend([Span::styled("Enter", key_style()), Span::from(" Submit  ")]);
        }
        _ => {
            spans.extend([Span::styled("Enter", key_style()), Span::from(" Next  ")]);
        }
    }
    if view.hint_toggle.is_some() {
        spans.extend([Span::styled("Tab", key_style()), Span::from(" Hint  ")]);
    }
    spans.extend([
        Span::styled("↑/↓", key_style()),
        Span::from(" Navigate  "),
        Span::styled("Esc", key_style()),
        Span::from(" Quit to Menu"),
    ]);
    Line::from(spans)
}

/// Draws the card into `area`. `title` labels the outer header, `cursor` is
/// the draft cursor in chars.
pub fn draw_card(f: &mut Frame, area: Rect, view: &CardView, title: &str, cursor: usize) {
    let layout = calculate_card_chunks(area, card_heights(view, area.width));

    let mut header_spans = vec![Span::styled(
        view.type_label.clone(),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(toggle) = view.hint_toggle {
        header_spans.extend([
            Span::from("   "),
            Span::styled("[Tab] ", key_style()),
            Span::styled(toggle, Style::default().fg(Color::Yellow)),
        ]);
    }
    let header = Paragraph::new(Line::from(header_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .title(
                Line::from(format!(" ID: {} ", view.question_id))
                    .right_aligned()
                    .style(Style::default().fg(Color::DarkGray)),
            ),
    );
    f.render_widget(header, layout.header_area);

    if layout.info_area.height > 0 {
        let border = if view.hint.is_some() {
            Color::Yellow
        } else {
            Color::Magenta
        };
        let info = Paragraph::new(info_text(view))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(info, layout.info_area);
    }

    let question = Paragraph::new(Text::styled(
        view.question_text.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    match &view.input {
        InputView::Choices(choices) if layout.input_area.height > 0 => {
            let lines: Vec<Line> = choices.iter().map(choice_line).collect();
            let options = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Options"));
            f.render_widget(options, layout.input_area);
        }
        InputView::TextField(field) => draw_text_field(f, layout.input_area, field, cursor),
        _ => {}
    }

    if let Some(feedback) = &view.feedback {
        let color = if feedback.correct {
            Color::Green
        } else {
            Color::Red
        };
        let panel = Paragraph::new(feedback_text(feedback))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(panel, layout.feedback_area);
    }

    let help = Paragraph::new(help_line(view))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
