use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct CardLayout {
    pub header_area: Rect,
    pub info_area: Rect,
    pub question_area: Rect,
    pub input_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

/// Rows wanted by the optional card sections, borders included. Zero hides
/// a section.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardHeights {
    pub info: u16,
    pub input: u16,
    pub feedback: u16,
}

pub fn calculate_card_chunks(area: Rect, heights: CardHeights) -> CardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(heights.info),
            Constraint::Min(3),
            Constraint::Length(heights.input),
            Constraint::Length(heights.feedback),
            Constraint::Length(3),
        ])
        .split(area);

    CardLayout {
        header_area: chunks[0],
        info_area: chunks[1],
        question_area: chunks[2],
        input_area: chunks[3],
        feedback_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}
