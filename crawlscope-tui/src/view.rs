// Rendering of the form screen

use crate::{App, Focus};
use crawlscope_core::{CrawlOption, CrawlOptionId, Field, FieldError, catalog};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const FORM_WIDTH: u16 = 64;
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

// Heights of the fixed pieces, in rows
const INPUT_HEIGHT: u16 = 3;
const CARD_HEIGHT: u16 = 4;
const MESSAGE_HEIGHT: u16 = 1;
const DIAGNOSTICS_HEIGHT: u16 = 6;

/// Rect of at most `width` x `height` cells, centered both ways in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([Constraint::Length(height.min(column.height))])
        .flex(Flex::Center)
        .areas(column);
    rect
}

pub fn ui(f: &mut Frame, app: &App) {
    let screen = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Form column
            Constraint::Length(1), // Horizontal rule
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let options = app.options();

    let mut constraints = vec![
        Constraint::Length(1),              // Base URL label
        Constraint::Length(INPUT_HEIGHT),   // Base URL input
        Constraint::Length(MESSAGE_HEIGHT), // Base URL error
        Constraint::Length(1),              // Spacer
        Constraint::Length(1),              // Heading
        Constraint::Length(2),              // Description
    ];
    for option in catalog() {
        constraints.push(Constraint::Length(CARD_HEIGHT));
        if has_aux_field(option.id) && options.is_selected(option.id) {
            constraints.push(Constraint::Length(INPUT_HEIGHT));
            constraints.push(Constraint::Length(MESSAGE_HEIGHT));
        }
    }
    constraints.push(Constraint::Length(MESSAGE_HEIGHT)); // Selection message
    constraints.push(Constraint::Length(1)); // Buttons
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(DIAGNOSTICS_HEIGHT)); // Diagnostics

    let form_height: u16 = constraints
        .iter()
        .map(|c| match c {
            Constraint::Length(n) => *n,
            _ => 0,
        })
        .sum();
    let column = centered_rect(screen[0], FORM_WIDTH, form_height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);

    let mut cursor = None;

    // Base URL form
    f.render_widget(
        Paragraph::new("Enter your base url").style(Style::default().add_modifier(Modifier::BOLD)),
        rows[0],
    );
    let base_url = app.base_url();
    if let Some(pos) = render_input(
        f,
        rows[1],
        base_url.url(),
        "https://foobar.com",
        app.focus() == Focus::BaseUrl,
        base_url.error().is_some(),
        app.cursor(),
    ) {
        cursor = Some(pos);
    }
    render_message(f, rows[2], base_url.error());

    // Option form
    f.render_widget(
        Paragraph::new("Crawling Options").style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        rows[4],
    );
    f.render_widget(
        Paragraph::new(
            "Choose how you want to crawl the website. Select an option and provide \
             additional details if needed.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true }),
        rows[5],
    );

    let mut row = 6;
    for option in catalog() {
        let selected = options.is_selected(option.id);
        render_card(f, rows[row], option, selected, app.focus() == Focus::Card(option.id));
        row += 1;

        if has_aux_field(option.id) && selected {
            let (focus, value, placeholder, field) = match option.id {
                CrawlOptionId::StartWith => (
                    Focus::UrlPath,
                    options.url_path(),
                    "Enter starting path (e.g., /blog)",
                    Field::UrlPath,
                ),
                _ => (
                    Focus::PageUrl,
                    options.page_url(),
                    "Enter full page URL",
                    Field::PageUrl,
                ),
            };
            let error = options.errors().get(field);
            let input_area = indent(rows[row], 4);
            if let Some(pos) = render_input(
                f,
                input_area,
                value,
                placeholder,
                app.focus() == focus,
                error.is_some(),
                app.cursor(),
            ) {
                cursor = Some(pos);
            }
            render_message(f, indent(rows[row + 1], 4), error);
            row += 2;
        }
    }

    render_message(f, rows[row], options.errors().get(Field::Items));
    render_buttons(f, rows[row + 1], app);
    render_diagnostics(f, rows[row + 3], app);

    if let Some(pos) = cursor {
        f.set_cursor_position(pos);
    }

    // Horizontal rule above status
    let rule = Paragraph::new("─".repeat(screen[1].width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(rule, screen[1]);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let status = Paragraph::new(Line::from(vec![
        Span::styled("Tab/↑↓", bold),
        Span::raw(" move | "),
        Span::styled("Space", bold),
        Span::raw(" select | "),
        Span::styled("Enter", bold),
        Span::raw(" press/submit | "),
        Span::styled("ESC", bold),
        Span::raw(" quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, screen[2]);
}

fn has_aux_field(id: CrawlOptionId) -> bool {
    matches!(id, CrawlOptionId::StartWith | CrawlOptionId::One)
}

fn indent(area: Rect, by: u16) -> Rect {
    let by = by.min(area.width);
    Rect {
        x: area.x + by,
        width: area.width - by,
        ..area
    }
}

/// Bordered single-line text input. Returns the cursor position when focused.
/// A focused value longer than the box scrolls so the cursor stays visible.
fn render_input(
    f: &mut Frame,
    area: Rect,
    value: &str,
    placeholder: &str,
    focused: bool,
    invalid: bool,
    cursor: usize,
) -> Option<Position> {
    let border_color = if invalid {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let offset = if focused {
        scroll_offset(cursor, inner.width as usize)
    } else {
        0
    };

    let text = if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        let visible: String = value.chars().skip(offset).collect();
        Paragraph::new(visible).style(Style::default().fg(Color::White))
    };
    f.render_widget(text.block(block), area);

    if focused && inner.width > 0 {
        let column = (cursor - offset).min(inner.width as usize - 1) as u16;
        Some(Position::new(inner.x + column, inner.y))
    } else {
        None
    }
}

/// First visible char so that `cursor` lands inside a box `width` cells wide
pub(crate) fn scroll_offset(cursor: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    (cursor + 1).saturating_sub(width)
}

fn render_message(f: &mut Frame, area: Rect, error: Option<&FieldError>) {
    if let Some(error) = error {
        f.render_widget(
            Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn render_card(f: &mut Frame, area: Rect, option: &CrawlOption, selected: bool, focused: bool) {
    let border_color = if focused {
        Color::Yellow
    } else if selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let accent = if selected { Color::Cyan } else { Color::Gray };
    let checkbox = if selected { "[x]" } else { "[ ]" };
    let lines = vec![
        Line::from(vec![
            Span::styled(checkbox, Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(option.icon, Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(option.label, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("      {}", option.description),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_buttons(f: &mut Frame, area: Rect, app: &App) {
    let options = app.options();
    let enabled = options.can_submit();

    let button_style = |focus: Focus| {
        let mut style = if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if app.focus() == focus {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    };

    let submit_label = if options.is_submitting() {
        let frame = SPINNER_FRAMES[app.spinner_frame() % SPINNER_FRAMES.len()];
        format!("[ {} Processing... ]", frame)
    } else {
        "[ Start Crawling ]".to_string()
    };

    let buttons = Line::from(vec![
        Span::styled("[ Clear ]", button_style(Focus::Clear)),
        Span::raw("  "),
        Span::styled(submit_label, button_style(Focus::Submit)),
    ])
    .right_aligned();

    f.render_widget(Paragraph::new(buttons), area);
}

fn render_diagnostics(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Diagnostics ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    // Auto-scroll to the newest lines
    let height = inner.height as usize;
    let output = app.output();
    let lines: Vec<Line> = output
        .iter()
        .skip(output.len().saturating_sub(height))
        .map(|line| Line::from(line.clone()))
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(Color::White)),
        area,
    );
}
