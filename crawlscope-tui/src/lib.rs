use anyhow::Result;
use crawlscope_core::{
    BaseUrlForm, CrawlOptionId, FormConfig, OptionsForm, SubmitError, catalog,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

mod view;

pub use view::ui;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    BaseUrl,
    Card(CrawlOptionId),
    UrlPath,
    PageUrl,
    Clear,
    Submit,
}

impl Focus {
    fn is_text_field(&self) -> bool {
        matches!(self, Focus::BaseUrl | Focus::UrlPath | Focus::PageUrl)
    }
}

pub struct App {
    base_url: BaseUrlForm,
    options: OptionsForm,
    focus: Focus,
    // Cursor within the focused text field, in chars
    cursor: usize,
    output: Vec<String>,
    should_quit: bool,
    spinner_frame: usize,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        let mut app = Self {
            base_url: BaseUrlForm::new(),
            options: OptionsForm::new(config),
            focus: Focus::BaseUrl,
            cursor: 0,
            output: Vec::new(),
            should_quit: false,
            spinner_frame: 0,
        };
        app.add_output("Nothing is crawled yet: accepted requests are only logged here.");
        app
    }

    pub fn base_url(&self) -> &BaseUrlForm {
        &self.base_url
    }

    pub fn options(&self) -> &OptionsForm {
        &self.options
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn add_output(&mut self, message: impl Into<String>) {
        self.output.push(message.into());
        // Keep only last 200 lines
        if self.output.len() > 200 {
            self.output.drain(0..self.output.len() - 200);
        }
    }

    /// Focusable controls in screen order. Auxiliary inputs only exist
    /// while their card is selected.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::BaseUrl];
        for option in catalog() {
            order.push(Focus::Card(option.id));
            if self.options.is_selected(option.id) {
                match option.id {
                    CrawlOptionId::StartWith => order.push(Focus::UrlPath),
                    CrawlOptionId::One => order.push(Focus::PageUrl),
                    CrawlOptionId::All => {}
                }
            }
        }
        order.push(Focus::Clear);
        order.push(Focus::Submit);
        order
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.set_focus(order[next]);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor = self.field_value(focus).map(|v| v.chars().count()).unwrap_or(0);
    }

    fn field_value(&self, focus: Focus) -> Option<&str> {
        match focus {
            Focus::BaseUrl => Some(self.base_url.url()),
            Focus::UrlPath => Some(self.options.url_path()),
            Focus::PageUrl => Some(self.options.page_url()),
            _ => None,
        }
    }

    fn edit_field(&mut self, edit: impl FnOnce(&mut String, &mut usize)) {
        let Some(current) = self.field_value(self.focus) else {
            return;
        };
        let mut value = current.to_string();
        let mut cursor = self.cursor;
        edit(&mut value, &mut cursor);
        self.cursor = cursor;

        match self.focus {
            Focus::BaseUrl => self.base_url.set_url(value),
            Focus::UrlPath => self.options.set_url_path(value),
            Focus::PageUrl => self.options.set_page_url(value),
            _ => {}
        }
    }

    pub fn toggle(&mut self, id: CrawlOptionId) {
        self.options.toggle(id);
    }

    pub fn clear(&mut self) {
        if !self.options.can_clear() {
            return;
        }
        self.options.reset();
        self.add_output("Form cleared.");
    }

    pub fn submit(&mut self, now: Instant) {
        if !self.options.can_submit() {
            debug!("Submit control disabled");
            return;
        }

        match self.options.begin_submit(now) {
            Ok(request) => {
                self.add_output(format!("→ Crawl request accepted: {}", request.to_json()));
            }
            Err(SubmitError::Invalid(errors)) => {
                self.add_output(format!("✗ Submit blocked: {}", errors));
            }
            Err(SubmitError::InFlight) => {}
        }
    }

    /// Advance timers: finish a pending submission and spin the spinner
    pub fn tick(&mut self, now: Instant) {
        if self.options.is_submitting() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        if self.options.poll_submission(now) {
            self.add_output("✓ Submission finished (stub: nothing was sent)");
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process KeyPress events, ignore KeyRelease
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Enter => self.activate(now),
            KeyCode::Char(' ') if !self.focus.is_text_field() => self.activate(now),
            // Chords are shortcuts, not text
            KeyCode::Char(_)
                if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => self.edit_field(|value, cursor| {
                let idx = byte_index(value, *cursor);
                value.insert(idx, c);
                *cursor += 1;
            }),
            KeyCode::Backspace => self.edit_field(|value, cursor| {
                if *cursor > 0 {
                    let idx = byte_index(value, *cursor - 1);
                    value.remove(idx);
                    *cursor -= 1;
                }
            }),
            KeyCode::Delete => self.edit_field(|value, cursor| {
                if *cursor < value.chars().count() {
                    let idx = byte_index(value, *cursor);
                    value.remove(idx);
                }
            }),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                let len = self.field_value(self.focus).map(|v| v.chars().count()).unwrap_or(0);
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.field_value(self.focus).map(|v| v.chars().count()).unwrap_or(0);
            }
            _ => {}
        }
    }

    /// Space/Enter on the focused control
    fn activate(&mut self, now: Instant) {
        match self.focus {
            Focus::BaseUrl => self.focus_next(),
            Focus::Card(id) => self.toggle(id),
            // Enter inside an option input submits the option form
            Focus::UrlPath | Focus::PageUrl => self.submit(now),
            Focus::Clear => self.clear(),
            Focus::Submit => self.submit(now),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

fn byte_index(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

pub fn run(config: FormConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Poll so the spinner and the submission timer keep moving
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Instant::now());
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
