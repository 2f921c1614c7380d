//! Ratatui-based terminal UI.
//!
//! The TUI provides two selection lists (your type, partner's type), submits
//! the pair on demand, and renders the scoring result as a radar chart plus
//! a textual summary panel. All user-visible failures land in a single
//! status line that each new message overwrites.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::pipeline::{self, ScoreRun};
use crate::catalog::{Slot, TypeCatalog};
use crate::cli::TuiArgs;
use crate::data::ApiClient;
use crate::error::AppError;

mod radar_chart;

use radar_chart::RadarChart;

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    // Resolve configuration before touching the terminal so a missing base
    // URL surfaces as a plain error message, not inside the alternate screen.
    let client = ApiClient::connect(args.api.base_url)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(client);
    app.reload_catalog();
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    client: ApiClient,
    catalog: TypeCatalog,
    focus: Slot,
    selection_a: Option<usize>,
    selection_b: Option<usize>,
    status: String,
    run: Option<ScoreRun>,
}

impl App {
    fn new(client: ApiClient) -> Self {
        Self {
            client,
            catalog: TypeCatalog::default(),
            focus: Slot::Yours,
            selection_a: None,
            selection_b: None,
            status: String::new(),
            run: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit. Operation failures never
    /// bubble out of here; they end up in the status line.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                self.focus = match self.focus {
                    Slot::Yours => Slot::Partners,
                    Slot::Partners => Slot::Yours,
                };
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.submit_pair(),
            KeyCode::Char('r') => self.reload_catalog(),
            _ => {}
        }
        false
    }

    fn move_selection(&mut self, delta: i64) {
        let count = self.catalog.types().len();
        if count == 0 {
            return;
        }
        let slot = match self.focus {
            Slot::Yours => &mut self.selection_a,
            Slot::Partners => &mut self.selection_b,
        };
        let next = match *slot {
            None => 0,
            Some(current) => {
                let moved = current as i64 + delta;
                moved.clamp(0, count as i64 - 1) as usize
            }
        };
        *slot = Some(next);
    }

    fn selected_type(&self, slot: Slot) -> Option<&str> {
        let index = match slot {
            Slot::Yours => self.selection_a?,
            Slot::Partners => self.selection_b?,
        };
        self.catalog.types().get(index).map(String::as_str)
    }

    fn reload_catalog(&mut self) {
        self.status = "Loading types...".to_string();
        match self.catalog.apply_load(self.client.fetch_types()) {
            Some(err) => self.status = format!("{err}"),
            None => self.status.clear(),
        }
        // The option lists may have changed; stale cursors would point at
        // the wrong types.
        self.selection_a = None;
        self.selection_b = None;
    }

    fn submit_pair(&mut self) {
        let (Some(type_a), Some(type_b)) = (
            self.selected_type(Slot::Yours).map(str::to_string),
            self.selected_type(Slot::Partners).map(str::to_string),
        ) else {
            self.status = "Select both types first.".to_string();
            return;
        };

        // The request is a blocking call on the UI thread, so a second
        // trigger cannot fire while this one is outstanding.
        self.status = "Scoring...".to_string();
        match pipeline::run_score(&self.client, &type_a, &type_b) {
            Ok(run) => {
                self.run = Some(run);
                self.status.clear();
            }
            Err(err) => self.status = format!("{err}"),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("lovetype", Style::default().fg(Color::Magenta)),
            Span::raw(" — pair compatibility"),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "api: {} | you: {} | partner: {}",
                self.client.base_url(),
                self.selected_type(Slot::Yours).unwrap_or("-"),
                self.selected_type(Slot::Partners).unwrap_or("-"),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28),
                Constraint::Min(0),
                Constraint::Length(44),
            ])
            .split(area);

        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        self.draw_slot(frame, slots[0], Slot::Yours);
        self.draw_slot(frame, slots[1], Slot::Partners);
        self.draw_chart(frame, chunks[1]);
        self.draw_summary(frame, chunks[2]);
    }

    fn draw_slot(&self, frame: &mut ratatui::Frame<'_>, area: Rect, slot: Slot) {
        let focused = self.focus == slot;
        let border_style = if focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        };

        // The block title doubles as the slot's placeholder prompt until a
        // type is picked.
        let title = match self.selected_type(slot) {
            Some(picked) => format!("{}: {picked}", slot.title()),
            None => format!("{} — {}", slot.title(), slot.prompt()),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        // "loading" and "no data" are different placeholders on purpose.
        if let Some(placeholder) = self.catalog.placeholder() {
            let p = Paragraph::new(placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(p, area);
            return;
        }

        let items: Vec<ListItem> = self
            .catalog
            .types()
            .iter()
            .map(|t| ListItem::new(t.as_str()))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(match slot {
            Slot::Yours => self.selection_a,
            Slot::Partners => self.selection_b,
        });
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Compatibility radar").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for a result...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        frame.render_widget(
            RadarChart {
                values: run.display.axis_scores,
            },
            inner,
        );
    }

    fn draw_summary(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Result").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Pick both types and press Enter.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(msg, inner);
            return;
        };
        let display = &run.display;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(inner);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            display.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if !display.catch_line.is_empty() {
            lines.push(Line::from(Span::styled(
                display.catch_line.clone(),
                Style::default().fg(Color::Gray),
            )));
        }
        // The hybrid element is omitted entirely when not hybrid; an empty
        // line here would read as a different (blank) state.
        if display.is_hybrid {
            lines.push(Line::from(Span::styled(
                display.hybrid_label.clone(),
                Style::default().fg(Color::Magenta),
            )));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Strengths",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(display.strengths_text.clone()));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Cautions",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(display.cautions_text.clone()));

        let text = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
        frame.render_widget(text, chunks[0]);

        let gauge = Gauge::default()
            .block(Block::default().title("Confidence").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Magenta))
            .percent(u16::from(display.confidence_percent));
        frame.render_widget(gauge, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Tab switch slot  ↑/↓ select  Enter score  r reload types  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}
