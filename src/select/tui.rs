//! Full-screen checkbox selection surface
//!
//! Single-threaded and blocking on key input. The model is a cursor plus a
//! checked set, initialized to all-checked. Up/Down move the cursor without
//! wrapping, Space toggles, `a`/`n` bulk-set, Enter commits the checked set
//! in catalog order, and `q`/Esc cancels.

use super::{Resolution, Selection};
use crate::error::{Result, SetupError};
use crate::registry::Registry;
use crate::theme::Colors;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::collections::BTreeSet;
use std::time::Duration;

/// Interaction model for the checkbox menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxState {
    pub cursor: usize,
    pub checked: BTreeSet<usize>,
    len: usize,
}

impl CheckboxState {
    /// Start with every entry checked.
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            checked: (0..len).collect(),
            len,
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    pub fn toggle(&mut self) {
        if !self.checked.remove(&self.cursor) {
            self.checked.insert(self.cursor);
        }
    }

    pub fn check_all(&mut self) {
        self.checked = (0..self.len).collect();
    }

    pub fn check_none(&mut self) {
        self.checked.clear();
    }

    /// The committed selection, in catalog order.
    pub fn selection(&self) -> Selection {
        Selection::from_indices(self.checked.iter().copied())
    }
}

/// Run the checkbox menu on an already-initialized terminal.
///
/// Terminal setup and teardown (raw mode, alternate screen) belong to the
/// caller so a panic during rendering still restores the operator's
/// terminal.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    registry: &Registry,
) -> Result<Resolution> {
    let mut state = CheckboxState::new(registry.len());

    loop {
        terminal
            .draw(|f| render(f, registry, &state))
            .map_err(|e| SetupError::terminal(format!("failed to draw selection menu: {}", e)))?;

        if !event::poll(Duration::from_millis(50))
            .map_err(|e| SetupError::terminal(e.to_string()))?
        {
            continue;
        }
        if let Event::Key(key) = event::read().map_err(|e| SetupError::terminal(e.to_string()))? {
            match key.code {
                KeyCode::Up => state.move_up(),
                KeyCode::Down => state.move_down(),
                KeyCode::Char(' ') => state.toggle(),
                KeyCode::Char('a') => state.check_all(),
                KeyCode::Char('n') => state.check_none(),
                KeyCode::Enter => return Ok(Resolution::Chosen(state.selection())),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Resolution::Cancelled),
                _ => {}
            }
        }
    }
}

fn render(f: &mut Frame, registry: &Registry, state: &CheckboxState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Key hints
        ])
        .split(f.area());

    let title = Paragraph::new("macOS Development Environment Setup")
        .style(
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Split content into the checkbox list and a description panel
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let items: Vec<ListItem> = registry
        .list()
        .map(|(index, name, _)| {
            let marker = if state.checked.contains(&index) {
                "[x]"
            } else {
                "[ ]"
            };
            let prefix = if index == state.cursor { "▸ " } else { "  " };
            let style = if index == state.cursor {
                Style::default()
                    .fg(Colors::SECONDARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(format!("{}{} {}", prefix, marker, name)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Select Steps ({} checked) ", state.checked.len()))
            .title_style(
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Colors::PRIMARY)),
    );
    f.render_widget(list, content_chunks[0]);

    let description = registry
        .get(state.cursor)
        .map(|step| step.description)
        .unwrap_or_default();
    let desc_widget = Paragraph::new(description)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Step Details ")
                .title_style(
                    Style::default()
                        .fg(Colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(desc_widget, content_chunks[1]);

    let hints = Paragraph::new("↑/↓ move   Space toggle   a all   n none   Enter install   q quit")
        .style(Style::default().fg(Colors::FG_SECONDARY))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, chunks[2]);
}
