// ABOUTME: Monday.com connection wizard modal - token input, cascading
// workspace/board/column selects, and the gated connect button

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const LIST_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

use crate::app::state::{AppState, MondayWizardState, WizardField};
use crate::wizard::{gate, FetchLevel, MetricRole};

pub struct MondayWizardComponent;

impl MondayWizardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(wizard) = &state.monday_wizard else {
            return;
        };

        let modal_area = centered_rect(72, 70, area);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(Line::from(vec![
                Span::styled(" 🔗 ", Style::default().fg(GOLD)),
                Span::styled(
                    format!("Connect {} to Monday.com ", wizard.session.company_name()),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ),
            ]));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(8),    // Fields + detail pane
                Constraint::Length(1), // Help bar
            ])
            .split(inner);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[0]);

        self.render_fields(frame, panes[0], wizard);
        self.render_detail(frame, panes[1], wizard);
        self.render_help_bar(frame, chunks[1], wizard);
    }

    /// Left pane: one row per field with its current value, focused row
    /// highlighted.
    fn render_fields(&self, frame: &mut Frame, area: Rect, wizard: &MondayWizardState) {
        let items: Vec<ListItem> = WizardField::all()
            .iter()
            .map(|field| {
                let is_focused = wizard.focus == *field;
                let marker = if is_focused { "▶ " } else { "  " };
                let value = Self::field_value(wizard, *field);

                let label_style = if is_focused {
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(SELECTION_GREEN)),
                    Span::styled(format!("{:<16}", field.label()), label_style),
                    Span::styled(value, Style::default().fg(MUTED_GRAY)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(SUBDUED_BORDER)),
        );
        frame.render_widget(list, area);
    }

    /// Right pane: the editor for the focused field.
    fn render_detail(&self, frame: &mut Frame, area: Rect, wizard: &MondayWizardState) {
        match wizard.focus {
            WizardField::Token => self.render_token_input(frame, area, wizard),
            WizardField::Workspace => self.render_option_list(
                frame,
                area,
                wizard,
                "Workspaces",
                FetchLevel::Workspaces,
                wizard
                    .session
                    .workspaces()
                    .iter()
                    .map(|o| o.name.clone())
                    .collect(),
            ),
            WizardField::Board => self.render_option_list(
                frame,
                area,
                wizard,
                "Boards",
                FetchLevel::Boards,
                wizard.session.boards().iter().map(|o| o.name.clone()).collect(),
            ),
            WizardField::Views | WizardField::Likes | WizardField::Comments => self
                .render_option_list(
                    frame,
                    area,
                    wizard,
                    "Columns",
                    FetchLevel::Columns,
                    wizard
                        .session
                        .columns()
                        .iter()
                        .map(|c| format!("{} ({})", c.title, c.column_type))
                        .collect(),
                ),
            WizardField::Connect => self.render_connect_pane(frame, area, wizard),
        }
    }

    fn render_token_input(&self, frame: &mut Frame, area: Rect, wizard: &MondayWizardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let label = Paragraph::new("Enter your Monday.com API token:")
            .style(Style::default().fg(SOFT_WHITE));
        frame.render_widget(label, chunks[0]);

        // Token is a secret; echo bullets only
        let masked = "•".repeat(wizard.token_input.chars().count());
        let input = Paragraph::new(format!("{masked}│"))
            .style(Style::default().fg(GOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GOLD)),
            );
        frame.render_widget(input, chunks[1]);

        let hint = Paragraph::new("The token is held in memory for this wizard only.")
            .style(Style::default().fg(MUTED_GRAY))
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, chunks[2]);
    }

    fn render_option_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        wizard: &MondayWizardState,
        title: &str,
        level: FetchLevel,
        names: Vec<String>,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .title(format!(" {title} "));

        if wizard.session.level_in_flight(level) {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(CORNFLOWER_BLUE))
                .block(block);
            frame.render_widget(loading, area);
            return;
        }

        if names.is_empty() {
            let empty_hint = match level {
                FetchLevel::Workspaces => "Enter an API token first",
                FetchLevel::Boards => "Select a workspace first",
                FetchLevel::Columns => "Select a board first",
            };
            let empty = Paragraph::new(empty_hint)
                .style(Style::default().fg(MUTED_GRAY))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == wizard.option_cursor {
                    Style::default()
                        .bg(LIST_HIGHLIGHT_BG)
                        .fg(SELECTION_GREEN)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                };
                ListItem::new(name).style(style)
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_connect_pane(&self, frame: &mut Frame, area: Rect, wizard: &MondayWizardState) {
        let (message, color) = if wizard.connecting {
            ("Connecting...".to_string(), CORNFLOWER_BLUE)
        } else if wizard.session.can_submit() {
            (
                format!(
                    "Ready to connect {} to the selected board.\n\nPress Enter to connect.",
                    wizard.session.company_name()
                ),
                SELECTION_GREEN,
            )
        } else if wizard.session.is_fetch_in_flight() {
            ("Waiting for a lookup to finish...".to_string(), CORNFLOWER_BLUE)
        } else {
            (
                "Fill in the token, workspace, board, and all three column mappings first."
                    .to_string(),
                WARNING_ORANGE,
            )
        };

        let pane = Paragraph::new(message)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .title(" Connect "),
            );
        frame.render_widget(pane, area);
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect, wizard: &MondayWizardState) {
        let apply_label = match wizard.focus {
            WizardField::Token => " commit token ",
            WizardField::Connect => " connect ",
            _ => " select ",
        };
        let help_bar = Paragraph::new(Line::from(vec![
            Span::styled(" Tab", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" next field ", Style::default().fg(MUTED_GRAY)),
            Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" ↑/↓", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" choose ", Style::default().fg(MUTED_GRAY)),
            Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" Enter", Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)),
            Span::styled(apply_label, Style::default().fg(MUTED_GRAY)),
            Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" Esc", Style::default().fg(WARNING_ORANGE).add_modifier(Modifier::BOLD)),
            Span::styled(" cancel ", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help_bar, area);
    }

    /// Display value for a field row in the left pane.
    fn field_value(wizard: &MondayWizardState, field: WizardField) -> String {
        let session = &wizard.session;
        match field {
            WizardField::Token => {
                if session.api_token().is_empty() {
                    "(not set)".to_string()
                } else {
                    "••••••••".to_string()
                }
            }
            WizardField::Workspace => session
                .workspace_id()
                .and_then(|id| session.workspaces().iter().find(|o| o.id == id))
                .map_or_else(|| "-".to_string(), |o| o.name.clone()),
            WizardField::Board => session
                .board_id()
                .and_then(|id| session.boards().iter().find(|o| o.id == id))
                .map_or_else(|| "-".to_string(), |o| o.name.clone()),
            WizardField::Views | WizardField::Likes | WizardField::Comments => {
                let role = field.metric_role().unwrap_or(MetricRole::Views);
                session.mapping().get(role).map_or_else(
                    || "-".to_string(),
                    |id| {
                        let title = gate::resolve_column_title(session.columns(), id);
                        if title.is_empty() {
                            id.to_string()
                        } else {
                            title
                        }
                    },
                )
            }
            WizardField::Connect => {
                if wizard.connecting {
                    "connecting...".to_string()
                } else if session.can_submit() {
                    "ready".to_string()
                } else {
                    "incomplete".to_string()
                }
            }
        }
    }
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
