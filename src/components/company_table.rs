// ABOUTME: Company roster table with Monday.com connection status

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const LIST_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

use crate::app::AppState;

pub struct CompanyTableComponent {
    table_state: TableState,
}

impl Default for CompanyTableComponent {
    fn default() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self { table_state }
    }
}

impl CompanyTableComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.table_state.select(if state.companies.is_empty() {
            None
        } else {
            Some(state.selected_company)
        });

        let show_monday = state.app_config.ui_preferences.show_monday_status;

        let header_cells = if show_monday {
            vec!["NAME", "CREATED", "MONDAY.COM"]
        } else {
            vec!["NAME", "CREATED"]
        };
        let header = Row::new(
            header_cells
                .into_iter()
                .map(|h| Cell::from(h).style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))),
        )
        .height(1)
        .bottom_margin(1);

        let rows = state.companies.iter().map(|company| {
            let mut cells = vec![
                Cell::from(company.name.clone()).style(Style::default().fg(SOFT_WHITE)),
                Cell::from(company.created_label()).style(Style::default().fg(MUTED_GRAY)),
            ];
            if show_monday {
                let status_style = if company.monday_connected {
                    Style::default().fg(SELECTION_GREEN)
                } else {
                    Style::default().fg(MUTED_GRAY)
                };
                cells.push(Cell::from(company.monday_status_label()).style(status_style));
            }
            Row::new(cells).height(1)
        });

        let widths = if show_monday {
            vec![
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Percentage(30),
            ]
        } else {
            vec![Constraint::Percentage(65), Constraint::Percentage(35)]
        };

        let title = if state.companies_loading {
            "Companies (loading...)"
        } else {
            "Companies"
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(SUBDUED_BORDER))
                    .style(Style::default().bg(DARK_BG))
                    .title(Line::from(vec![
                        Span::styled(" 🏢 ", Style::default().fg(GOLD)),
                        Span::styled(
                            format!("{title} "),
                            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("({})", state.companies.len()),
                            Style::default().fg(CORNFLOWER_BLUE),
                        ),
                    ])),
            )
            .highlight_style(
                Style::default()
                    .bg(LIST_HIGHLIGHT_BG)
                    .fg(SELECTION_GREEN)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}
