// ABOUTME: Main layout component handling the roster view, bottom menu bar,
// and modal overlays (wizard, help, notifications)

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

use super::{CompanyTableComponent, HelpComponent, MondayWizardComponent};
use crate::app::AppState;

pub struct LayoutComponent {
    company_table: CompanyTableComponent,
    monday_wizard: MondayWizardComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            company_table: CompanyTableComponent::new(),
            monday_wizard: MondayWizardComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(5),    // Company roster
                Constraint::Length(1), // Menu bar
            ])
            .split(frame.size());

        self.render_title_bar(frame, chunks[0]);
        self.company_table.render(frame, chunks[1], state);
        self.render_menu_bar(frame, chunks[2], state);

        // Overlays, innermost last
        if state.monday_wizard.is_some() {
            self.monday_wizard.render(frame, frame.size(), state);
        }
        if state.help_visible {
            self.help.render(frame, frame.size());
        }
        self.render_notifications(frame, frame.size(), state);
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                " LinkDeck ",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                concat!("v", env!("CARGO_PKG_VERSION")),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .style(Style::default().bg(DARK_BG));
        frame.render_widget(title, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let spans = if state.monday_wizard.is_some() {
            vec![
                Span::styled(" Tab", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" field ", Style::default().fg(MUTED_GRAY)),
                Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" Enter", Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)),
                Span::styled(" apply ", Style::default().fg(MUTED_GRAY)),
                Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" Esc", Style::default().fg(WARNING_ORANGE).add_modifier(Modifier::BOLD)),
                Span::styled(" cancel ", Style::default().fg(MUTED_GRAY)),
            ]
        } else {
            vec![
                Span::styled(" Enter", Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD)),
                Span::styled(" connect monday ", Style::default().fg(MUTED_GRAY)),
                Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" r", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" refresh ", Style::default().fg(MUTED_GRAY)),
                Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" ?", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
                Span::styled(" help ", Style::default().fg(MUTED_GRAY)),
                Span::styled("│", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(" q", Style::default().fg(WARNING_ORANGE).add_modifier(Modifier::BOLD)),
                Span::styled(" quit ", Style::default().fg(MUTED_GRAY)),
            ]
        };

        let menu = Paragraph::new(Line::from(spans)).style(Style::default().bg(DARK_BG));
        frame.render_widget(menu, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.get_current_notifications();
        if notifications.is_empty() {
            return;
        }

        // Position notifications in the top-right corner
        let notification_width = 50;
        let notification_height = notifications.len() as u16 * 3;

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= notification_area.height {
                break; // Don't render notifications that won't fit
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, text_color) = match notification.notification_type {
                crate::app::state::NotificationType::Success => ("✓ ", SELECTION_GREEN),
                crate::app::state::NotificationType::Error => ("✗ ", Color::Rgb(230, 100, 100)),
                crate::app::state::NotificationType::Warning => ("⚠ ", WARNING_ORANGE),
                crate::app::state::NotificationType::Info => ("ℹ ", CORNFLOWER_BLUE),
            };

            let notification_line = Line::from(vec![
                Span::styled(icon, Style::default().fg(text_color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(text_color)),
            ]);

            let notification_widget = Paragraph::new(notification_line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(text_color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(notification_widget, single_notification_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
