//! Campaign performance table component
//!
//! Renders the derived (filtered and sorted) campaign view

use super::super::input::SORT_KEYS;
use super::super::state::DashboardState;
use super::super::utils::{format_cpc, format_ctr, status_colors};
use crate::data::CampaignRecord;
use crate::table::{CampaignTable, SortField};
use crate::utils::format::{format_currency, format_thousands};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Table columns as (label, sort field if the column is sortable).
const COLUMNS: [(&str, Option<SortField>); 8] = [
    ("Campaign Name", Some(SortField::Name)),
    ("Status", None),
    ("Impressions", Some(SortField::Impressions)),
    ("Clicks", Some(SortField::Clicks)),
    ("Conversions", Some(SortField::Conversions)),
    ("CTR", Some(SortField::Ctr)),
    ("CPC", None),
    ("Spend", Some(SortField::Spend)),
];

/// Header label with its sort shortcut and, when active, the direction arrow.
pub fn column_label(table: &CampaignTable, label: &str, field: Option<SortField>) -> String {
    let Some(field) = field else {
        return label.to_string();
    };
    let shortcut = SORT_KEYS
        .iter()
        .find(|(_, f)| *f == field)
        .map(|(key, _)| format!("{} ", key))
        .unwrap_or_default();
    if table.sort_field() == field {
        format!("{}{} {}", shortcut, label, table.sort_direction().arrow())
    } else {
        format!("{}{}", shortcut, label)
    }
}

fn campaign_row(record: &CampaignRecord) -> Row<'static> {
    let (badge_fg, badge_bg) = status_colors(record.status);
    Row::new(vec![
        Cell::from(Span::styled(
            record.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(
            format!(" {} ", record.status.badge_label()),
            Style::default().fg(badge_fg).bg(badge_bg),
        )),
        Cell::from(format_thousands(record.impressions)),
        Cell::from(format_thousands(record.clicks)),
        Cell::from(record.conversions.to_string()),
        Cell::from(format_ctr(record.ctr)),
        Cell::from(format_cpc(record.cpc)),
        Cell::from(format_currency(record.spend)),
    ])
}

pub fn render_campaigns_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let table_state = &state.table;
    let rows = table_state.derive();

    let search_note = if table_state.search_text().is_empty() {
        String::new()
    } else {
        format!(" · search \"{}\"", table_state.search_text())
    };
    let block = Block::default()
        .title(format!(
            " Campaign Performance · {} of {} campaigns{} ",
            rows.len(),
            table_state.records().len(),
            search_note
        ))
        .title_bottom(Line::from(" Detailed metrics for all campaigns · [E] Export CSV ").right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let empty = Paragraph::new("No campaigns match")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|(label, field)| {
                let style = if *field == Some(table_state.sort_field()) {
                    Style::default()
                        .fg(Color::LightYellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD)
                };
                Cell::from(Span::styled(column_label(table_state, label, *field), style))
            })
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1);

    let widths = [
        Constraint::Fill(3),
        Constraint::Length(11),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows.into_iter().map(campaign_row), widths)
        .header(header)
        .column_spacing(1)
        .block(block);

    f.render_widget(table, area);
}
