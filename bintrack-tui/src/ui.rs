use bintrack_core::{Bin, BinStatus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, MenuAction, Output, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let counts = format!(
        "bintrack – smart waste segregation & bin tracker ({} bins, {} zone bins)",
        app.store.len(),
        app.store.zone_bins().len()
    );
    let header = Paragraph::new(counts).block(Block::default().borders(Borders::ALL).title("Bintrack"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::Menu => draw_menu(frame, app, *content_area),
        Screen::Form => draw_form(frame, app, *content_area),
        Screen::Output => draw_output(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::Menu => "↑/↓ move · Enter run · q/Ctrl-C quit",
        Screen::Form => "Type to edit · Enter confirm field · Esc cancel · Ctrl-C quit",
        Screen::Output => "Enter/Esc back to menu · Ctrl-C quit",
    };

    let status_text = if let Some(msg) = &app.status {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.status.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let prefix = if idx == app.menu_index { "> " } else { "  " };
            ListItem::new(format!("{prefix}{idx}. {}", action.label()))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Menu (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.menu_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input
            Constraint::Min(0),    // confirmed fields
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, confirmed_area] = chunks else {
        return;
    };

    let prompt = form
        .current_field()
        .map_or("<done>", |field| field.label);

    let input = Paragraph::new(form.input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} – {prompt}", form.action.label())),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(input, *input_area);

    let items = if form.values.is_empty() {
        vec![ListItem::new("No fields confirmed yet.")]
    } else {
        form.fields
            .iter()
            .zip(&form.values)
            .map(|(field, value)| ListItem::new(format!("{}: {value}", field.label)))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirmed fields"),
    );

    frame.render_widget(list, *confirmed_area);
}

fn draw_output(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!("{} (Enter/Esc to go back)", app.output_title);

    match &app.output {
        Output::Messages(lines) => {
            let items = lines
                .iter()
                .map(|line| ListItem::new(line.as_str()))
                .collect::<Vec<ListItem<'_>>>();
            let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(list, area);
        }
        Output::Table(bins) => draw_bin_table(frame, bins, title, area),
        Output::Details(bins) => draw_bin_details(frame, bins, title, area),
    }
}

fn draw_bin_table(frame: &mut Frame<'_>, bins: &[Bin], title: String, area: Rect) {
    let rows = bins.iter().enumerate().map(|(idx, bin)| {
        Row::new(vec![
            Cell::from((idx + 1).to_string()),
            Cell::from(bin.id.to_string()),
            Cell::from(bin.waste_type.clone()),
            Cell::from(bin.location.clone()),
            Cell::from(bin.capacity.to_string()),
            Cell::from(format!("{}%", bin.fill_level)),
            Cell::from(yes_no(bin.status.active)),
            Cell::from(yes_no(bin.status.full)),
            Cell::from(yes_no(bin.status.needs_cleaning)),
        ])
        .style(Style::default().fg(status_color(&bin.status)))
    });

    let column_widths = [
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Min(16),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec![
                "No", "ID", "Type", "Location", "Cap", "Fill%", "Active", "Full", "Clean",
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn draw_bin_details(frame: &mut Frame<'_>, bins: &[Bin], title: String, area: Rect) {
    let mut lines: Vec<Line<'_>> = Vec::new();
    for bin in bins {
        lines.push(Line::from("--- Bin Details ---").style(Style::default().add_modifier(Modifier::BOLD)));
        lines.push(Line::from(format!("ID: {}", bin.id)));
        lines.push(Line::from(format!("Type: {}", bin.waste_type)));
        lines.push(Line::from(format!("Location: {}", bin.location)));
        lines.push(Line::from(format!("Capacity: {}", bin.capacity)));
        lines.push(Line::from(format!("Fill Level: {}%", bin.fill_level)));
        lines.push(
            Line::from(format!("Status: {}", status_label(&bin.status)))
                .style(Style::default().fg(status_color(&bin.status))),
        );
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Y" } else { "N" }
}

fn status_label(status: &BinStatus) -> String {
    let mut label = if status.active {
        "Active".to_owned()
    } else {
        "Inactive".to_owned()
    };
    if status.full {
        label.push_str(" | Full");
    }
    if status.needs_cleaning {
        label.push_str(" | Needs Cleaning");
    }
    label
}

fn status_color(status: &BinStatus) -> Color {
    if !status.active {
        Color::DarkGray
    } else if status.full {
        Color::Red
    } else if status.needs_cleaning {
        Color::Yellow
    } else {
        Color::Reset
    }
}
