use artgrid_core::{AppViewModel, ArtworkRowView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use super::constants::*;
use super::layout;

pub fn render(f: &mut Frame<'_>, view: &AppViewModel) {
    let chunks = layout::main_chunks(f.size());

    render_table(f, chunks[0], view);
    f.render_widget(Paragraph::new(status_line(view)), chunks[1]);
    f.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if view.popover_open {
        render_popover(f, layout::popover_area(chunks[0]), view);
    }
}

fn render_table(f: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let header = Row::new(
        std::iter::once(Cell::from(page_checkbox(view)))
            .chain(COLUMN_HEADERS.iter().map(|title| Cell::from(*title))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view.rows.iter().map(table_row).collect();

    let table = Table::new(rows, layout::COLUMN_WIDTHS)
        .header(header)
        .block(Block::default().title(APP_TITLE).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !view.rows.is_empty() {
        state.select(Some(view.cursor));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn table_row(row: &ArtworkRowView) -> Row<'static> {
    let record = &row.record;
    let style = if row.selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    Row::new(vec![
        Cell::from(checkbox(row.selected)),
        Cell::from(single_line(&record.title)),
        Cell::from(single_line(&record.place_of_origin)),
        Cell::from(single_line(&record.artist_display)),
        Cell::from(single_line(&record.inscriptions)),
        Cell::from(record.date_start.clone()),
        Cell::from(record.date_end.clone()),
    ])
    .style(style)
}

fn render_popover(f: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let input = if view.pending_input.is_empty() {
        Span::styled("Enter number", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(view.pending_input.clone())
    };
    let lines = vec![
        Line::from(vec![Span::raw("Rows: "), input]),
        Line::from(""),
        Line::from(Span::styled(
            POPOVER_HELP,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popover = Paragraph::new(lines).block(
        Block::default()
            .title(POPOVER_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popover, area);
}

fn status_line(view: &AppViewModel) -> Line<'static> {
    let mut spans = vec![Span::raw(paginator_text(view))];

    let selected = view.selected_ids.len();
    let mut selection = format!(" | Selected {selected}");
    if view.selected_off_page > 0 {
        selection.push_str(&format!(" ({} on other pages)", view.selected_off_page));
    }
    spans.push(Span::raw(selection));

    if view.loading {
        spans.push(Span::styled(
            " | loading…",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(at) = &view.fetched_at {
        spans.push(Span::raw(format!(" | updated {at}")));
    }
    if let Some(error) = &view.last_error {
        spans.push(Span::styled(
            format!(" | {error}"),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn paginator_text(view: &AppViewModel) -> String {
    let pages = view.total_pages.max(1);
    match view.window {
        Some((first, last)) => format!(
            "Page {} of {} | Showing {} to {} of {}",
            view.page, pages, first, last, view.total_records
        ),
        None => format!("Page {} of {} | No records", view.page, pages),
    }
}

/// Header checkbox state for the rows on display.
fn page_checkbox(view: &AppViewModel) -> &'static str {
    let selected = view.rows.iter().filter(|row| row.selected).count();
    match selected {
        0 => "[ ]",
        n if n == view.rows.len() => "[x]",
        _ => "[-]",
    }
}

fn checkbox(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Table rows are one line tall; fold embedded newlines.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}
