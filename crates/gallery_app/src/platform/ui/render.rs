use gallery_core::{AppViewModel, RowView, COLUMNS};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::grid::GridState;
use super::layout::{column_widths, overlay_area, shell_areas};

pub fn render(frame: &mut Frame, view: &AppViewModel, grid: &GridState) {
    let areas = shell_areas(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(
            APP_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        areas.heading,
    );

    let block = grid_block(view);
    match &view.error {
        // The error replaces the whole table area.
        Some(message) => {
            let error = Paragraph::new(format!("Error: {message}"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(error, areas.grid);
        }
        None if view.rows.is_empty() => {
            let text = if view.loading {
                LOADING_MESSAGE
            } else {
                EMPTY_MESSAGE
            };
            frame.render_widget(Paragraph::new(text).block(block), areas.grid);
        }
        None => {
            let mut table_state = TableState::default().with_selected(Some(grid.focused()));
            frame.render_stateful_widget(grid_table(view, block), areas.grid, &mut table_state);
        }
    }

    frame.render_widget(Paragraph::new(paginator_text(view)), areas.paginator);
    frame.render_widget(Paragraph::new(footer_line(view)), areas.footer);
    frame.render_widget(
        Paragraph::new(KEY_HELP).style(Style::default().fg(Color::DarkGray)),
        areas.help,
    );

    if view.custom_select.open {
        render_overlay(frame, view);
    }
}

fn grid_block(view: &AppViewModel) -> Block<'static> {
    let title = if view.loading {
        format!(" {GRID_TITLE} (loading) ")
    } else {
        format!(" {GRID_TITLE} ")
    };
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title).alignment(Alignment::Left))
        .title(Line::from(format!(" {CUSTOM_SELECT_LABEL} ")).alignment(Alignment::Right))
}

fn grid_table<'a>(view: &'a AppViewModel, block: Block<'a>) -> Table<'a> {
    let header = std::iter::once(Cell::from(""))
        .chain(COLUMNS.iter().map(|column| {
            let label = if column.sortable {
                format!("{} \u{2195}", column.header)
            } else {
                column.header.to_string()
            };
            Cell::from(label)
        }))
        .collect::<Row>()
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.rows.iter().map(grid_row);

    Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
}

fn grid_row(row: &RowView) -> Row<'static> {
    let checkbox = if row.selected { "[x]" } else { "[ ]" };
    let cells = std::iter::once(Cell::from(checkbox)).chain(
        COLUMNS
            .iter()
            .map(|column| Cell::from(single_line(&row.record.field_text(column.field)))),
    );
    let style = if row.selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Row::new(cells).style(style)
}

/// Artist credits carry embedded newlines; rows are one line tall.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn paginator_text(view: &AppViewModel) -> String {
    if view.total_pages == 0 {
        return format!("< Page {} >", view.cursor.page);
    }
    format!(
        "< Page {} of {} >  ({} records)",
        view.cursor.page, view.total_pages, view.total_records
    )
}

fn footer_line(view: &AppViewModel) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            "Persistent Selections:",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} rows selected.", view.selected_count)),
    ];
    if view.pending_auto_select > 0 {
        spans.push(Span::styled(
            format!("    Pending Auto-select: {}", view.pending_auto_select),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn render_overlay(frame: &mut Frame, view: &AppViewModel) {
    let area = overlay_area(frame.area());
    let input = if view.custom_select.input.is_empty() {
        Span::styled(OVERLAY_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(view.custom_select.input.clone())
    };
    let submit_style = if view.custom_select.can_submit {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(OVERLAY_HINT),
        Line::from(""),
        Line::from(vec![Span::raw("> "), input]),
        Line::from(Span::styled("[Enter] Select   [Esc] Close", submit_style)),
    ];
    let overlay = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {OVERLAY_TITLE} ")),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(overlay, area);
}

#[cfg(test)]
mod tests {
    use gallery_core::{update, AppState, Msg, Record};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn draw(view: &AppViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
        terminal
            .draw(|frame| render(frame, view, &GridState::default()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_state() -> AppState {
        let (state, _) = update(AppState::new(), Msg::Mounted);
        let (state, _) = update(
            state,
            Msg::PageLoaded {
                request_id: 1,
                page: 1,
                records: vec![
                    Record {
                        id: 1,
                        title: "Nighthawks".to_string(),
                        artist_display: "Edward Hopper\nAmerican, 1882-1967".to_string(),
                        date_start: Some(1942),
                        ..Record::default()
                    },
                    Record {
                        id: 2,
                        title: "The Bedroom".to_string(),
                        ..Record::default()
                    },
                ],
                total_records: 24,
            },
        );
        let (state, _) = update(state, Msg::SelectionChanged(vec![2]));
        state
    }

    #[test]
    fn renders_rows_checkboxes_and_footer() {
        let screen = draw(&loaded_state().view());

        assert!(screen.contains(APP_HEADING));
        assert!(screen.contains(GRID_TITLE));
        assert!(screen.contains("Title"));
        assert!(screen.contains("Nighthawks"));
        assert!(screen.contains("Edward Hopper / American"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("Page 1 of 2"));
        assert!(screen.contains("Persistent Selections: 1 rows selected."));
        assert!(!screen.contains("Pending Auto-select"));
    }

    #[test]
    fn error_replaces_grid() {
        let (state, _) = update(
            loaded_state(),
            Msg::PageFailed {
                request_id: 2,
                page: 1,
                message: "Failed to fetch artworks data".to_string(),
            },
        );
        let screen = draw(&state.view());

        assert!(screen.contains("Error: Failed to fetch artworks data"));
        assert!(!screen.contains("Nighthawks"));
        assert!(screen.contains("Persistent Selections: 1 rows selected."));
    }

    #[test]
    fn empty_page_shows_empty_message() {
        let (state, _) = update(AppState::new(), Msg::Mounted);
        assert!(draw(&state.view()).contains(LOADING_MESSAGE));

        let (state, _) = update(
            state,
            Msg::PageLoaded {
                request_id: 1,
                page: 1,
                records: Vec::new(),
                total_records: 0,
            },
        );
        assert!(draw(&state.view()).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn overlay_and_pending_count_are_shown() {
        let (state, _) = update(loaded_state(), Msg::CustomSelectToggled);
        let screen = draw(&state.view());
        assert!(screen.contains(OVERLAY_TITLE));
        assert!(screen.contains(OVERLAY_PLACEHOLDER));

        let (state, _) = update(state, Msg::CustomCountInput("5".to_string()));
        let (state, _) = update(state, Msg::CustomSelectSubmitted);
        let screen = draw(&state.view());
        assert!(!screen.contains(OVERLAY_TITLE));
        assert!(screen.contains("Pending Auto-select: 3"));
        assert!(screen.contains("Persistent Selections: 2 rows selected."));
    }
}
