use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen regions of the shell, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub heading: Rect,
    pub grid: Rect,
    pub paginator: Rect,
    pub footer: Rect,
    pub help: Rect,
}

pub fn shell_areas(area: Rect) -> ShellAreas {
    let [heading, grid, paginator, footer, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    ShellAreas {
        heading,
        grid,
        paginator,
        footer,
        help,
    }
}

/// Column widths: checkbox first, then one entry per grid column.
pub fn column_widths() -> [Constraint; 7] {
    [
        Constraint::Length(3),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Length(10),
    ]
}

/// Centered box for the custom-select overlay.
pub fn overlay_area(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(8)])
        .flex(Flex::Center)
        .areas(area);
    let [overlay] = Layout::horizontal([Constraint::Length(52)])
        .flex(Flex::Center)
        .areas(row);
    overlay
}
