use std::time::Duration;

/// Event-loop poll interval; also bounds how long engine results wait for a render.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub const APP_HEADING: &str = "Art Institute of Chicago";
pub const GRID_TITLE: &str = "Art Institute of Chicago Gallery";
pub const CUSTOM_SELECT_LABEL: &str = "[c] Custom Select";
pub const OVERLAY_TITLE: &str = "Select N Rows";
pub const OVERLAY_HINT: &str =
    "Enter the number of rows to select. Navigation will automatically select rows until N is reached.";
pub const OVERLAY_PLACEHOLDER: &str = "Enter number...";
pub const EMPTY_MESSAGE: &str = "No artworks found.";
pub const LOADING_MESSAGE: &str = "Loading artworks...";
pub const KEY_HELP: &str =
    "up/down move  space toggle row  a toggle page  left/right page  c custom select  q quit";
