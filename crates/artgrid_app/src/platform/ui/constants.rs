use std::time::Duration;

pub const APP_TITLE: &str = "Artworks";
pub const POPOVER_TITLE: &str = "Select Rows";

/// How long the loop waits for input before polling the engine again.
pub const TICK_INTERVAL: Duration = Duration::from_millis(75);

pub const COLUMN_HEADERS: [&str; 6] = [
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Date Start",
    "Date End",
];

pub const HELP_TEXT: &str =
    "←/→ page  ↑/↓ move  space toggle  a page  c clear  s select rows  r reload  q quit";
pub const POPOVER_HELP: &str = "Enter select  Esc close";
