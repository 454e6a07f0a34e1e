use ratatui::style::Style;

pub type CharBuffer = Vec<Vec<char>>;
pub type StyleBuffer = Vec<Vec<Style>>;

pub const HEADER_TITLE: &str = "BULLETIN BOARD";
pub const CURSOR_INDICATOR: char = '▌';
pub const ELLIPSIS: char = '…';
pub const GRID_DOT: char = '·';
pub const HANDLE: char = '•';

// Marks the cell covered by the right half of a wide character
pub const WIDE_CONTINUATION: char = '\0';

// Grid dots closer than this many cells are thinned out
pub const MIN_GRID_SPACING_X: f64 = 4.0;
pub const MIN_GRID_SPACING_Y: f64 = 2.0;

pub const STATUS_EDIT_PREFIX: &str = "Edit: ";
pub const STATUS_CONNECT_PREFIX: &str = "Connect: ";

// Box drawing characters
pub mod junction {
    pub const VERTICAL: char = '│';
    pub const HORIZONTAL: char = '─';
    pub const TOP_LEFT: char = '╭';
    pub const TOP_RIGHT: char = '╮';
    pub const BOTTOM_LEFT: char = '╰';
    pub const BOTTOM_RIGHT: char = '╯';
    pub const ARROW_DOWN: char = '▼';
    pub const ARROW_UP: char = '▲';
    pub const BLOCK: char = '█';
}

pub mod minimap {
    pub const WIDTH: u16 = 24;
    pub const HEIGHT: u16 = 8;
    pub const CARD: char = '■';
}
