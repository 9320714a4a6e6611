use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const WARNING_COLOR: Style = Style::new().yellow();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();
pub const SCALING_HEADER: Style = Style::new().green().bold();
pub const RELATION_NAME: Style = Style::new().cyan();
pub const QUANTITY_NAME: Style = Style::new().bold();
pub const FLAG: Style = Style::new().magenta();
pub const DIMMED: Style = Style::new().dimmed();
