pub const COL_TITLE: usize = 32;
pub const COL_ORIGIN: usize = 14;
pub const COL_ARTIST: usize = 28;
pub const PROMPT: &str = "artgrid> ";
