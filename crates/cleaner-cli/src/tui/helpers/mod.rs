use super::*;

mod layout;
mod table;

pub(in crate::tui) use layout::*;
pub(in crate::tui) use table::*;
