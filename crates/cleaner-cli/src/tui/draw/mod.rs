use super::*;

mod browser;
mod core;
mod gate;
