use super::*;

mod browser;
mod dispatch;
mod gate;
