//! Core domain: menu screens, one module per panel.

pub(crate) mod hero_select;
pub(crate) mod level_select;
pub(crate) mod main_menu;
