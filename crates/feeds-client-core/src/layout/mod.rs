mod menu_layout;
mod window_catalog;

pub use {
    menu_layout::{MenuEntry, MenuLayout},
    window_catalog::{WindowCatalog, WindowFactory, WindowSpec, present_window},
};
