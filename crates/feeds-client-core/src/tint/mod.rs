mod color;
mod selector;
mod template;

pub use {
    color::{SystemEffect, TintColor},
    selector::TintColorSelector,
    template::tint_template,
};
