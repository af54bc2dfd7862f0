mod layout;
mod support;
