mod config;
mod support;
