mod backend;
mod controller;

pub use {
    backend::{MenuTracking, StatusItemBackend},
    controller::{InitOutcome, MenuState, StatusItemController, StatusItemSetup},
};
