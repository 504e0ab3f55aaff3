//! Shared library module for the Bingo app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::BingoApp;

pub(crate) mod action;
pub mod app;
pub mod game_factory;
pub(crate) mod persistence;
pub(crate) mod state;
pub(crate) mod ui;
pub mod version;
pub(crate) mod view_model_builder;
