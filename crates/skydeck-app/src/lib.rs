//! skydeck-app - Application state and orchestration for Skydeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction for orchestration, configuration loading, the theme
//! preference store, widget lifecycles and the data providers behind them.

pub mod actions;
pub mod board;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod preferences;
pub mod process;
pub mod provider;
pub mod shell;
pub mod signals;
pub mod state;
pub mod widget;

// Re-export primary types
pub use board::WidgetBoard;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use preferences::{
    ColorSchemeSignal, EnvColorScheme, FilePreferenceBackend, FixedColorScheme,
    MemoryPreferenceBackend, PreferenceBackend, PreferenceStore,
};
pub use provider::{AnyProvider, DataProvider, FixtureProvider, MockProvider};
pub use shell::ShellState;
pub use state::AppState;
pub use widget::{MountId, WidgetHost};
