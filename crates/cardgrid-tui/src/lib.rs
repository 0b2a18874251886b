pub mod controller;
pub mod element;
pub mod events;
pub mod host;
pub mod keys;
pub mod source;

pub use controller::{GridNavProps, GridNavigationController, KeyOutcome};
pub use element::{ElementRef, FocusableElement};
pub use events::EventHandler;
pub use host::{HostWindow, PluginWindow};
pub use source::{KeyBus, KeyEventSource, KeyListener, ListenerId};
