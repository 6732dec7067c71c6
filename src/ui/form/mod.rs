//! Reply form feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form fields, loading flag, rendered regions, status line
//! - `intent.rs` - User edits and request lifecycle events
//! - `reducer.rs` - State transitions
//! - `examples.rs` - Canned letters
//!
//! Side effects (network, clipboard) live in [`crate::ui::controller`].

mod examples;
mod intent;
mod reducer;
mod state;

pub use examples::ExampleLetter;
pub use intent::{FormIntent, TextEdit, TextField};
pub use reducer::{FormReducer, STATUS_EXAMPLE_LOADED, STATUS_GENERATED, STATUS_GENERATING};
pub use state::{
    ClassificationView, FactsView, FormState, LoadState, Severity, Status,
    CLASSIFICATION_PLACEHOLDER, FACTS_PLACEHOLDER, GENERATE_LABEL, GENERATE_LABEL_LOADING,
    REGENERATE_LABEL,
};
