//! Sales record entry form
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: store access (fetch, save)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::SalesRecordDetails;
pub use view_model::SalesRecordDetailsViewModel;
