//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status bar with backend address and status
//! - `RecommendationTable`: ranked results, table or podium view
//! - `Toast`: transient success/error notification
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CropForm`: the input fields; owns focus, emits edits and submit
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor parameters), not
//! by reaching into global state:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! RecommendationTable::new(&app.ranking, app.display_mode).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                  (this file)
//! ├── title_bar.rs            (top status bar)
//! ├── crop_form.rs            (input fields)
//! ├── recommendation_table.rs (results)
//! └── toast.rs                (notifications)
//! ```

pub mod crop_form;
pub mod recommendation_table;
mod title_bar;
pub mod toast;

pub use crop_form::{CropForm, CropFormState, FormEvent};
pub use recommendation_table::RecommendationTable;
pub use title_bar::TitleBar;
pub use toast::Toast;
