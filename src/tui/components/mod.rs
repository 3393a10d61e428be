//! # TUI Components
//!
//! All UI pieces of the single search screen.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `DateField`: Stored date display with "Select date" hint
//! - `SearchButton`: The search action, dimmed while not ready
//! - `ToastView`: Transient error notification overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: Single-line location input (buffer, cursor, scroll)
//! - `DatePickerState`/`DatePicker`: Modal calendar overlay
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state. Each component file contains its state types,
//! event types, rendering, event handling, and tests.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── text_field.rs     (location inputs)
//! ├── date_field.rs     (stored date display)
//! ├── date_picker.rs    (modal calendar overlay)
//! ├── search_button.rs  (the action)
//! └── toast.rs          (error notification)
//! ```

pub mod date_field;
pub mod date_picker;
pub mod search_button;
pub mod text_field;
pub mod toast;

pub use date_field::DateField;
pub use date_picker::{DATE_FORMAT, DatePicker, DatePickerEvent, DatePickerState, DatePickerTarget};
pub use search_button::SearchButton;
pub use text_field::{FieldEvent, TextField};
pub use toast::ToastView;
