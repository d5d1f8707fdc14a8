pub mod display;
pub mod prompts;
pub mod spinner;

pub use prompts::{confirm, optional_text_input, select};
pub use spinner::{Spinner, pause_with_spinner};
