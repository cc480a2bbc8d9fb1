//! Stencil - logic-less string templating
//!
//! Bracket-delimited placeholders (default `{name}`) are extracted from a
//! source string into a typed replacement schema. Rendering substitutes
//! caller values or defaults and leaves anything unresolved verbatim;
//! forking re-parses a partially-rendered string into a new template. No
//! conditionals, no loops, no nesting.

pub mod error;
pub mod template;
pub mod util;

pub use error::{FixSuggestion, TemplateError};
pub use template::{Overrides, Replacement, Template, TemplateBuilder};
pub use template::{DEFAULT_END_TAG, DEFAULT_START_TAG};
