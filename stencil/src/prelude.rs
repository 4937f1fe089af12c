pub use crate::engine::substitute;
pub use crate::errors::{InputKind, StencilError};
pub use crate::fields::FieldTable;
pub use crate::highlight::{highlight_tokens, highlight_values};
pub use crate::prompt::{Completions, Prompter, TermPrompter};
pub use crate::session::{Session, SessionOptions, SessionState};
pub use crate::tokens::{tokens, Span, Spanned};
