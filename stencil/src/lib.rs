pub use engine::substitute;
pub use errors::{InputKind, StencilError};
pub use fields::FieldTable;
pub use highlight::{highlight_tokens, highlight_values};
pub use loader::{dir_entry_names, read_fields, read_template, resolve_path, write_output};
pub use prompt::{parse_yes_no, Completions, Prompter, TermPrompter};
pub use session::{heading, render_error, Session, SessionOptions, SessionState};
pub use tokens::{is_valid_key, tokens, Span, Spanned};

mod engine;
mod errors;
mod fields;
mod highlight;
mod loader;
mod prompt;
mod session;
mod tokens;

pub mod prelude;

/// Grammar for placeholder tokens: `{{`, optional whitespace, a key of one
/// or more word characters, optional whitespace, `}}`.
pub const TOKEN_PATTERN: &str = r"\{\{\s*[A-Za-z0-9_]+\s*\}\}";

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{highlight_tokens, substitute, FieldTable};

    #[test]
    fn preview_and_substitution_recognize_the_same_tokens() {
        let template = textwrap::dedent(
            "
            Dear {{ name }},

            Your order {{order_id}} ships on {{ date }}.
            A {{na-me}} is not a token and neither is {{broken}.
            ",
        );

        let fields: FieldTable = [
            ("name", "Ada"),
            ("order_id", "A-1"),
            ("date", "Friday"),
            ("na-me", "never"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        let marked = highlight_tokens(&template, |token| format!("<<{token}>>"));
        let processed = substitute(&template, &fields);

        assert_eq!(
            textwrap::dedent(
                "
                Dear <<{{ name }}>>,

                Your order <<{{order_id}}>> ships on <<{{ date }}>>.
                A {{na-me}} is not a token and neither is {{broken}.
                ",
            ),
            marked
        );
        assert_eq!(
            textwrap::dedent(
                "
                Dear Ada,

                Your order A-1 ships on Friday.
                A {{na-me}} is not a token and neither is {{broken}.
                ",
            ),
            processed
        );
    }
}
