use crate::engine::substitute;
use crate::fields::FieldTable;
use crate::tokens::tokens;

/// Wrap every recognized placeholder token in `mark`, for display.
///
/// The same grammar drives this pass and the real substitution, so a token
/// is highlighted exactly when it could be filled in.
pub fn highlight_tokens(template: &str, mark: impl Fn(&str) -> String) -> String {
    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;

    for (_, span) in tokens(template) {
        output.push_str(&template[cursor..span.start]);
        output.push_str(&mark(&template[span.clone()]));
        cursor = span.end;
    }

    output.push_str(&template[cursor..]);
    output
}

/// Display-only substitution with every replacement value wrapped in `mark`.
///
/// Runs over a marked copy of the field table. The real substitution is a
/// separate call over the unmarked table, so the marker never reaches the
/// processed text.
pub fn highlight_values(
    template: &str,
    fields: &FieldTable,
    mark: impl Fn(&str) -> String,
) -> String {
    substitute(template, &fields.marked(mark))
}
