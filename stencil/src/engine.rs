use regex::{NoExpand, Regex};

use crate::fields::FieldTable;
use crate::tokens::is_valid_key;

/// Replace every placeholder token whose key appears in the field table.
///
/// Fields are applied one at a time in table order, and each field replaces
/// all of its own tokens before the next field is considered. Values are
/// inserted literally and are not rescanned, so a value containing a token
/// is only filled in when that token's key comes later in the table.
/// Tokens whose key has no field are left verbatim.
pub fn substitute(template: &str, fields: &FieldTable) -> String {
    let mut output = template.to_string();

    for (key, value) in fields.iter() {
        // A key the token grammar can't produce has no tokens to replace
        if !is_valid_key(key) {
            continue;
        }

        let pattern = format!(r"\{{\{{\s*{key}\s*\}}\}}");
        let token = Regex::new(&pattern).expect("keys should only contain word characters");

        output = token.replace_all(&output, NoExpand(value)).into_owned();
    }

    output
}
