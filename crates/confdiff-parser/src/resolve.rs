//! `$Base$NAME$` reference resolution.
//!
//! A value may embed references to sibling keys in the same mapping, written
//! `$Base$NAME$`. Resolution is a single substitution pass over the values
//! captured by the parse: a reference to a key whose own value contains
//! references yields that value's unresolved text, and a self-reference
//! reproduces its own token unchanged. References never chain.

use indexmap::IndexMap;

/// Marker that opens a variable reference token.
pub const REF_MARKER: &str = "$Base$";

/// Substitute every `$Base$NAME$` token in `value` against `lookup`.
///
/// Tokens are consumed left to right: `$Base$` followed by a name running up
/// to the next `$`. A token whose name is present in `lookup` is replaced by
/// the looked-up value; an unknown name leaves the token text verbatim (but
/// still consumes it, so the name characters are never rescanned). A marker
/// with no closing `$` is not a token and the remainder is kept as-is.
pub(crate) fn resolve_refs(value: &str, lookup: &IndexMap<String, String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find(REF_MARKER) {
        let name_start = start + REF_MARKER.len();
        let Some(name_len) = rest[name_start..].find('$') else {
            break;
        };
        let name = &rest[name_start..name_start + name_len];
        let token_end = name_start + name_len + 1;

        out.push_str(&rest[..start]);
        match lookup.get(name) {
            Some(resolved) => out.push_str(resolved),
            None => out.push_str(&rest[start..token_end]),
        }
        rest = &rest[token_end..];
    }

    out.push_str(rest);
    out
}
