use crate::mapping::ParamMapping;
use crate::value::ParamValue;

/// Separates channel entries within a hash.
pub const ENTRY_SEP: char = ';';
/// Separates a channel name from its blob.
pub const NAME_SEP: char = ':';
/// Separates tokens within a blob.
pub const TOKEN_SEP: char = ',';
/// Separates a key from its value within a token.
pub const PAIR_SEP: char = '=';

/// Characters that must not appear in names, keys or values.
pub const RESERVED_CHARS: &[char] = &[ENTRY_SEP, NAME_SEP, TOKEN_SEP, PAIR_SEP];

/// Encode a parameter set into a blob.
///
/// With `include_names`, each parameter becomes `key=value`, or a bare `key`
/// when the value is falsy. Without it, only the stringified values are
/// written and key identity is lost.
///
/// Nothing is escaped: reserved characters inside keys or values corrupt the
/// blob.
pub fn encode_params(params: &ParamMapping, include_names: bool) -> String {
    let tokens: Vec<String> = params
        .iter()
        .map(|(key, value)| match (include_names, value.is_truthy()) {
            (true, true) => format!("{key}{PAIR_SEP}{value}"),
            (true, false) => key.to_string(),
            (false, _) => value.to_string(),
        })
        .collect();
    tokens.join(",")
}

/// Decode a blob into a parameter set. Never fails.
///
/// - `key=value` stores `value` under `key`; anything after a second `=` is
///   ignored.
/// - A bare numeric token is stored under its position in the token list,
///   counting empty tokens.
/// - A bare non-numeric token is stored under its own text with the value
///   `0`.
///
/// The bare-token fallback is asymmetric, and a falsy value encoded with
/// names comes back as `0`. Links already in circulation depend on both, so
/// they are kept as is.
pub fn decode_params(blob: &str) -> ParamMapping {
    let mut params = ParamMapping::new();
    if blob.is_empty() {
        return params;
    }

    for (index, token) in blob.split(TOKEN_SEP).enumerate() {
        if token.is_empty() {
            continue;
        }
        match token.split_once(PAIR_SEP) {
            Some((key, rest)) => {
                let value = rest.split(PAIR_SEP).next().unwrap_or_default();
                params.insert(key, value);
            }
            None if is_numeric(token) => {
                params.insert(index.to_string(), token);
            }
            None => {
                params.insert(token, ParamValue::Number(0.0));
            }
        }
    }
    params
}

/// Decode a full `name:blob` channel entry.
///
/// Returns an empty mapping when the entry is empty, has no name, or has an
/// empty blob. Only the text between the first and second `:` is decoded.
pub fn object_params(entry: &str) -> ParamMapping {
    let mut parts = entry.split(NAME_SEP);
    match (parts.next(), parts.next()) {
        (Some(name), Some(blob)) if !name.is_empty() && !blob.is_empty() => decode_params(blob),
        _ => ParamMapping::new(),
    }
}

/// Returns `true` if `token` reads as a finite decimal number.
pub fn is_numeric(token: &str) -> bool {
    let trimmed = token.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}
