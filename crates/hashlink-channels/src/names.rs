//! Contract checks for channel names and parameters.
//!
//! The wire format has no escaping, so anything carrying a separator would
//! silently corrupt the hash. These checks let the mutating entry points
//! reject such arguments up front and name the offending one:
//! - Channel names must be non-empty and free of `;`, `:`, `,`, `=` and `#`
//! - Parameter keys must be non-empty and free of the same characters
//! - Text values may be empty but must be free of them too

use hashlink_codec::{ParamMapping, ParamValue, RESERVED_CHARS};

use crate::error::{ChannelError, ChannelResult};

/// Ends the URL before the hash starts, so it is forbidden as well.
const FRAGMENT_MARK: char = '#';

fn forbidden_char(s: &str) -> Option<char> {
    s.chars().find(|c| *c == FRAGMENT_MARK || RESERVED_CHARS.contains(c))
}

/// Validate a channel name.
///
/// # Examples
///
/// ```
/// use hashlink_channels::names::validate_channel_name;
///
/// assert!(validate_channel_name("p").is_ok());
/// assert!(validate_channel_name("").is_err());
/// assert!(validate_channel_name("a:b").is_err());
/// ```
pub fn validate_channel_name(name: &str) -> ChannelResult<()> {
    if name.is_empty() {
        return Err(ChannelError::InvalidName {
            name: name.to_string(),
            reason: "channel name must not be empty".into(),
        });
    }
    if let Some(ch) = forbidden_char(name) {
        return Err(ChannelError::InvalidName {
            name: name.to_string(),
            reason: format!("contains reserved character: {ch:?}"),
        });
    }
    Ok(())
}

/// Validate a single parameter key.
pub fn validate_param_key(key: &str) -> ChannelResult<()> {
    if key.is_empty() {
        return Err(ChannelError::InvalidKey {
            key: key.to_string(),
            reason: "parameter key must not be empty".into(),
        });
    }
    if let Some(ch) = forbidden_char(key) {
        return Err(ChannelError::InvalidKey {
            key: key.to_string(),
            reason: format!("contains reserved character: {ch:?}"),
        });
    }
    Ok(())
}

/// Validate every key and text value of a parameter set.
pub fn validate_params(params: &ParamMapping) -> ChannelResult<()> {
    for (key, value) in params.iter() {
        validate_param_key(key)?;
        if let ParamValue::Text(text) = value {
            if let Some(ch) = forbidden_char(text) {
                return Err(ChannelError::InvalidValue {
                    key: key.to_string(),
                    value: text.clone(),
                    reason: format!("contains reserved character: {ch:?}"),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate_channel_name("p").is_ok());
        assert!(validate_channel_name("camera").is_ok());
        assert!(validate_channel_name("nav-tree_2").is_ok());
    }

    #[test]
    fn reject_empty_name() {
        assert!(validate_channel_name("").is_err());
    }

    #[test]
    fn reject_reserved_chars_in_name() {
        for name in ["a;b", "a:b", "a,b", "a=b", "a#b"] {
            let err = validate_channel_name(name).unwrap_err();
            assert!(matches!(err, ChannelError::InvalidName { .. }), "{name}: {err}");
        }
    }

    #[test]
    fn reject_bad_keys() {
        assert!(matches!(validate_param_key(""), Err(ChannelError::InvalidKey { .. })));
        assert!(matches!(validate_param_key("x=y"), Err(ChannelError::InvalidKey { .. })));
        assert!(validate_param_key("x").is_ok());
    }

    #[test]
    fn validate_params_checks_text_values() {
        let ok: ParamMapping = [("x", "1"), ("sel", "")].into_iter().collect();
        assert!(validate_params(&ok).is_ok());

        let bad: ParamMapping = [("x", "1,2")].into_iter().collect();
        let err = validate_params(&bad).unwrap_err();
        assert_eq!(
            err,
            ChannelError::InvalidValue {
                key: "x".into(),
                value: "1,2".into(),
                reason: "contains reserved character: ','".into(),
            }
        );
    }

    #[test]
    fn numeric_values_always_pass() {
        let mut m = ParamMapping::new();
        m.insert("x", -1.5);
        assert!(validate_params(&m).is_ok());
    }

    #[test]
    fn error_message_names_argument() {
        let err = validate_channel_name("a:b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid channel name: \"a:b\": contains reserved character: ':'"
        );
    }
}
