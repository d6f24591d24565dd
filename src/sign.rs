use crate::canon::data_check_string;
use crate::hex::bytes_to_hex;
use crate::secret::{SecretScheme, derive_secret};
use ring::hmac::{HMAC_SHA256, Key, sign};
use tracing::debug;

/// Compares the received hash against HMAC-SHA256(secret, data-check
/// string) rendered as lowercase hex. The comparison is exact string
/// equality: an uppercased hash does not match.
pub(crate) fn signature_matches(secret: &[u8], data_check_string: &str, received: &str) -> bool {
    let key = Key::new(HMAC_SHA256, secret);
    let tag = sign(&key, data_check_string.as_bytes());
    bytes_to_hex(tag.as_ref()) == received
}

/// The shared verification primitive behind both entry points: the
/// signature field must already be excluded from `fields`.
pub(crate) fn check_fields(
    fields: &[(String, String)],
    scheme: SecretScheme,
    bot_token: &str,
    received: &str,
) -> bool {
    let canonical = data_check_string(fields);
    let secret = derive_secret(scheme, bot_token);
    if signature_matches(&secret, &canonical, received) {
        true
    } else {
        debug!("signature mismatch over {} fields", fields.len());
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT_TOKEN: &str = "123456789:ABCdefGHIjklMNOpqrsTUVwxyz";
    const CHECK_STRING: &str = "auth_date=1754380800\nfirst_name=John\nid=123456789";
    const HASH: &str = "6bb593346688ff6fa4ee69bf3a0bed02204e631e355fa1d462da50589078f91b";

    fn widget_secret() -> Vec<u8> {
        derive_secret(SecretScheme::LoginWidget, BOT_TOKEN)
    }

    #[test]
    fn test_signature_matches() {
        assert!(signature_matches(&widget_secret(), CHECK_STRING, HASH));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let uppercase = HASH.to_uppercase();
        assert!(!signature_matches(
            &widget_secret(),
            CHECK_STRING,
            &uppercase
        ));
    }

    #[test]
    fn test_empty_received_hash_never_matches() {
        assert!(!signature_matches(&widget_secret(), CHECK_STRING, ""));
    }

    #[test]
    fn test_check_fields_is_order_independent() {
        let fields = vec![
            ("id".to_string(), "123456789".to_string()),
            ("first_name".to_string(), "John".to_string()),
            ("auth_date".to_string(), "1754380800".to_string()),
        ];
        assert!(check_fields(
            &fields,
            SecretScheme::LoginWidget,
            BOT_TOKEN,
            HASH
        ));
    }

    #[test]
    fn test_check_fields_rejects_wrong_scheme() {
        let fields = vec![
            ("id".to_string(), "123456789".to_string()),
            ("first_name".to_string(), "John".to_string()),
            ("auth_date".to_string(), "1754380800".to_string()),
        ];
        assert!(!check_fields(
            &fields,
            SecretScheme::MiniApp,
            BOT_TOKEN,
            HASH
        ));
    }
}
