use ring::digest::{SHA256, digest};
use ring::hmac::{HMAC_SHA256, Key, sign};

/// HMAC key for the mini-app scheme; the bot token is the message.
const MINI_APP_KEY: &[u8] = b"WebAppData";

/// The two secret-key derivation schemes. They are deliberately distinct
/// so that a payload signed for one surface never verifies on the other.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum SecretScheme {
    LoginWidget,
    MiniApp,
}

pub(crate) fn derive_secret(scheme: SecretScheme, bot_token: &str) -> Vec<u8> {
    match scheme {
        SecretScheme::LoginWidget => digest(&SHA256, bot_token.as_bytes()).as_ref().to_vec(),
        SecretScheme::MiniApp => {
            let key = Key::new(HMAC_SHA256, MINI_APP_KEY);
            sign(&key, bot_token.as_bytes()).as_ref().to_vec()
        }
    }
}
