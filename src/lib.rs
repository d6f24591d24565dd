//! Verification of authentication payloads issued by Telegram.
//!
//! Two surfaces share one canonicalize-and-sign primitive: the Login
//! Widget redirect record ([`verify_login_widget`]) and the Mini App
//! init data string ([`verify_init_data`]). Each derives its own secret
//! key from the bot token, so a payload signed for one surface never
//! verifies under the other.
//!
//! Verification is a pure function of (payload, token, max age, clock);
//! nothing is cached or retained between calls, and every failure kind
//! collapses to `false`.

pub mod env;

mod canon;
mod fresh;
mod hex;
mod init_data;
mod query;
mod secret;
mod sign;
mod validate;
mod widget;

pub use init_data::{parse_init_data, verify_init_data, verify_init_data_from_env};
pub use validate::{is_init_data, is_login_widget_data};
pub use widget::{LoginWidgetData, verify_login_widget, verify_login_widget_from_env};

/// Default freshness window, in seconds.
pub const DEFAULT_MAX_AGE: u64 = 86_400;
