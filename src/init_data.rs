use crate::DEFAULT_MAX_AGE;
use crate::env::ConfigurationKey::{AuthMaxAge, TelegramBotToken};
use crate::env::secret_value;
use crate::fresh::{is_fresh, unix_now};
use crate::query::parse_pairs;
use crate::secret::SecretScheme;
use crate::sign::check_fields;
use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

// Fields carried as JSON text inside the init data.
const JSON_FIELDS: &[&str] = &["user", "receiver", "chat"];
const NUMERIC_FIELDS: &[&str] = &["auth_date", "can_send_after"];

/// Verifies a raw Mini App init data string against the bot token.
///
/// The signature covers every field except `hash`, with nested JSON
/// values treated as opaque text. Returns `true` iff `hash` matches and
/// `auth_date` is at most `max_age` seconds old (default 24h).
pub fn verify_init_data(init_data: &str, bot_token: &str, max_age: Option<u64>) -> bool {
    verify_at(
        init_data,
        bot_token,
        max_age.unwrap_or(DEFAULT_MAX_AGE),
        unix_now(),
    )
}

/// Same as [`verify_init_data`], with the bot token taken from
/// `TELEGRAM_BOT_TOKEN` and the window from `AUTH_MAX_AGE` if set.
pub fn verify_init_data_from_env(init_data: &str) -> bool {
    let Some(bot_token) = secret_value(TelegramBotToken) else {
        warn!("TELEGRAM_BOT_TOKEN is not configured");
        return false;
    };
    let max_age = secret_value(AuthMaxAge).and_then(|it| it.parse::<u64>().ok());
    verify_init_data(init_data, bot_token, max_age)
}

fn verify_at(init_data: &str, bot_token: &str, max_age: u64, now: i64) -> bool {
    let pairs = parse_pairs(init_data);
    let Some(received) = pairs
        .iter()
        .find_map(|(key, value)| (key == "hash").then(|| value.clone()))
    else {
        debug!("init data has no hash field");
        return false;
    };
    let fields = pairs
        .into_iter()
        .filter(|(key, _)| key != "hash")
        .collect::<Vec<_>>();
    let Some(auth_date) = fields
        .iter()
        .find(|(key, _)| key == "auth_date")
        .and_then(|(_, value)| value.parse::<i64>().ok())
    else {
        debug!("init data has no usable auth_date field");
        return false;
    };
    if !is_fresh(auth_date, max_age, now) {
        debug!("stale init data: auth_date={auth_date} now={now} max_age={max_age}");
        return false;
    }
    check_fields(&fields, SecretScheme::MiniApp, bot_token, &received)
}

/// Decodes init data into a structured map: `user`, `receiver` and
/// `chat` are parsed from their JSON text (a field whose text is not
/// valid JSON is dropped, not an error), `auth_date` and
/// `can_send_after` become numbers, everything else stays a string.
///
/// This is a convenience for reading the identity payload after
/// [`verify_init_data`] returned `true`; verification itself never uses
/// the decoded values.
pub fn parse_init_data(init_data: &str) -> Map<String, Value> {
    let mut data = Map::new();
    for (key, value) in parse_pairs(init_data) {
        if JSON_FIELDS.contains(&key.as_str()) {
            if let Ok(parsed) = serde_json::from_str::<Value>(&value) {
                data.insert(key, parsed);
            }
        } else if NUMERIC_FIELDS.contains(&key.as_str()) {
            match value.parse::<i64>() {
                Ok(number) => data.insert(key, Value::Number(Number::from(number))),
                Err(_) => data.insert(key, Value::String(value)),
            };
        } else {
            data.insert(key, Value::String(value));
        }
    }
    data
}
