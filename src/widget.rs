use crate::DEFAULT_MAX_AGE;
use crate::env::ConfigurationKey::{AuthMaxAge, TelegramBotToken};
use crate::env::secret_value;
use crate::fresh::{is_fresh, unix_now};
use crate::secret::SecretScheme;
use crate::sign::check_fields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Record received from the Login Widget redirect. Fields the widget
/// adds beyond the known ones are collected in `extra` and take part in
/// signature verification like any other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginWidgetData {
    pub id: i64,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub auth_date: i64,
    pub hash: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginWidgetData {
    // Every field except `hash`, rendered as the text the platform
    // signed: decimal for numbers, `true`/`false` for booleans.
    fn check_pairs(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("id".to_string(), self.id.to_string()),
            ("first_name".to_string(), self.first_name.clone()),
            ("auth_date".to_string(), self.auth_date.to_string()),
        ];
        if let Some(it) = self.last_name.as_ref() {
            fields.push(("last_name".to_string(), it.clone()));
        }
        if let Some(it) = self.username.as_ref() {
            fields.push(("username".to_string(), it.clone()));
        }
        if let Some(it) = self.photo_url.as_ref() {
            fields.push(("photo_url".to_string(), it.clone()));
        }
        for (key, value) in &self.extra {
            fields.push((key.clone(), render(value)));
        }
        fields
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(it) => it.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        other => other.to_string(),
    }
}

/// Verifies a Login Widget record against the bot token.
///
/// Returns `true` iff the embedded `auth_date` is at most `max_age`
/// seconds old (default 24h) and `hash` matches the platform signature
/// over every other field.
pub fn verify_login_widget(data: &LoginWidgetData, bot_token: &str, max_age: Option<u64>) -> bool {
    verify_at(
        data,
        bot_token,
        max_age.unwrap_or(DEFAULT_MAX_AGE),
        unix_now(),
    )
}

/// Same as [`verify_login_widget`], with the bot token taken from
/// `TELEGRAM_BOT_TOKEN` and the window from `AUTH_MAX_AGE` if set.
pub fn verify_login_widget_from_env(data: &LoginWidgetData) -> bool {
    let Some(bot_token) = secret_value(TelegramBotToken) else {
        warn!("TELEGRAM_BOT_TOKEN is not configured");
        return false;
    };
    let max_age = secret_value(AuthMaxAge).and_then(|it| it.parse::<u64>().ok());
    verify_login_widget(data, bot_token, max_age)
}

fn verify_at(data: &LoginWidgetData, bot_token: &str, max_age: u64, now: i64) -> bool {
    if !is_fresh(data.auth_date, max_age, now) {
        debug!(
            "stale login widget payload: auth_date={} now={now} max_age={max_age}",
            data.auth_date
        );
        return false;
    }
    check_fields(
        &data.check_pairs(),
        SecretScheme::LoginWidget,
        bot_token,
        &data.hash,
    )
}
