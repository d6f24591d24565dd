use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::sync::LazyLock;
use tracing::info;

static FILE: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::<&'static str, &'static str>::new();
    if let Ok(content) = File::open("./.env").and_then(|ref mut it| {
        let mut content = String::new();
        it.read_to_string(&mut content).map(|_| content)
    }) {
        content
            .split('\n')
            .filter(|&line| !line.trim_start().starts_with('#'))
            .for_each(|line| {
                let mut parts = line.split('=');
                if let Some(key) = parts.next() {
                    if let Some(value) = parts.next() {
                        info!("{key} loaded from environment file");
                        map.insert(
                            key.trim().to_string().leak(),
                            value.trim().to_string().leak(),
                        );
                    }
                }
            })
    }
    map
});

static ENV: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::<&'static str, &'static str>::new();
    std::env::vars().for_each(|(key, value)| {
        map.insert(
            key.trim().to_string().leak(),
            value.trim().to_string().leak(),
        );
    });
    map
});

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum ConfigurationKey {
    TelegramBotToken,
    AuthMaxAge,
    Other { variable_name: &'static str },
}

impl ConfigurationKey {
    fn name(&self) -> &'static str {
        match self {
            Self::TelegramBotToken => "TELEGRAM_BOT_TOKEN",
            Self::AuthMaxAge => "AUTH_MAX_AGE",
            Self::Other { variable_name } => variable_name,
        }
    }
}

/// Values resolve from process environment variables first, then from a
/// `./.env` file. The value itself is never logged.
pub fn secret_value(key: ConfigurationKey) -> Option<&'static str> {
    ENV.get(key.name()).or_else(|| FILE.get(key.name())).copied()
}
