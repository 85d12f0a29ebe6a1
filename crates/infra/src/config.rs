use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr};
use tracing::{info, warn};
use tt_reminders_domain::REMINDER_HORIZON_DAYS;
use tt_reminders_utils::create_random_secret;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret that must be provided to trigger a reminder run manually
    pub admin_secret: String,
    /// Secret the user json web tokens are signed with
    pub jwt_secret: String,
    /// Wall clock hour in `timezone` at which the daily reminder run starts
    pub reminder_hour: u32,
    /// Timezone class dates and the reminder hour are expressed in
    pub timezone: Tz,
    /// How many days before an occurrence the owner is reminded
    pub horizon_days: u32,
    /// Upper bound for a single push delivery. A delivery that takes
    /// longer is treated as a transient failure.
    pub push_timeout_millis: u64,
    /// How long the push service should keep an undelivered message
    pub push_ttl_seconds: u32,
    /// Upper bound for telling the club about a skipped class
    pub club_timeout_millis: u64,
    pub vapid: Option<VapidConfig>,
    pub club_webhook: Option<ClubWebhookConfig>,
    /// Prefix of the response url sent to clients
    pub app_base_path: String,
}

/// Application server keys for the web push protocol
#[derive(Debug, Clone)]
pub struct VapidConfig {
    pub public_key: String,
    pub private_key: String,
    /// Contact of the application server, e.g. `mailto:admin@example.com`
    pub subject: String,
}

/// Where the club is informed about members skipping a class
#[derive(Debug, Clone)]
pub struct ClubWebhookConfig {
    pub url: String,
    pub key: String,
}

impl Config {
    pub fn new() -> Self {
        let admin_secret = get_or_create_secret("ADMIN_SECRET", "triggering reminder runs");
        let jwt_secret = get_or_create_secret("JWT_SECRET", "signing user tokens");

        let mut reminder_hour = parse_env_or("REMINDER_HOUR", 9);
        if reminder_hour > 23 {
            warn!(
                "The given REMINDER_HOUR: {} is not an hour of the day, falling back to 9.",
                reminder_hour
            );
            reminder_hour = 9;
        }

        let vapid = match (
            std::env::var("VAPID_PUBLIC_KEY"),
            std::env::var("VAPID_PRIVATE_KEY"),
        ) {
            (Ok(public_key), Ok(private_key)) => Some(VapidConfig {
                public_key,
                private_key,
                subject: std::env::var("VAPID_SUBJECT")
                    .unwrap_or_else(|_| "mailto:admin@example.com".into()),
            }),
            _ => {
                warn!("VAPID keys not configured - push notifications will only be logged");
                None
            }
        };

        let club_webhook = match std::env::var("CLUB_WEBHOOK_URL") {
            Ok(url) => Some(ClubWebhookConfig {
                url,
                key: std::env::var("CLUB_WEBHOOK_KEY").unwrap_or_default(),
            }),
            Err(_) => {
                warn!("CLUB_WEBHOOK_URL not configured - the club will not be told about skipped classes");
                None
            }
        };

        Self {
            port: parse_env_or("PORT", 5000),
            admin_secret,
            jwt_secret,
            reminder_hour,
            timezone: parse_env_or("REMINDER_TIMEZONE", Tz::UTC),
            horizon_days: parse_env_or("REMINDER_HORIZON_DAYS", REMINDER_HORIZON_DAYS),
            push_timeout_millis: parse_env_or("PUSH_TIMEOUT_MILLIS", 10_000),
            push_ttl_seconds: parse_env_or("PUSH_TTL_SECONDS", 60),
            club_timeout_millis: parse_env_or("CLUB_TIMEOUT_MILLIS", 10_000),
            vapid,
            club_webhook,
            app_base_path: std::env::var("APP_BASE_PATH").unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn get_or_create_secret(var: &str, purpose: &str) -> String {
    match std::env::var(var) {
        Ok(secret) => secret,
        Err(_) => {
            info!(
                "Did not find {} environment variable. Going to create one.",
                var
            );
            let secret = create_random_secret(16);
            info!("Secret for {} was generated and set to: {}", purpose, secret);
            secret
        }
    }
}

fn parse_env_or<T>(var: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match std::env::var(var) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    var, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_falls_back_to_default_for_unset_or_invalid_values() {
        assert_eq!(parse_env_or("TT_REMINDERS_TEST_UNSET_VAR", 42), 42);

        std::env::set_var("TT_REMINDERS_TEST_INVALID_PORT", "not a port");
        assert_eq!(parse_env_or("TT_REMINDERS_TEST_INVALID_PORT", 5000), 5000);

        std::env::set_var("TT_REMINDERS_TEST_TIMEZONE", "Europe/Oslo");
        assert_eq!(
            parse_env_or("TT_REMINDERS_TEST_TIMEZONE", Tz::UTC),
            chrono_tz::Europe::Oslo
        );
    }
}
