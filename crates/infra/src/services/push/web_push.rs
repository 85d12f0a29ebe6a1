use super::{DeliveryOptions, DeliveryOutcome, IPushTransport, PushPayload};
use crate::config::VapidConfig;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use p256::ecdsa::{signature::Signer, Signature, SigningKey};
use reqwest::Client;
use thiserror::Error;
use tracing::warn;
use tt_reminders_domain::{PushMessage, PushSubscription};
use url::Url;

/// How long a signed VAPID token stays valid
const VAPID_TOKEN_LIFETIME_HOURS: i64 = 12;

#[derive(Debug, Error)]
enum WebPushError {
    #[error("Invalid push endpoint: {0}")]
    Endpoint(String),
    #[error("Unable to sign VAPID token: {0}")]
    Signing(String),
    #[error("Unable to encrypt payload: {0}")]
    Encryption(String),
}

/// Delivers messages with the Web Push protocol. Requests are authorized
/// with a VAPID token (RFC 8292) and payloads are `aes128gcm` encrypted
/// for the subscription keys (RFC 8291).
pub struct WebPushTransport {
    vapid: VapidConfig,
    client: Client,
}

impl WebPushTransport {
    pub fn new(vapid: VapidConfig) -> Self {
        Self {
            vapid,
            client: Client::new(),
        }
    }

    fn build_request(
        &self,
        subscription: &PushSubscription,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> Result<reqwest::RequestBuilder, WebPushError> {
        let jwt = build_vapid_jwt(&self.vapid, &subscription.endpoint, Utc::now())?;

        let body = serde_json::to_string(&PushPayload::from(message))
            .map_err(|e| WebPushError::Encryption(e.to_string()))?;
        let p256dh = decode_base64_flexible(&subscription.keys.p256dh)
            .map_err(|e| WebPushError::Encryption(format!("bad p256dh: {}", e)))?;
        let auth = decode_base64_flexible(&subscription.keys.auth)
            .map_err(|e| WebPushError::Encryption(format!("bad auth: {}", e)))?;
        let encrypted = ece::encrypt(&p256dh, &auth, body.as_bytes())
            .map_err(|e| WebPushError::Encryption(e.to_string()))?;

        Ok(self
            .client
            .post(&subscription.endpoint)
            .header(
                "Authorization",
                format!("vapid t={},k={}", jwt, self.vapid.public_key),
            )
            .header("TTL", options.ttl_seconds.to_string())
            .header("Urgency", options.urgency.as_str())
            .header("Content-Encoding", "aes128gcm")
            .header("Content-Type", "application/octet-stream")
            .body(encrypted))
    }
}

#[async_trait::async_trait]
impl IPushTransport for WebPushTransport {
    async fn send(
        &self,
        subscription: &PushSubscription,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome {
        let request = match self.build_request(subscription, message, options) {
            Ok(request) => request,
            Err(e) => return DeliveryOutcome::Error(e.to_string()),
        };

        let res = match request.send().await {
            Ok(res) => res,
            Err(e) => return DeliveryOutcome::Error(format!("Push request failed: {}", e)),
        };

        let status = res.status().as_u16();
        match status {
            200..=299 => DeliveryOutcome::Ok,
            404 | 410 => DeliveryOutcome::Gone,
            _ => {
                let text = res.text().await.unwrap_or_default();
                warn!(
                    "Push endpoint: {} returned status: {}",
                    subscription.endpoint, status
                );
                DeliveryOutcome::Error(format!(
                    "Push endpoint returned {}: {}",
                    status, text
                ))
            }
        }
    }
}

/// Signs an ES256 JWT for the origin of the push endpoint
fn build_vapid_jwt(
    vapid: &VapidConfig,
    endpoint: &str,
    now: DateTime<Utc>,
) -> Result<String, WebPushError> {
    let audience = extract_origin(endpoint)?;
    let header = URL_SAFE_NO_PAD.encode(br#"{"typ":"JWT","alg":"ES256"}"#);
    let claims = serde_json::json!({
        "aud": audience,
        "exp": (now + Duration::hours(VAPID_TOKEN_LIFETIME_HOURS)).timestamp(),
        "sub": &vapid.subject,
    });
    let claims = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    let signing_input = format!("{}.{}", header, claims);

    let key_bytes = decode_base64_flexible(&vapid.private_key)
        .map_err(|e| WebPushError::Signing(format!("bad private key: {}", e)))?;
    let signing_key = SigningKey::from_slice(&key_bytes)
        .map_err(|e| WebPushError::Signing(e.to_string()))?;
    let signature: Signature = signing_key.sign(signing_input.as_bytes());

    Ok(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature.to_bytes())
    ))
}

fn extract_origin(endpoint: &str) -> Result<String, WebPushError> {
    let url = Url::parse(endpoint).map_err(|e| WebPushError::Endpoint(e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| WebPushError::Endpoint(format!("{} has no host", endpoint)))?;
    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

/// Browsers hand out keys in url safe base64 without padding, but other
/// variants are seen in the wild
fn decode_base64_flexible(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD
        .decode(input)
        .or_else(|_| URL_SAFE.decode(input))
        .or_else(|_| STANDARD.decode(input))
}
