use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use tt_reminders_api_structs::*;
use tt_reminders_domain::PushKeys;

#[derive(Clone)]
pub struct PushClient {
    base: Arc<BaseClient>,
}

pub struct SubscribeInput {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}

impl PushClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn vapid_public_key(&self) -> APIResponse<get_vapid_public_key::APIResponse> {
        self.base
            .get("push/vapid-public-key".into(), StatusCode::OK)
            .await
    }

    pub async fn subscribe(&self, input: SubscribeInput) -> APIResponse<subscribe::APIResponse> {
        let body = subscribe::RequestBody {
            endpoint: input.endpoint,
            keys: PushKeys {
                p256dh: input.p256dh,
                auth: input.auth,
            },
        };
        self.base
            .post(body, "push/subscribe".into(), StatusCode::OK)
            .await
    }

    pub async fn unsubscribe(&self) -> APIResponse<unsubscribe::APIResponse> {
        self.base
            .delete("push/unsubscribe".into(), StatusCode::OK)
            .await
    }

    pub async fn status(&self) -> APIResponse<get_push_status::APIResponse> {
        self.base.get("push/status".into(), StatusCode::OK).await
    }

    pub async fn send_test(&self) -> APIResponse<send_test_push::APIResponse> {
        self.base
            .post_empty("push/test".into(), StatusCode::OK)
            .await
    }
}
