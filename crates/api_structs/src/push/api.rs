use serde::{Deserialize, Serialize};
use tt_reminders_domain::PushKeys;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PushSuccessResponse {
    pub success: bool,
}

pub mod subscribe {
    use super::*;

    /// The `PushSubscription` json the browser hands out
    #[derive(Deserialize, Serialize, Debug, Clone)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub endpoint: String,
        pub keys: PushKeys,
    }

    pub type APIResponse = PushSuccessResponse;
}

pub mod unsubscribe {
    use super::*;

    pub type APIResponse = PushSuccessResponse;
}

pub mod get_push_status {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub subscribed: bool,
    }
}

pub mod get_vapid_public_key {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// Not set when the server has no VAPID keys configured
        pub public_key: Option<String>,
    }
}

pub mod send_test_push {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
    }
}
