use crate::{
    error::TtError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tt_reminders_api_structs::subscribe::*;
use tt_reminders_domain::{InvalidSubscriptionError, PushKeys, PushSubscription, ID};
use tt_reminders_infra::TtContext;

pub async fn subscribe_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = SubscribeUseCase {
        user_id: user.id,
        endpoint: body.endpoint,
        keys: body.keys,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(TtError::from)
}

/// Makes the given endpoint the only push subscription of the `User`
#[derive(Debug)]
pub struct SubscribeUseCase {
    pub user_id: ID,
    pub endpoint: String,
    pub keys: PushKeys,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidSubscription(InvalidSubscriptionError),
    StorageError,
}

impl From<UseCaseError> for TtError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidSubscription(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubscribeUseCase {
    type Response = PushSubscription;

    type Error = UseCaseError;

    const NAME: &'static str = "Subscribe";

    async fn execute(&mut self, ctx: &TtContext) -> Result<Self::Response, Self::Error> {
        let subscription = PushSubscription::new(
            self.user_id.clone(),
            self.endpoint.clone(),
            self.keys.clone(),
        )
        .map_err(UseCaseError::InvalidSubscription)?;

        ctx.repos
            .push_subscriptions
            .replace(&subscription)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(subscription)
    }
}
