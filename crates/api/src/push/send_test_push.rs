use crate::{
    error::TtError,
    shared::{
        auth::protect_route,
        delivery::deliver,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tt_reminders_api_structs::send_test_push::*;
use tt_reminders_domain::{PushMessage, ID};
use tt_reminders_infra::{DeliveryOutcome, TtContext};

pub async fn send_test_push_controller(
    http_req: HttpRequest,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    let user = protect_route(&http_req, &ctx).await?;

    execute(SendTestPushUseCase { user_id: user.id }, &ctx)
        .await
        .map(|_| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                message: "Test notification sent!".into(),
            })
        })
        .map_err(TtError::from)
}

/// Lets a `User` verify that push notifications reach the device
#[derive(Debug)]
pub struct SendTestPushUseCase {
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotSubscribed,
    SubscriptionGone,
    DeliveryFailed(String),
    StorageError,
}

impl From<UseCaseError> for TtError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotSubscribed => Self::BadClientData(
                "No push subscription found. Enable notifications first.".into(),
            ),
            UseCaseError::SubscriptionGone => Self::BadClientData(
                "The push subscription has expired. Enable notifications again.".into(),
            ),
            UseCaseError::DeliveryFailed(_) | UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendTestPushUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "SendTestPush";

    async fn execute(&mut self, ctx: &TtContext) -> Result<Self::Response, Self::Error> {
        let subscription = ctx
            .repos
            .push_subscriptions
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotSubscribed)?;

        let message = PushMessage::Test {
            days_ahead: ctx.config.horizon_days,
        };
        match deliver(&subscription, &message, ctx).await {
            DeliveryOutcome::Ok => Ok(()),
            DeliveryOutcome::Gone => {
                ctx.repos.push_subscriptions.delete(&subscription.id).await;
                Err(UseCaseError::SubscriptionGone)
            }
            DeliveryOutcome::Error(reason) => Err(UseCaseError::DeliveryFailed(reason)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::testing::{insert_member, insert_subscription, setup, TestContext};

    #[actix_web::main]
    #[test]
    async fn sends_test_message_to_the_subscription() {
        let TestContext { ctx, push, .. } = setup();
        let user = insert_member(&ctx, "Ada").await;
        insert_subscription(&ctx, &user.id, "https://push.example.com/ada").await;

        let mut usecase = SendTestPushUseCase {
            user_id: user.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        let sent = push.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, PushMessage::Test { days_ahead: 7 });
        assert_eq!(sent[0].message.url(), "/dashboard");
    }

    #[actix_web::main]
    #[test]
    async fn requires_a_subscription() {
        let ctx = setup().ctx;
        let user = insert_member(&ctx, "Ada").await;

        let mut usecase = SendTestPushUseCase { user_id: user.id };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotSubscribed
        );
    }

    #[actix_web::main]
    #[test]
    async fn gone_subscription_is_removed() {
        let TestContext { ctx, push, .. } = setup();
        let user = insert_member(&ctx, "Ada").await;
        insert_subscription(&ctx, &user.id, "https://push.example.com/gone").await;
        push.set_outcome("https://push.example.com/gone", DeliveryOutcome::Gone);

        let mut usecase = SendTestPushUseCase {
            user_id: user.id.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::SubscriptionGone
        );
        assert!(ctx
            .repos
            .push_subscriptions
            .find_by_user(&user.id)
            .await
            .unwrap()
            .is_none());
    }
}
