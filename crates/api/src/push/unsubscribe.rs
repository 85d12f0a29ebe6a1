use crate::{error::TtError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use tt_reminders_api_structs::unsubscribe::*;
use tt_reminders_infra::TtContext;

pub async fn unsubscribe_controller(
    http_req: HttpRequest,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    let user = protect_route(&http_req, &ctx).await?;

    if let Some(subscription) = ctx.repos.push_subscriptions.delete_by_user(&user.id).await {
        info!(
            "Removed push subscription: {} of user: {}",
            subscription.id, user.id
        );
    }

    Ok(HttpResponse::Ok().json(APIResponse { success: true }))
}
