use crate::{error::TtError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use tt_reminders_api_structs::get_push_status::*;
use tt_reminders_infra::TtContext;

pub async fn get_push_status_controller(
    http_req: HttpRequest,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    let user = protect_route(&http_req, &ctx).await?;

    let subscribed = ctx
        .repos
        .push_subscriptions
        .find_by_user(&user.id)
        .await
        .map_err(|_| TtError::InternalError)?
        .is_some();

    Ok(HttpResponse::Ok().json(APIResponse { subscribed }))
}
