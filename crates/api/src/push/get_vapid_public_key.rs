use crate::{error::TtError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use tt_reminders_api_structs::get_vapid_public_key::*;
use tt_reminders_infra::TtContext;

pub async fn get_vapid_public_key_controller(
    http_req: HttpRequest,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse {
        public_key: ctx.config.vapid.as_ref().map(|v| v.public_key.clone()),
    }))
}
