use crate::{
    error::TtError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tt_reminders_api_structs::{dtos::ReminderDTO, get_reminder::*};
use tt_reminders_domain::{ClassRecord, Notification, ReminderResponse, ID};
use tt_reminders_infra::TtContext;

pub async fn get_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetReminderUseCase {
        notification_id: path_params.notification_id.clone(),
        user_id: user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|view| {
            HttpResponse::Ok().json(APIResponse {
                reminder: ReminderDTO::new(view.notification, view.class, view.response),
            })
        })
        .map_err(TtError::from)
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub notification_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub struct ReminderView {
    pub notification: Notification,
    pub class: ClassRecord,
    pub response: Option<ReminderResponse>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    Forbidden,
}

impl From<UseCaseError> for TtError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(notification_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                notification_id
            )),
            UseCaseError::Forbidden => {
                Self::Forbidden("The reminder belongs to another user.".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = ReminderView;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminder";

    async fn execute(&mut self, ctx: &TtContext) -> Result<Self::Response, Self::Error> {
        let notification = ctx
            .repos
            .notifications
            .find(&self.notification_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.notification_id.clone()))?;
        let class = ctx
            .repos
            .classes
            .find(&notification.class_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.notification_id.clone()))?;
        if class.user_id != self.user_id {
            return Err(UseCaseError::Forbidden);
        }

        let response = ctx
            .repos
            .reminder_responses
            .find_by_notification(&notification.id)
            .await;

        Ok(ReminderView {
            notification,
            class,
            response,
        })
    }
}
