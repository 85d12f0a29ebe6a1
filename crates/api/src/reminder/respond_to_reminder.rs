use crate::{
    error::TtError,
    shared::{
        auth::protect_route,
        delivery::notify_club,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::warn;
use tt_reminders_api_structs::respond_to_reminder::*;
use tt_reminders_domain::{ReminderResponse, ResponseValue, User, ID};
use tt_reminders_infra::{InsertError, SkipNotice, TtContext};

pub async fn respond_to_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = RespondToReminderUseCase {
        notification_id: path_params.notification_id.clone(),
        user,
        response: body.0.response,
    };

    execute(usecase, &ctx)
        .await
        .map(|submitted| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                response: submitted.response.value,
                club_notified: submitted.club_notified,
                club_notification_error: submitted.club_notification_error,
            })
        })
        .map_err(TtError::from)
}

/// Records the answer of the owner to a reminder. Skipping a class also
/// tells the club, but the answer is recorded even if that fails.
#[derive(Debug)]
pub struct RespondToReminderUseCase {
    pub notification_id: ID,
    pub user: User,
    pub response: String,
}

#[derive(Debug)]
pub struct SubmittedResponse {
    pub response: ReminderResponse,
    /// Only set when skipping
    pub club_notified: Option<bool>,
    pub club_notification_error: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidResponse(String),
    NotFound(ID),
    Forbidden,
    AlreadyResponded,
    StorageError,
}

impl From<UseCaseError> for TtError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidResponse(value) => Self::BadClientData(format!(
                "Response must be \"attend\" or \"skip\", got: {:?}",
                value
            )),
            UseCaseError::NotFound(notification_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                notification_id
            )),
            UseCaseError::Forbidden => {
                Self::Forbidden("The reminder belongs to another user.".into())
            }
            UseCaseError::AlreadyResponded => {
                Self::Conflict("Already responded to this reminder".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RespondToReminderUseCase {
    type Response = SubmittedResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "RespondToReminder";

    async fn execute(&mut self, ctx: &TtContext) -> Result<Self::Response, Self::Error> {
        let value = self
            .response
            .parse::<ResponseValue>()
            .map_err(|_| UseCaseError::InvalidResponse(self.response.clone()))?;

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
        if class.user_id != self.user.id {
            return Err(UseCaseError::Forbidden);
        }

        if ctx
            .repos
            .reminder_responses
            .find_by_notification(&notification.id)
            .await
            .is_some()
        {
            return Err(UseCaseError::AlreadyResponded);
        }

        let response = ReminderResponse {
            id: Default::default(),
            notification_id: notification.id.clone(),
            user_id: self.user.id.clone(),
            class_id: class.id.clone(),
            value,
            responded: ctx.sys.get_utc_now(),
        };
        match ctx.repos.reminder_responses.insert(&response).await {
            Ok(_) => {}
            // Lost a race against another submission
            Err(InsertError::Conflict) => return Err(UseCaseError::AlreadyResponded),
            Err(InsertError::Storage(e)) => {
                warn!(
                    "Unable to store response to reminder: {}. Error: {:?}",
                    notification.id, e
                );
                return Err(UseCaseError::StorageError);
            }
        }

        let (club_notified, club_notification_error) = match value {
            ResponseValue::Attend => (None, None),
            ResponseValue::Skip => {
                let notice = SkipNotice {
                    member_name: self.user.name.clone(),
                    member_email: self.user.email.clone(),
                    class_title: class.title.clone(),
                    target_date: notification.target_date,
                };
                match notify_club(&notice, ctx).await {
                    Ok(_) => (Some(true), None),
                    Err(e) => {
                        warn!(
                            "Unable to tell the club that {} skips class: {}. Error: {:?}",
                            self.user.email, class.id, e
                        );
                        (Some(false), Some(e.to_string()))
                    }
                }
            }
        };

        Ok(SubmittedResponse {
            response,
            club_notified,
            club_notification_error,
        })
    }
}
