use super::{
    dispatch_reminder::{DispatchOutcome, DispatchReminderUseCase},
    find_due_reminders::FindDueRemindersUseCase,
};
use crate::{
    error::TtError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use tt_reminders_api_structs::{dtos::ReminderRunSummaryDTO, trigger_reminders::*};
use tt_reminders_domain::{target_date, ReminderRunSummary};
use tt_reminders_infra::TtContext;

pub async fn trigger_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<TtContext>,
) -> Result<HttpResponse, TtError> {
    protect_admin_route(&http_req, &ctx)?;

    execute(SendRemindersUseCase {}, &ctx)
        .await
        .map(|summary| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                message: "Reminder check triggered".into(),
                summary: ReminderRunSummaryDTO::new(summary),
            })
        })
        .map_err(TtError::from)
}

/// One reminder run: finds every class taking place `horizon_days` from
/// today and dispatches a reminder for each of them
#[derive(Debug)]
pub struct SendRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for TtError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = ReminderRunSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &TtContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_utc_now().with_timezone(&ctx.config.timezone);
        let target_date = target_date(&now, ctx.config.horizon_days);
        info!("Checking for classes taking place on {}", target_date);

        let candidates = execute(FindDueRemindersUseCase { target_date }, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut summary = ReminderRunSummary {
            target_date: Some(target_date),
            candidates: candidates.len(),
            ..Default::default()
        };

        for candidate in candidates {
            let usecase = DispatchReminderUseCase {
                candidate,
                target_date,
            };
            match execute(usecase, ctx).await {
                Ok(DispatchOutcome::AlreadyHandled) => summary.already_handled += 1,
                Ok(DispatchOutcome::Dispatched {
                    delivered,
                    gone,
                    failed,
                    ..
                }) => {
                    summary.dispatched += 1;
                    summary.delivered += delivered;
                    summary.gone += gone;
                    summary.failed += failed;
                }
                Err(_) => summary.storage_failures += 1,
            }
        }

        info!(
            "Reminder run for {} done. Candidates: {}, dispatched: {}, already handled: {}, storage failures: {}, delivered: {}, gone: {}, failed: {}",
            target_date,
            summary.candidates,
            summary.dispatched,
            summary.already_handled,
            summary.storage_failures,
            summary.delivered,
            summary.gone,
            summary.failed
        );

        Ok(summary)
    }
}
