use crate::{reminder::send_reminders::SendRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::sleep;
use chrono::{DateTime, Days, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::time::Duration;
use tracing::info;
use tt_reminders_infra::TtContext;

/// Time until the next `hour`:00 wall clock time in `tz` that is strictly
/// after `now`. Hours skipped by a DST transition move to the next day.
pub fn get_next_run_delay(now: DateTime<Utc>, hour: u32, tz: &Tz) -> Duration {
    let today = now.with_timezone(tz).date_naive();
    let run_time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);

    for days in 0..=2 {
        let next_run = today
            .checked_add_days(Days::new(days))
            .and_then(|date| tz.from_local_datetime(&date.and_time(run_time)).earliest());
        if let Some(next_run) = next_run {
            if next_run > now {
                if let Ok(delay) = (next_run.with_timezone(&Utc) - now).to_std() {
                    return delay;
                }
            }
        }
    }

    Duration::from_secs(24 * 60 * 60)
}

/// Runs the reminder check every day at the configured hour
pub fn start_send_reminders_job(ctx: TtContext) {
    actix_web::rt::spawn(async move {
        loop {
            let delay = get_next_run_delay(
                ctx.sys.get_utc_now(),
                ctx.config.reminder_hour,
                &ctx.config.timezone,
            );
            info!("Next reminder check in {} seconds", delay.as_secs());
            sleep(delay).await;

            run_reminder_check(&ctx).await;
        }
    });
}

/// A failed check is logged and the next one runs as scheduled
async fn run_reminder_check(ctx: &TtContext) {
    // Errors are logged by the use case executor
    let _ = execute(SendRemindersUseCase {}, ctx).await;
}
