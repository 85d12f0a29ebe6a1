mod dispatch_reminder;
mod find_due_reminders;
mod get_reminder;
mod respond_to_reminder;
pub mod send_reminders;

use actix_web::web;
use get_reminder::get_reminder_controller;
use respond_to_reminder::respond_to_reminder_controller;
use send_reminders::trigger_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/reminders/trigger",
        web::post().to(trigger_reminders_controller),
    );
    cfg.route(
        "/reminders/{notification_id}",
        web::get().to(get_reminder_controller),
    );
    cfg.route(
        "/reminders/{notification_id}/respond",
        web::post().to(respond_to_reminder_controller),
    );
}
