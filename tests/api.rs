mod helpers;

use helpers::setup::spawn_app;
use reqwest::StatusCode;
use tt_reminders_domain::{PushMessage, ID};
use tt_reminders_infra::DeliveryOutcome;
use tt_reminders_sdk::{ResponseValue, RespondToReminderInput, SubscribeInput, TtRemindersSDK};

fn subscription(endpoint: &str) -> SubscribeInput {
    SubscribeInput {
        endpoint: endpoint.into(),
        p256dh: "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA_0QTpQtUbVlUls0VJXg7A8u".into(),
        auth: "tBHItJI5svbpez7KI4CCXg".into(),
    }
}

fn last_notification_id(app: &helpers::setup::TestApp) -> ID {
    match app.push.sent().last().map(|sent| sent.message.clone()) {
        Some(PushMessage::ClassReminder(message)) => message.notification_id,
        other => panic!("Expected a class reminder to be pushed, got: {:?}", other),
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_trigger_requires_admin_secret() {
    let (app, sdk, address) = spawn_app().await;

    let res = sdk.reminder.trigger().await.unwrap_err();
    assert_eq!(res.status, Some(StatusCode::UNAUTHORIZED));

    let res = TtRemindersSDK::with_admin_secret(address, "guess")
        .reminder
        .trigger()
        .await
        .unwrap_err();
    assert_eq!(res.status, Some(StatusCode::UNAUTHORIZED));

    let res = app.admin_sdk().reminder.trigger().await.unwrap();
    assert!(res.success);
    assert_eq!(res.message, "Reminder check triggered");
    assert_eq!(res.summary.candidates, 0);
}

#[actix_web::main]
#[test]
async fn test_reminder_flow() {
    let (app, _, _) = spawn_app().await;
    let (owner, member_sdk) = app.member("Ada").await;
    let class = app.weekly_class(&owner, "Serve practice", 3).await;
    member_sdk
        .push
        .subscribe(subscription("https://push.example.com/ada"))
        .await
        .unwrap();
    assert!(member_sdk.push.status().await.unwrap().subscribed);

    let res = app.admin_sdk().reminder.trigger().await.unwrap();
    assert_eq!(res.summary.target_date, Some("2024-05-08".parse().unwrap()));
    assert_eq!(res.summary.candidates, 1);
    assert_eq!(res.summary.dispatched, 1);
    assert_eq!(res.summary.delivered, 1);

    // A second run the same day does not remind again
    let res = app.admin_sdk().reminder.trigger().await.unwrap();
    assert_eq!(res.summary.candidates, 0);
    assert_eq!(app.push.sent().len(), 1);

    let sent = &app.push.sent()[0];
    assert_eq!(sent.message.title(), "Class Cancellation Reminder");
    assert_eq!(
        sent.message.body(),
        "Your one-on-one class \"Serve practice\" is in 7 days (Wednesday, May 8). Today is the last day to cancel without penalty!"
    );
    let notification_id = last_notification_id(&app);

    let reminder = member_sdk
        .reminder
        .get(notification_id.clone())
        .await
        .unwrap()
        .reminder;
    assert_eq!(reminder.notification_id, notification_id);
    assert_eq!(reminder.class_id, class.id);
    assert_eq!(reminder.title, "Serve practice");
    assert!(!reminder.already_responded);
    assert!(reminder.previous_response.is_none());

    let res = member_sdk
        .reminder
        .respond(RespondToReminderInput {
            notification_id: notification_id.clone(),
            response: "skip".into(),
        })
        .await
        .unwrap();
    assert!(res.success);
    assert_eq!(res.response, ResponseValue::Skip);
    assert_eq!(res.club_notified, Some(true));
    assert_eq!(app.club.notices().len(), 1);
    assert_eq!(app.club.notices()[0].member_email, "ada@example.com");
    assert_eq!(app.club.notices()[0].class_title, "Serve practice");

    let reminder = member_sdk
        .reminder
        .get(notification_id.clone())
        .await
        .unwrap()
        .reminder;
    assert!(reminder.already_responded);
    assert_eq!(reminder.previous_response, Some(ResponseValue::Skip));
    assert!(reminder.responded_at.is_some());

    let res = member_sdk
        .reminder
        .respond(RespondToReminderInput {
            notification_id,
            response: "attend".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(res.status, Some(StatusCode::CONFLICT));
}

#[actix_web::main]
#[test]
async fn test_reminders_are_private_to_their_owner() {
    let (app, sdk, _) = spawn_app().await;
    let (owner, member_sdk) = app.member("Ada").await;
    let (_, other_sdk) = app.member("Eve").await;
    app.weekly_class(&owner, "Serve practice", 3).await;
    member_sdk
        .push
        .subscribe(subscription("https://push.example.com/ada"))
        .await
        .unwrap();
    app.admin_sdk().reminder.trigger().await.unwrap();
    let notification_id = last_notification_id(&app);

    let res = other_sdk
        .reminder
        .get(notification_id.clone())
        .await
        .unwrap_err();
    assert_eq!(res.status, Some(StatusCode::FORBIDDEN));
    let res = other_sdk
        .reminder
        .respond(RespondToReminderInput {
            notification_id: notification_id.clone(),
            response: "skip".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(res.status, Some(StatusCode::FORBIDDEN));

    let res = sdk.reminder.get(notification_id).await.unwrap_err();
    assert_eq!(res.status, Some(StatusCode::UNAUTHORIZED));

    let res = member_sdk.reminder.get(ID::default()).await.unwrap_err();
    assert_eq!(res.status, Some(StatusCode::NOT_FOUND));
}

#[actix_web::main]
#[test]
async fn test_invalid_responses_are_rejected() {
    let (app, _, _) = spawn_app().await;
    let (owner, member_sdk) = app.member("Ada").await;
    app.weekly_class(&owner, "Serve practice", 3).await;
    member_sdk
        .push
        .subscribe(subscription("https://push.example.com/ada"))
        .await
        .unwrap();
    app.admin_sdk().reminder.trigger().await.unwrap();
    let notification_id = last_notification_id(&app);

    let res = member_sdk
        .reminder
        .respond(RespondToReminderInput {
            notification_id: notification_id.clone(),
            response: "maybe".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(res.status, Some(StatusCode::BAD_REQUEST));

    let reminder = member_sdk.reminder.get(notification_id).await.unwrap();
    assert!(!reminder.reminder.already_responded);
}

#[actix_web::main]
#[test]
async fn test_club_failure_is_a_soft_failure() {
    let (app, _, _) = spawn_app().await;
    app.club.fail_with("Club notifications not configured");
    let (owner, member_sdk) = app.member("Ada").await;
    app.weekly_class(&owner, "Serve practice", 3).await;
    member_sdk
        .push
        .subscribe(subscription("https://push.example.com/ada"))
        .await
        .unwrap();
    app.admin_sdk().reminder.trigger().await.unwrap();
    let notification_id = last_notification_id(&app);

    let res = member_sdk
        .reminder
        .respond(RespondToReminderInput {
            notification_id: notification_id.clone(),
            response: "skip".into(),
        })
        .await
        .unwrap();
    assert!(res.success);
    assert_eq!(res.response, ResponseValue::Skip);
    assert_eq!(res.club_notified, Some(false));
    assert_eq!(
        res.club_notification_error,
        Some("Club notifications not configured".into())
    );

    let reminder = member_sdk.reminder.get(notification_id).await.unwrap();
    assert!(reminder.reminder.already_responded);
}

#[actix_web::main]
#[test]
async fn test_gone_subscriptions_are_removed_during_run() {
    let (app, _, _) = spawn_app().await;
    let (owner, member_sdk) = app.member("Ada").await;
    app.weekly_class(&owner, "Serve practice", 3).await;
    member_sdk
        .push
        .subscribe(subscription("https://push.example.com/gone"))
        .await
        .unwrap();
    app.push
        .set_outcome("https://push.example.com/gone", DeliveryOutcome::Gone);

    let res = app.admin_sdk().reminder.trigger().await.unwrap();
    assert_eq!(res.summary.dispatched, 1);
    assert_eq!(res.summary.gone, 1);
    assert!(!member_sdk.push.status().await.unwrap().subscribed);
}

#[actix_web::main]
#[test]
async fn test_push_subscription_management() {
    let (app, sdk, _) = spawn_app().await;
    let (_, member_sdk) = app.member("Ada").await;

    assert!(sdk.push.status().await.is_err());
    assert!(!member_sdk.push.status().await.unwrap().subscribed);

    let res = member_sdk
        .push
        .subscribe(subscription("not a url"))
        .await
        .unwrap_err();
    assert_eq!(res.status, Some(StatusCode::BAD_REQUEST));

    member_sdk
        .push
        .subscribe(subscription("https://push.example.com/ada"))
        .await
        .unwrap();
    assert!(member_sdk.push.status().await.unwrap().subscribed);

    let res = member_sdk.push.send_test().await.unwrap();
    assert!(res.success);
    assert_eq!(app.push.sent().len(), 1);
    assert_eq!(app.push.sent()[0].message.url(), "/dashboard");

    assert!(member_sdk.push.unsubscribe().await.unwrap().success);
    assert!(!member_sdk.push.status().await.unwrap().subscribed);

    let res = member_sdk.push.send_test().await.unwrap_err();
    assert_eq!(res.status, Some(StatusCode::BAD_REQUEST));

    assert_eq!(
        member_sdk.push.vapid_public_key().await.unwrap().public_key,
        app.config.vapid.as_ref().map(|v| v.public_key.clone())
    );
}
