use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tt_reminders_domain::{
    ClassRecord, ClassType, Notification, PushKeys, PushSubscription, Recurrence, User, ID,
};
use tt_reminders_infra::{
    FixedSys, IClassRepo, INotificationRepo, IPushSubscriptionRepo, InMemoryClubNotifier,
    InMemoryPushTransport, InsertError, Services, TtContext,
};

/// Wednesday 2024-05-01 10:00 UTC
pub const WEDNESDAY_MORNING: i64 = 1714557600000;

pub struct TestContext {
    pub ctx: TtContext,
    pub sys: Arc<FixedSys>,
    pub push: Arc<InMemoryPushTransport>,
    pub club: Arc<InMemoryClubNotifier>,
}

pub fn setup() -> TestContext {
    let sys = Arc::new(FixedSys::new(WEDNESDAY_MORNING));
    let push = Arc::new(InMemoryPushTransport::new());
    let club = Arc::new(InMemoryClubNotifier::new());
    let ctx = TtContext {
        sys: sys.clone(),
        services: Services {
            push: push.clone(),
            club: club.clone(),
        },
        ..TtContext::create_inmemory()
    };

    TestContext {
        ctx,
        sys,
        push,
        club,
    }
}

pub async fn insert_member(ctx: &TtContext, name: &str) -> User {
    let user = User::new(name.into(), format!("{}@example.com", name.to_lowercase()));
    ctx.repos.users.insert(&user).await.unwrap();
    user
}

pub async fn insert_weekly_class(ctx: &TtContext, owner: &User, weekday: u32) -> ClassRecord {
    let class = ClassRecord::new(
        owner.id.clone(),
        "Backhand drills".into(),
        ClassType::Group,
        Recurrence::weekly(weekday, NaiveTime::from_hms_opt(18, 0, 0).unwrap()).unwrap(),
    );
    ctx.repos.classes.insert(&class).await.unwrap();
    class
}

pub async fn insert_subscription(
    ctx: &TtContext,
    user_id: &ID,
    endpoint: &str,
) -> PushSubscription {
    let subscription = PushSubscription::new(
        user_id.clone(),
        endpoint.into(),
        PushKeys {
            p256dh: "p256dh".into(),
            auth: "auth".into(),
        },
    )
    .unwrap();
    ctx.repos.push_subscriptions.replace(&subscription).await.unwrap();
    subscription
}

fn connection_refused() -> anyhow::Error {
    anyhow::anyhow!("Connection refused")
}

/// A store that cannot be reached
pub struct UnreachableRepo {}

#[async_trait::async_trait]
impl IClassRepo for UnreachableRepo {
    async fn insert(&self, _: &ClassRecord) -> anyhow::Result<()> {
        Err(connection_refused())
    }

    async fn save(&self, _: &ClassRecord) -> anyhow::Result<()> {
        Err(connection_refused())
    }

    async fn find(&self, _: &ID) -> Option<ClassRecord> {
        None
    }

    async fn find_due(&self, _: NaiveDate, _: u32) -> anyhow::Result<Vec<ClassRecord>> {
        Err(connection_refused())
    }
}

#[async_trait::async_trait]
impl IPushSubscriptionRepo for UnreachableRepo {
    async fn replace(&self, _: &PushSubscription) -> anyhow::Result<()> {
        Err(connection_refused())
    }

    async fn find_by_user(&self, _: &ID) -> anyhow::Result<Option<PushSubscription>> {
        Err(connection_refused())
    }

    async fn delete(&self, _: &ID) -> Option<PushSubscription> {
        None
    }

    async fn delete_by_user(&self, _: &ID) -> Option<PushSubscription> {
        None
    }
}

/// Fails to record notifications about `broken_class` and passes
/// everything else on to `inner`
pub struct BrokenNotificationRepo {
    pub inner: Arc<dyn INotificationRepo>,
    pub broken_class: ID,
}

#[async_trait::async_trait]
impl INotificationRepo for BrokenNotificationRepo {
    async fn insert(&self, notification: &Notification) -> Result<(), InsertError> {
        if notification.class_id == self.broken_class {
            return Err(InsertError::Storage(connection_refused()));
        }
        self.inner.insert(notification).await
    }

    async fn find(&self, notification_id: &ID) -> Option<Notification> {
        self.inner.find(notification_id).await
    }

    async fn find_by_class(&self, class_id: &ID) -> Vec<Notification> {
        self.inner.find_by_class(class_id).await
    }
}
