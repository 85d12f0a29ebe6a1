use chrono::NaiveTime;
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;
use tt_reminders_api::{Application, Claims};
use tt_reminders_domain::{ClassRecord, ClassType, Recurrence, User};
use tt_reminders_infra::{
    Config, FixedSys, InMemoryClubNotifier, InMemoryPushTransport, Services, TtContext,
};
use tt_reminders_sdk::TtRemindersSDK;

/// Wednesday 2024-05-01 10:00 UTC
pub const WEDNESDAY_MORNING: i64 = 1714557600000;

pub struct TestApp {
    pub config: Config,
    pub ctx: TtContext,
    pub sys: Arc<FixedSys>,
    pub push: Arc<InMemoryPushTransport>,
    pub club: Arc<InMemoryClubNotifier>,
    pub address: String,
}

impl TestApp {
    pub fn admin_sdk(&self) -> TtRemindersSDK {
        TtRemindersSDK::with_admin_secret(self.address.clone(), &self.config.admin_secret)
    }

    /// Creates a member and a client authenticated as that member
    pub async fn member(&self, name: &str) -> (User, TtRemindersSDK) {
        let user = User::new(name.into(), format!("{}@example.com", name.to_lowercase()));
        self.ctx.repos.users.insert(&user).await.unwrap();

        let claims = Claims {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            // Far in the future
            exp: 4_102_444_800,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .unwrap();

        (user, TtRemindersSDK::with_user_token(self.address.clone(), token))
    }

    pub async fn weekly_class(&self, owner: &User, title: &str, weekday: u32) -> ClassRecord {
        let class = ClassRecord::new(
            owner.id.clone(),
            title.into(),
            ClassType::OneOnOne,
            Recurrence::weekly(weekday, NaiveTime::from_hms_opt(18, 30, 0).unwrap()).unwrap(),
        );
        self.ctx.repos.classes.insert(&class).await.unwrap();
        class
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, TtRemindersSDK, String) {
    let sys = Arc::new(FixedSys::new(WEDNESDAY_MORNING));
    let push = Arc::new(InMemoryPushTransport::new());
    let club = Arc::new(InMemoryClubNotifier::new());
    let mut ctx = TtContext {
        sys: sys.clone(),
        services: Services {
            push: push.clone(),
            club: club.clone(),
        },
        ..TtContext::create_inmemory()
    };
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        ctx,
        sys,
        push,
        club,
        address: address.clone(),
    };
    let sdk = TtRemindersSDK::new(address.clone());
    (app, sdk, address)
}
