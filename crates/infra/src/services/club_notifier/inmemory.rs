use super::{IClubNotifier, SkipNotice};
use std::{sync::Mutex, time::Duration};

/// Records every notice. When a failure is set every call fails with it.
/// A delay holds every call back before it is recorded.
pub struct InMemoryClubNotifier {
    notices: Mutex<Vec<SkipNotice>>,
    failure: Mutex<Option<String>>,
    delay: Mutex<Option<Duration>>,
}

impl InMemoryClubNotifier {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(vec![]),
            failure: Mutex::new(None),
            delay: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_string());
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn notices(&self) -> Vec<SkipNotice> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IClubNotifier for InMemoryClubNotifier {
    async fn notify_skip(&self, notice: &SkipNotice) -> anyhow::Result<()> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.notices.lock().unwrap().push(notice.clone());
        match self.failure.lock().unwrap().clone() {
            Some(reason) => Err(anyhow::anyhow!(reason)),
            None => Ok(()),
        }
    }
}
