use async_trait::async_trait;
use crashlens::Timer;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// `setTimeout`-backed clock for the browser event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        // setTimeout takes a u32 of milliseconds
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
