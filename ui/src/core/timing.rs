//! Timer helpers shared by the web and native builds.

/// Delay before the survey form resets, so the feedback modal's close
/// animation can finish first.
pub const RESET_DELAY_MS: u64 = 300;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Current calendar date in UTC, used as the end of dashboard windows.
pub fn today_utc() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}
