//! Async auto-advance driver.
//!
//! Owns the shared transport and the one timer task that advances it while
//! auto-play is on. The task re-reads the delay on every tick, so speed
//! changes apply at the next step, and it exits on its own the moment play
//! stops. The driver aborts the task on toggle-off, on load, and on drop:
//! a stale timer must never advance a cursor against a replaced log.

use crate::transport::Playback;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Driver wrapping a shared [`Playback`] with an auto-advance timer
pub struct PlaybackDriver {
    shared: Arc<RwLock<Playback>>,
    ticker: Option<JoinHandle<()>>,
}

impl PlaybackDriver {
    /// Create a driver with an idle transport
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(RwLock::new(Playback::new())),
            ticker: None,
        }
    }

    /// Handle to the shared transport state
    #[must_use]
    pub fn shared(&self) -> Arc<RwLock<Playback>> {
        Arc::clone(&self.shared)
    }

    /// Snapshot of the current transport state
    pub async fn snapshot(&self) -> Playback {
        *self.shared.read().await
    }

    /// Attach a new log: cancels the timer, resets cursor and play state
    pub async fn load(&mut self, len: usize) {
        self.cancel_ticker();
        self.shared.write().await.load(len);
    }

    /// Advance one step manually
    pub async fn step_forward(&self) {
        self.shared.write().await.step_forward();
    }

    /// Retreat one step manually
    pub async fn step_backward(&self) {
        self.shared.write().await.step_backward();
    }

    /// Seek to a clamped position
    pub async fn seek(&self, position: i64) {
        self.shared.write().await.seek(position);
    }

    /// Change the speed multiplier; applies from the next tick
    pub async fn set_speed(&self, speed: f64) {
        self.shared.write().await.set_speed(speed);
    }

    /// Flip auto-play, starting or cancelling the timer task
    pub async fn toggle_play(&mut self) {
        let playing = {
            let mut playback = self.shared.write().await;
            playback.toggle_play();
            playback.is_playing()
        };
        if playing {
            self.spawn_ticker();
        } else {
            self.cancel_ticker();
        }
    }

    fn spawn_ticker(&mut self) {
        self.cancel_ticker();
        let shared = Arc::clone(&self.shared);
        tracing::debug!("starting auto-advance");
        self.ticker = Some(tokio::spawn(async move {
            loop {
                let delay = {
                    let playback = shared.read().await;
                    if !playback.is_playing() {
                        break;
                    }
                    playback.delay()
                };
                tokio::time::sleep(delay).await;
                let mut playback = shared.write().await;
                if !playback.is_playing() {
                    break;
                }
                playback.step_forward();
                if !playback.is_playing() {
                    // Reached the end; the transport switched itself off.
                    break;
                }
            }
        }));
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            tracing::debug!("stopping auto-advance");
            handle.abort();
        }
    }
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_driver_manual_transport() {
        let mut driver = PlaybackDriver::new();
        driver.load(3).await;
        driver.step_forward().await;
        driver.step_forward().await;
        assert_eq!(driver.snapshot().await.cursor().position(), 1);
        driver.step_backward().await;
        assert_eq!(driver.snapshot().await.cursor().position(), 0);
        driver.seek(99).await;
        assert_eq!(driver.snapshot().await.cursor().position(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_runs_to_end_and_stops() {
        let mut driver = PlaybackDriver::new();
        driver.load(3).await;
        driver.toggle_play().await;
        assert!(driver.snapshot().await.is_playing());

        // Paused tokio time auto-advances past the sleeps.
        tokio::time::sleep(Duration::from_secs(5)).await;

        let playback = driver.snapshot().await;
        assert_eq!(playback.cursor().position(), 2);
        assert!(playback.is_finished());
        assert!(!playback.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_off_cancels_timer() {
        let mut driver = PlaybackDriver::new();
        driver.load(100).await;
        driver.toggle_play().await;
        tokio::time::sleep(Duration::from_millis(1100)).await;
        driver.toggle_play().await;
        let position = driver.snapshot().await.cursor().position();
        assert!(position >= 1);
        assert!(!driver.snapshot().await.is_playing());

        // No further movement after toggle-off.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(driver.snapshot().await.cursor().position(), position);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_cancels_timer_and_resets() {
        let mut driver = PlaybackDriver::new();
        driver.load(50).await;
        driver.toggle_play().await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        driver.load(10).await;

        let playback = driver.snapshot().await;
        assert_eq!(playback.cursor().position(), -1);
        assert!(!playback.is_playing());

        // The old timer must not touch the new log.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(driver.snapshot().await.cursor().position(), -1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_speed_changes_apply_next_tick() {
        let mut driver = PlaybackDriver::new();
        driver.load(1000).await;
        driver.set_speed(2.0).await;
        driver.toggle_play().await;
        tokio::time::sleep(Duration::from_millis(2500)).await;
        let position = driver.snapshot().await.cursor().position();
        // 250ms per step at speed 2.
        assert!(position >= 9);
        driver.toggle_play().await;
    }
}
