//! Real-time clock shown on the home screen.
//!
//! A background task ticks a [`watch`] channel in the configured zone
//! (Western Indonesia Time by default). The task is aborted when the clock
//! is dropped.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use edupro_config::ClockConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

pub struct RealTimeClock {
    rx: watch::Receiver<DateTime<FixedOffset>>,
    task: JoinHandle<()>,
    zone_label: String,
}

impl RealTimeClock {
    /// Start ticking. Must be called inside a Tokio runtime.
    pub fn start(config: &ClockConfig) -> Self {
        let offset = zone_offset(config.utc_offset_hours);
        let (tx, rx) = watch::channel(Utc::now().with_timezone(&offset));
        let tick = config.tick;

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(Utc::now().with_timezone(&offset)).is_err() {
                    break;
                }
            }
        });

        debug!(tick_ms = tick.as_millis() as u64, offset = %offset, "Clock started");

        Self {
            rx,
            task,
            zone_label: config.zone_label.clone(),
        }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<DateTime<FixedOffset>> {
        self.rx.clone()
    }

    pub fn zone_label(&self) -> &str {
        &self.zone_label
    }

    pub fn time_text(&self) -> String {
        format_time(&self.now())
    }

    pub fn date_text(&self) -> String {
        format_date(&self.now())
    }
}

impl Drop for RealTimeClock {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn zone_offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| {
        warn!(hours, "Invalid UTC offset, using UTC");
        Utc.fix()
    })
}

/// `07:05:09`
pub fn format_time<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M:%S").to_string()
}

/// `Monday, October 7, 2024`
pub fn format_date<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %B %-d, %Y").to_string()
}
