use std::time::Duration;

/// Artificial network latency applied by the mock services.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    scale: f64,
}

impl Default for Latency {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Latency {
    pub fn scaled(scale: f64) -> Self {
        Self {
            scale: if scale.is_finite() { scale.max(0.0) } else { 1.0 },
        }
    }

    pub fn none() -> Self {
        Self { scale: 0.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn delay(&self, millis: u64) -> Duration {
        Duration::from_millis((millis as f64 * self.scale).round() as u64)
    }

    pub async fn wait(&self, millis: u64) {
        let delay = self.delay(millis);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
