use metrics::counter;

/// Counters for bot activity
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "gitdrop" }
    }

    pub fn event_accepted(&self, kind: &str) {
        counter!(format!("{}.events.accepted", self.prefix)).increment(1);
        counter!(format!("{}.events.accepted.{}", self.prefix, kind)).increment(1);
    }

    pub fn event_dropped(&self, reason: &str) {
        counter!(format!("{}.events.dropped", self.prefix)).increment(1);
        counter!(format!("{}.events.dropped.{}", self.prefix, reason)).increment(1);
    }

    pub fn upload_completed(&self) {
        counter!(format!("{}.workflows.upload.completed", self.prefix)).increment(1);
    }

    pub fn refresh_completed(&self) {
        counter!(format!("{}.workflows.refresh.completed", self.prefix)).increment(1);
    }

    pub fn workflow_failed(&self, workflow: &str) {
        counter!(format!("{}.workflows.{}.failed", self.prefix, workflow)).increment(1);
    }

    pub fn poll_error(&self) {
        counter!(format!("{}.poll.errors", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
