use metrics::counter;

/// Metrics collector for remote config sync
#[derive(Clone)]
pub struct RemoteConfigMetrics {
    prefix: &'static str,
}

impl RemoteConfigMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "ap_remote_config",
        }
    }

    pub fn attempt(&self) {
        counter!(format!("{}.sync.attempts", self.prefix)).increment(1);
    }

    pub fn conflict(&self) {
        counter!(format!("{}.sync.conflicts", self.prefix)).increment(1);
    }

    pub fn server_error(&self) {
        counter!(format!("{}.sync.server_errors", self.prefix)).increment(1);
    }

    /// `success`, `validation`, `auth`, `conflict`, `server` or `remote`.
    pub fn outcome(&self, outcome: &str) {
        counter!(format!("{}.sync.outcome.{}", self.prefix, outcome)).increment(1);
    }
}

impl Default for RemoteConfigMetrics {
    fn default() -> Self {
        Self::new()
    }
}
