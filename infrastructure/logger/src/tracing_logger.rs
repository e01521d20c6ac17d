use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Dashboard -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Dashboard -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Dashboard -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Dashboard -- ", "{}", message);
    }
}
