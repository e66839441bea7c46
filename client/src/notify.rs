//! User notifications

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Emits notifications as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(kind = "error", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(kind = "info", "{}", message);
    }
}

/// Prints notifications for the `portal` CLI
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("✔ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("✘ {}", message);
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }
}
