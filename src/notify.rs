use std::{
    fmt,
    io::{self, Stdout, Write},
    sync::Mutex,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Success => write!(f, "✅ {}", self.message),
            Severity::Error => write!(f, "🔥 {}", self.message),
        }
    }
}

/// Transient user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes one line per notification, stdout by default.
pub struct ConsoleNotifier<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notification: Notification) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{notification}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_notification_is_written_once() {
        let notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify(Notification::success("created post New"));
        notifier.notify(Notification::error("Failed to delete post:\n Hello"));

        let written = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            written,
            "✅ created post New\n🔥 Failed to delete post:\n Hello\n"
        );
    }
}
