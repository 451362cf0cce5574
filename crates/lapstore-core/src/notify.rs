/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// User-visible notification capability handed to page controllers.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.notify(NoticeLevel::Warning, message);
    }
}

/// Sends notices to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Error => tracing::error!(notice = message, "user notice"),
            NoticeLevel::Warning => tracing::warn!(notice = message, "user notice"),
            NoticeLevel::Success | NoticeLevel::Info => {
                tracing::info!(notice = message, level = ?level, "user notice");
            }
        }
    }
}
