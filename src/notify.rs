//! Notification surface consumed by the admin core.
//!
//! Notifications are fire-and-forget: the core never inspects what a
//! [`Notifier`] did with them.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: &str, message: &str) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn success(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Success, title, message));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Error, title, message));
    }

    fn info(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Info, title, message));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Warning, title, message));
    }
}

/// Prints success/info to stdout and error/warning to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => {
                println!("{}: {}", notice.title, notice.message)
            }
            NoticeLevel::Error | NoticeLevel::Warning => {
                eprintln!("{}: {}", notice.title, notice.message)
            }
        }
    }
}

/// Keeps every notice in arrival order.
#[derive(Clone, Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(|n| n.level == NoticeLevel::Error)
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}
