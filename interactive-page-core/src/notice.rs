//! Transient notices with scheduled removal
//!
//! Each notice is removed independently once its deadline has passed.
//! Removals are never cancelled or rescheduled, and removing a notice that is
//! already gone does nothing.

use std::time::{Duration, Instant};

/// How long a notice stays visible
pub const NOTICE_LIFETIME: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub text: String,
    pub remove_at: Instant,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn contains(&self, id: NoticeId) -> bool {
        self.notices.iter().any(|n| n.id == id)
    }

    /// Append a notice and schedule its removal `NOTICE_LIFETIME` after `now`.
    pub fn post(&mut self, kind: NoticeKind, text: impl Into<String>, now: Instant) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            text: text.into(),
            remove_at: now + NOTICE_LIFETIME,
        });
        id
    }

    /// Remove one notice. Does nothing if it is already gone.
    pub fn remove(&mut self, id: NoticeId) {
        self.notices.retain(|n| n.id != id);
    }

    /// Run every removal whose time has come. Returns how many fired.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| n.remove_at > now);
        let removed = before - self.notices.len();
        if removed > 0 {
            log::debug!("removed {removed} expired notice(s)");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_stays_until_deadline() {
        let start = Instant::now();
        let mut board = NoticeBoard::new();
        let id = board.post(NoticeKind::Success, "done", start);

        assert_eq!(board.expire(start + Duration::from_millis(2999)), 0);
        assert!(board.contains(id));

        assert_eq!(board.expire(start + NOTICE_LIFETIME), 1);
        assert!(board.is_empty());
    }

    #[test]
    fn test_overlapping_notices_expire_independently() {
        let start = Instant::now();
        let mut board = NoticeBoard::new();
        let first = board.post(NoticeKind::Success, "one", start);
        let second = board.post(NoticeKind::Success, "two", start + Duration::from_millis(1000));
        assert_ne!(first, second);

        board.expire(start + Duration::from_millis(3500));
        assert!(!board.contains(first));
        assert!(board.contains(second));

        board.expire(start + Duration::from_millis(4000));
        assert!(board.is_empty());
    }

    #[test]
    fn test_removing_twice_is_harmless() {
        let start = Instant::now();
        let mut board = NoticeBoard::new();
        let id = board.post(NoticeKind::Success, "x", start);
        board.remove(id);
        board.remove(id);
        assert!(board.is_empty());
        assert_eq!(board.expire(start + NOTICE_LIFETIME), 0);
    }
}
