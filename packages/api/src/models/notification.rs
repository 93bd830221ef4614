use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// An admin notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub sender_work_id: String,
    #[serde(default)]
    pub sender_name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Timestamp as sent by the backend (RFC 3339 or a zone-less ISO date-time).
    #[serde(default)]
    pub send_time: String,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// `send_time` parsed as UTC.
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(at) = DateTime::parse_from_rfc3339(&self.send_time) {
            return Some(at.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.send_time, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Human-readable send time, falling back to the raw value.
    pub fn sent_label(&self) -> String {
        match self.sent_at() {
            Some(at) => at.format("%b %-d, %Y %H:%M").to_string(),
            None => self.send_time.clone(),
        }
    }
}

/// Body of `GET /admin/notifications`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub unread_count: u32,
}

impl NotificationFeed {
    /// Mark one notification read locally after the backend confirmed it.
    pub fn mark_read(&mut self, id: i64) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id && !n.read) {
            n.read = true;
            self.unread_count = self.unread_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn notification(send_time: &str) -> Notification {
        Notification {
            id: 1,
            title: "Report due".into(),
            message: "Weekly report".into(),
            sender_work_id: "EMP1".into(),
            sender_name: "Ada".into(),
            kind: "REPORT".into(),
            send_time: send_time.into(),
            read: false,
        }
    }

    #[test]
    fn test_send_time_formats() {
        let zoned = notification("2024-05-01T09:30:00Z");
        let naive = notification("2024-05-01T09:30:00.123");
        assert_eq!(zoned.sent_at(), naive.sent_at().map(|t| t.with_nanosecond(0).unwrap()));
        assert_eq!(zoned.sent_label(), "May 1, 2024 09:30");
        assert_eq!(notification("yesterday").sent_label(), "yesterday");
    }

    #[test]
    fn test_mark_read_decrements_once() {
        let mut feed = NotificationFeed {
            notifications: vec![notification("")],
            unread_count: 1,
        };
        feed.mark_read(1);
        feed.mark_read(1);
        assert!(feed.notifications[0].read);
        assert_eq!(feed.unread_count, 0);
    }
}
