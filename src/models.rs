use serde::{Deserialize, Serialize};

/// An enrolled subject as returned by `GET /subjects`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub category: String,
    pub lecture_hours: u32,
    pub tutorial_hours: u32,
    pub practical_hours: u32,
    pub evaluation_pattern: String,
}

/// Announcement priority
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

/// A campus-wide announcement shown on the dashboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub priority: Priority,
    /// ISO timestamp, formatted for display by the UI layer
    pub created_at: String,
}

/// Aggregate counters on the dashboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    pub pending_assignments: u32,
    pub upcoming_quizzes: u32,
    pub fee_due: i64,
    #[serde(default)]
    pub unread_notifications: u32,
}

/// Response body of `GET /dashboard`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// A library book as returned by `GET /library/books`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub available_copies: u32,
    pub total_copies: u32,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// Issue status of a borrowed book
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Issued,
    Overdue,
    Returned,
}

impl IssueStatus {
    pub fn label(&self) -> &str {
        match self {
            IssueStatus::Issued => "Issued",
            IssueStatus::Overdue => "Overdue",
            IssueStatus::Returned => "Returned",
        }
    }
}

/// An issue record from `GET /library/issued`, with the book populated
/// server-side (may be null if the book record has been removed)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssuedBook {
    #[serde(rename = "_id")]
    pub id: String,
    pub book: Option<Book>,
    pub status: IssueStatus,
    pub issue_date: String,
    pub due_date: String,
    #[serde(default)]
    pub fine_amount: i64,
}

/// The authenticated student, fetched from `GET /auth/me` at startup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub roll_no: String,
    pub program: String,
    pub year: u32,
    pub semester: u32,
    pub section: String,
}

impl User {
    /// First letter of the name, used for the avatar block
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_decodes_backend_shape() {
        let json = r#"{
            "_id": "65f0a1",
            "code": "19CSE301",
            "name": "Machine Learning",
            "credits": 4,
            "category": "Core",
            "lecture_hours": 3,
            "tutorial_hours": 0,
            "practical_hours": 2,
            "evaluation_pattern": "Internal 50 / External 50",
            "year": 3,
            "semester": 6
        }"#;
        let s: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, "65f0a1");
        assert_eq!(s.code, "19CSE301");
        assert_eq!(s.credits, 4);
    }

    #[test]
    fn test_dashboard_decodes_with_missing_optionals() {
        let json = r#"{
            "stats": {
                "pending_assignments": 2,
                "upcoming_quizzes": 1,
                "fee_due": 500
            }
        }"#;
        let d: DashboardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(d.stats.fee_due, 500);
        assert_eq!(d.stats.unread_notifications, 0);
        assert!(d.announcements.is_empty());
    }

    #[test]
    fn test_announcement_priority_defaults_to_normal() {
        let json = r#"{
            "title": "Holiday",
            "message": "Campus closed Friday",
            "created_at": "2025-01-10T08:00:00"
        }"#;
        let a: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(a.priority, Priority::Normal);
    }

    #[test]
    fn test_issued_book_with_null_book() {
        let json = r#"{
            "_id": "i1",
            "book": null,
            "status": "overdue",
            "issue_date": "2025-01-01T00:00:00",
            "due_date": "2025-01-15T00:00:00",
            "fine_amount": 50
        }"#;
        let i: IssuedBook = serde_json::from_str(json).unwrap();
        assert!(i.book.is_none());
        assert_eq!(i.status, IssueStatus::Overdue);
        assert_eq!(i.fine_amount, 50);
    }

    #[test]
    fn test_issue_status_rejects_unknown_value() {
        let r = serde_json::from_str::<IssueStatus>("\"lost\"");
        assert!(r.is_err());
    }

    #[test]
    fn test_user_initial() {
        let u = User {
            id: "u1".into(),
            name: "arjun".into(),
            email: "a@example.edu".into(),
            roll_no: "CSE123".into(),
            program: "B.Tech CSE".into(),
            year: 3,
            semester: 6,
            section: "A".into(),
        };
        assert_eq!(u.initial(), 'A');
    }
}
