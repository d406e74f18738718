//! Wire types for the UCSB course and club management REST API.
//!
//! Field names follow the backend's camelCase JSON. Timestamps are kept as the
//! ISO-8601 local date-time strings the backend emits (`2025-02-10T15:00:00`);
//! callers that need to validate them do so before building a request.

use serde::{Deserialize, Serialize};

/// A student's request for help during a lab or discussion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(default)]
    pub request_time: Option<String>,
    pub explanation: String,
    pub solved: bool,
}

/// A review of a dining commons menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(default)]
    pub date_reviewed: Option<String>,
    pub comments: String,
}

/// A request for a letter of recommendation from a professor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(default)]
    pub date_requested: Option<String>,
    #[serde(default)]
    pub date_needed: Option<String>,
    pub done: bool,
}

/// A student organization, keyed by its organization code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// An item served at one of the dining commons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

/// A news article shared with the course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(default)]
    pub date_added: Option<String>,
}

/// Generic `{ "message": ... }` body returned by delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Payload of `GET /api/currentUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserProfile,
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

/// A single Spring Security authority, e.g. `ROLE_ADMIN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub authority: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_request_reads_backend_json() {
        let raw = r#"{
            "id": 1,
            "requesterEmail": "student1@ucsb.edu",
            "teamId": "s23-5pm-2",
            "tableOrBreakoutRoom": "Table 7",
            "requestTime": "2025-02-10T15:00:00",
            "explanation": "Need help debugging my Spring Boot controller",
            "solved": false
        }"#;
        let request: HelpRequest = serde_json::from_str(raw).expect("help request");
        assert_eq!(request.id, Some(1));
        assert_eq!(request.table_or_breakout_room, "Table 7");
        assert_eq!(request.request_time.as_deref(), Some("2025-02-10T15:00:00"));
    }

    #[test]
    fn organization_ignores_surrogate_id() {
        let raw = r#"{"id":1,"orgCode":"TT","orgTranslationShort":"Theta Tau","orgTranslation":"Theta Tau Engineering Frat","inactive":false}"#;
        let org: UcsbOrganization = serde_json::from_str(raw).expect("organization");
        assert_eq!(org.org_code, "TT");
    }

    #[test]
    fn unsaved_records_omit_id() {
        let item = UcsbDiningCommonsMenuItem {
            id: None,
            dining_commons_code: "ortega".into(),
            name: "Cheeseburger".into(),
            station: "Grill".into(),
        };
        let value = serde_json::to_value(&item).expect("serialize");
        assert!(value.get("id").is_none());
        assert_eq!(value["diningCommonsCode"], "ortega");
    }

    #[test]
    fn current_user_defaults_missing_roles() {
        let raw = r#"{"user":{"id":1,"email":"phtcon@ucsb.edu"}}"#;
        let current: CurrentUserResponse = serde_json::from_str(raw).expect("current user");
        assert!(current.roles.is_empty());
        assert!(!current.user.admin);
    }
}
