use serde_json::{Map, Value, json};

use super::{Identity, MenuItemReview, Resource, field_map};
use crate::table::Column;

impl Resource for MenuItemReview {
    const NAME: &'static str = "MenuItemReview";
    const ENDPOINT: &'static str = "/api/menuitemreview";
    const INDEX_ROUTE: &'static str = "/menuitemreview";

    fn identity(&self) -> Identity {
        Identity::Id(self.id)
    }

    fn fields(&self) -> Map<String, Value> {
        field_map([
            ("itemId", json!(self.item_id)),
            ("reviewerEmail", json!(self.reviewer_email)),
            ("stars", json!(self.stars)),
            ("dateReviewed", json!(self.date_reviewed)),
            ("comments", json!(self.comments)),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::field("id", "id"),
            Column::field("Item Id", "itemId"),
            Column::field("Reviewer Email", "reviewerEmail"),
            Column::field("Stars", "stars"),
            Column::field("Date Reviewed", "dateReviewed"),
            Column::field("Comments", "comments"),
        ]
    }

    fn created_message(&self) -> String {
        format!(
            "New menuItemReview Created - id: {} itemId {}",
            self.identity(),
            self.item_id
        )
    }

    fn updated_message(&self) -> String {
        format!(
            "MenuItemReview Updated - id: {} itemId: {}",
            self.identity(),
            self.item_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review() -> MenuItemReview {
        MenuItemReview {
            id: Some(17),
            item_id: 2,
            reviewer_email: "user@ucsb.edu".into(),
            stars: 4,
            date_reviewed: Some("2025-10-26T12:30".into()),
            comments: "it was good".into(),
        }
    }

    #[test]
    fn update_body_excludes_id() {
        let body = review().update_request().body.expect("body");
        assert_eq!(
            body,
            json!({
                "itemId": 2,
                "reviewerEmail": "user@ucsb.edu",
                "stars": 4,
                "dateReviewed": "2025-10-26T12:30",
                "comments": "it was good"
            })
        );
    }

    #[test]
    fn messages() {
        let mut created = review();
        created.id = Some(3);
        assert_eq!(created.created_message(), "New menuItemReview Created - id: 3 itemId 2");
        assert_eq!(review().updated_message(), "MenuItemReview Updated - id: 17 itemId: 2");
    }
}
