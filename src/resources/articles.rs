use serde_json::{Map, Value, json};

use super::{Article, Identity, Resource, field_map};
use crate::table::Column;

impl Resource for Article {
    const NAME: &'static str = "Article";
    const ENDPOINT: &'static str = "/api/articles";
    const INDEX_ROUTE: &'static str = "/articles";

    fn identity(&self) -> Identity {
        Identity::Id(self.id)
    }

    fn fields(&self) -> Map<String, Value> {
        field_map([
            ("title", json!(self.title)),
            ("url", json!(self.url)),
            ("explanation", json!(self.explanation)),
            ("email", json!(self.email)),
            ("dateAdded", json!(self.date_added)),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::field("id", "id"),
            Column::field("Title", "title"),
            Column::field("Url", "url"),
            Column::field("Explanation", "explanation"),
            Column::field("Email", "email"),
            Column::field("Date Added", "dateAdded"),
        ]
    }

    fn created_message(&self) -> String {
        format!("New article Created - id: {} title: {}", self.identity(), self.title)
    }

    fn updated_message(&self) -> String {
        format!("Article Updated - id: {} title: {}", self.identity(), self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_message_uses_server_id() {
        let article = Article {
            id: Some(1),
            title: "First Article".into(),
            url: "https://www.nytimes.com/".into(),
            explanation: "The first article.".into(),
            email: "yibinjiang@ucsb.edu".into(),
            date_added: Some("2025-11-03T19:52".into()),
        };
        assert_eq!(
            article.created_message(),
            "New article Created - id: 1 title: First Article"
        );
    }
}
