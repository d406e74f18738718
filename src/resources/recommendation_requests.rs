use serde_json::{Map, Value, json};

use super::{Identity, RecommendationRequest, Resource, field_map};
use crate::table::Column;

impl Resource for RecommendationRequest {
    const NAME: &'static str = "RecommendationRequest";
    const ENDPOINT: &'static str = "/api/recommendationRequests";
    const INDEX_ROUTE: &'static str = "/recommendationRequests";

    fn identity(&self) -> Identity {
        Identity::Id(self.id)
    }

    fn fields(&self) -> Map<String, Value> {
        field_map([
            ("requesterEmail", json!(self.requester_email)),
            ("professorEmail", json!(self.professor_email)),
            ("explanation", json!(self.explanation)),
            ("dateRequested", json!(self.date_requested)),
            ("dateNeeded", json!(self.date_needed)),
            ("done", json!(self.done)),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::field("id", "id"),
            Column::field("Requester Email", "requesterEmail"),
            Column::field("Professor Email", "professorEmail"),
            Column::field("Explanation", "explanation"),
            Column::field("Date Requested", "dateRequested"),
            Column::field("Date Needed", "dateNeeded"),
            Column::yes_no("Done", "done"),
        ]
    }

    fn created_message(&self) -> String {
        format!(
            "New recommendation request Created - id: {} requester email: {}",
            self.identity(),
            self.requester_email
        )
    }

    fn updated_message(&self) -> String {
        format!(
            "Recommendation request Updated - id: {} requester email: {}",
            self.identity(),
            self.requester_email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params_and_message() {
        let request = RecommendationRequest {
            id: Some(1),
            requester_email: "bob_gaucho@ucsb.edu".into(),
            professor_email: "pconrad@ucsb.edu".into(),
            explanation: "grad school".into(),
            date_requested: Some("2022-02-02T00:00".into()),
            date_needed: Some("2022-03-02T00:00".into()),
            done: false,
        };
        let descriptor = request.create_request();
        assert_eq!(descriptor.url, "/api/recommendationRequests/post");
        assert_eq!(descriptor.params.len(), 6);
        assert_eq!(descriptor.params["professorEmail"], "pconrad@ucsb.edu");
        assert_eq!(
            request.created_message(),
            "New recommendation request Created - id: 1 requester email: bob_gaucho@ucsb.edu"
        );
    }
}
