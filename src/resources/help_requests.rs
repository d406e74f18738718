use serde_json::{Map, Value, json};

use super::{HelpRequest, Identity, Resource, field_map};
use crate::table::Column;

impl Resource for HelpRequest {
    const NAME: &'static str = "HelpRequest";
    const ENDPOINT: &'static str = "/api/helprequests";
    const INDEX_ROUTE: &'static str = "/helprequests";

    fn identity(&self) -> Identity {
        Identity::Id(self.id)
    }

    fn fields(&self) -> Map<String, Value> {
        field_map([
            ("requesterEmail", json!(self.requester_email)),
            ("teamId", json!(self.team_id)),
            ("tableOrBreakoutRoom", json!(self.table_or_breakout_room)),
            ("explanation", json!(self.explanation)),
            ("solved", json!(self.solved)),
            ("requestTime", json!(self.request_time)),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::field("id", "id"),
            Column::field("Email", "requesterEmail"),
            Column::field("Request Time", "requestTime"),
            Column::field("Team", "teamId"),
            Column::field("Table or Breakout Room", "tableOrBreakoutRoom"),
            Column::field("Explanation", "explanation"),
            Column::yes_no("Solved", "solved"),
        ]
    }

    fn created_message(&self) -> String {
        format!(
            "New HelpRequest Created - id: {} requesterEmail: {}",
            self.identity(),
            self.requester_email
        )
    }

    fn updated_message(&self) -> String {
        format!(
            "HelpRequest Updated - id: {} requesterEmail: {}",
            self.identity(),
            self.requester_email
        )
    }
}
