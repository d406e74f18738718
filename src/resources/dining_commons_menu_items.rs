use serde_json::{Map, Value, json};

use super::{Identity, Resource, UcsbDiningCommonsMenuItem, field_map};
use crate::table::Column;

impl Resource for UcsbDiningCommonsMenuItem {
    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const ENDPOINT: &'static str = "/api/ucsbdiningcommonsmenuitem";
    const INDEX_ROUTE: &'static str = "/ucsbdiningcommonsmenuitem";

    fn identity(&self) -> Identity {
        Identity::Id(self.id)
    }

    fn fields(&self) -> Map<String, Value> {
        field_map([
            ("diningCommonsCode", json!(self.dining_commons_code)),
            ("name", json!(self.name)),
            ("station", json!(self.station)),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::field("id", "id"),
            Column::field("Dining Commons Code", "diningCommonsCode"),
            Column::field("Name", "name"),
            Column::field("Station", "station"),
        ]
    }

    fn created_message(&self) -> String {
        format!("New item Created - id: {} name: {}", self.identity(), self.name)
    }

    fn updated_message(&self) -> String {
        format!(
            "ucsbdiningcommonsmenuitem Updated - id: {} name: {}",
            self.identity(),
            self.name
        )
    }
}
