//! Per-entity bindings: endpoints, field selection, routes and messages.
//!
//! Every resource follows the same backend convention:
//!
//! | operation | method | path | identity |
//! |---|---|---|---|
//! | list | `GET` | `<endpoint>/all` | none |
//! | get | `GET` | `<endpoint>` | query param |
//! | create | `POST` | `<endpoint>/post` | assigned by server |
//! | update | `PUT` | `<endpoint>` | query param, fields as JSON body |
//! | delete | `DELETE` | `<endpoint>` | query param |

mod articles;
mod dining_commons_menu_items;
mod help_requests;
mod menu_item_reviews;
mod organizations;
mod recommendation_requests;

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};

use crate::cache::CacheKey;
use crate::request::RequestDescriptor;
use crate::table::Column;

pub use ucsb_admin_api_types::{
    Article, HelpRequest, MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem,
    UcsbOrganization,
};

/// How a record is addressed on update, delete and single-record reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Numeric surrogate key sent as `id`. `None` for records not yet saved.
    Id(Option<i64>),
    /// Natural key, e.g. an organization code sent as `orgCode`.
    Natural { param: &'static str, value: String },
}

impl Identity {
    pub fn id(id: i64) -> Self {
        Self::Id(Some(id))
    }

    pub fn param_name(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Natural { param, .. } => param,
        }
    }

    pub fn param_value(&self) -> Value {
        match self {
            Self::Id(id) => json!(id),
            Self::Natural { value, .. } => json!(value),
        }
    }

    /// Identity as query params, e.g. `{id: 17}`.
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert(self.param_name().to_string(), self.param_value());
        params
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(Some(id)) => write!(f, "{id}"),
            Self::Id(None) => f.write_str("unsaved"),
            Self::Natural { value, .. } => f.write_str(value),
        }
    }
}

/// A backend entity exposed through list/create/edit/delete pages.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Display name used in notifications.
    const NAME: &'static str;
    /// Endpoint base, e.g. `/api/helprequests`.
    const ENDPOINT: &'static str;
    /// Route of the index page the create and edit pages return to.
    const INDEX_ROUTE: &'static str;

    fn identity(&self) -> Identity;

    /// Builds an identity from its textual form as typed by a user.
    fn parse_identity(raw: &str) -> Result<Identity, String> {
        raw.trim()
            .parse::<i64>()
            .map(Identity::id)
            .map_err(|e| format!("`{raw}` is not a numeric id: {e}"))
    }

    /// The writable fields sent to the backend, server-managed `id` excluded.
    /// Fields the record does not carry appear as `null`.
    fn fields(&self) -> Map<String, Value>;

    /// Data columns of the index table, without action buttons.
    fn columns() -> Vec<Column>;

    fn created_message(&self) -> String;

    fn updated_message(&self) -> String;

    fn list_request() -> RequestDescriptor {
        RequestDescriptor::get(format!("{}/all", Self::ENDPOINT))
    }

    fn list_key() -> CacheKey {
        CacheKey::for_request(&Self::list_request())
    }

    fn get_request(identity: &Identity) -> RequestDescriptor {
        RequestDescriptor::get(Self::ENDPOINT).with_params(identity.params())
    }

    fn item_key(identity: &Identity) -> CacheKey {
        CacheKey::for_request(&Self::get_request(identity))
    }

    fn create_request(&self) -> RequestDescriptor {
        RequestDescriptor::post(format!("{}/post", Self::ENDPOINT)).with_params(self.fields())
    }

    fn update_request(&self) -> RequestDescriptor {
        RequestDescriptor::put(Self::ENDPOINT)
            .with_params(self.identity().params())
            .with_body(Value::Object(self.fields()))
    }

    fn delete_request(&self) -> RequestDescriptor {
        Self::delete_request_for(&self.identity())
    }

    fn delete_request_for(identity: &Identity) -> RequestDescriptor {
        RequestDescriptor::delete(Self::ENDPOINT).with_params(identity.params())
    }

    fn edit_route(identity: &Identity) -> String {
        format!("{}/edit/{identity}", Self::INDEX_ROUTE)
    }
}

/// Builds the field map for [`Resource::fields`] from `(name, value)` pairs.
pub(crate) fn field_map<const N: usize>(fields: [(&str, Value); N]) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
