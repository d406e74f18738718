use serde_json::{Map, Value, json};

use super::{Identity, Resource, UcsbOrganization, field_map};
use crate::table::Column;

const ORG_CODE: &str = "orgCode";

impl Resource for UcsbOrganization {
    const NAME: &'static str = "UCSBOrganization";
    const ENDPOINT: &'static str = "/api/ucsborganization";
    const INDEX_ROUTE: &'static str = "/ucsborganization";

    fn identity(&self) -> Identity {
        Identity::Natural {
            param: ORG_CODE,
            value: self.org_code.clone(),
        }
    }

    fn parse_identity(raw: &str) -> Result<Identity, String> {
        let code = raw.trim();
        if code.is_empty() {
            return Err("organization code must not be empty".into());
        }
        Ok(Identity::Natural {
            param: ORG_CODE,
            value: code.to_string(),
        })
    }

    fn fields(&self) -> Map<String, Value> {
        field_map([
            (ORG_CODE, json!(self.org_code)),
            ("orgTranslationShort", json!(self.org_translation_short)),
            ("orgTranslation", json!(self.org_translation)),
            ("inactive", json!(self.inactive)),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::field("orgCode", ORG_CODE),
            Column::field("orgTranslationShort", "orgTranslationShort"),
            Column::field("orgTranslation", "orgTranslation"),
            Column::field("inactive", "inactive"),
        ]
    }

    fn created_message(&self) -> String {
        format!("New UCSBOrganization Created - orgCode: {}", self.org_code)
    }

    fn updated_message(&self) -> String {
        format!("UCSBOrganization Updated - orgCode: {}", self.org_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> UcsbOrganization {
        UcsbOrganization {
            org_code: "DSC".into(),
            org_translation_short: "Data Science Organization".into(),
            org_translation: "Data Science Organization at UCSB".into(),
            inactive: false,
        }
    }

    #[test]
    fn update_routes_by_natural_key() {
        let descriptor = org().update_request();
        assert_eq!(descriptor.params, field_map([(ORG_CODE, json!("DSC"))]));
        assert_eq!(
            descriptor.body,
            Some(json!({
                "orgCode": "DSC",
                "orgTranslationShort": "Data Science Organization",
                "orgTranslation": "Data Science Organization at UCSB",
                "inactive": false
            }))
        );
    }

    #[test]
    fn parse_identity_uses_org_code() {
        let identity = UcsbOrganization::parse_identity(" TT ").expect("identity");
        assert_eq!(identity, org_identity("TT"));
        assert!(UcsbOrganization::parse_identity("  ").is_err());
        assert_eq!(
            UcsbOrganization::item_key(&identity).as_str(),
            "/api/ucsborganization?orgCode=TT"
        );
    }

    fn org_identity(code: &str) -> Identity {
        Identity::Natural {
            param: ORG_CODE,
            value: code.into(),
        }
    }

    #[test]
    fn messages_use_org_code() {
        assert_eq!(org().created_message(), "New UCSBOrganization Created - orgCode: DSC");
        assert_eq!(org().updated_message(), "UCSBOrganization Updated - orgCode: DSC");
    }
}
