#![deny(clippy::all, clippy::pedantic)]

use ucsb_admin::resources::UcsbOrganization;

use crate::args::{OrganizationFields, OrganizationsCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::common;
use crate::io::required;

pub async fn handle(ctx: &Ctx, cmd: OrganizationsCmd) -> Result<(), CliError> {
    match cmd {
        OrganizationsCmd::List => common::list::<UcsbOrganization>(ctx).await,
        OrganizationsCmd::Get { org_code } => {
            common::get::<UcsbOrganization>(ctx, &org_code).await
        }
        OrganizationsCmd::Create { org_code, fields } => {
            common::create(ctx, &new_record(&org_code, fields)?).await
        }
        OrganizationsCmd::Update { org_code, fields } => {
            common::update(ctx, &org_code, |current| apply(fields, current)).await
        }
        OrganizationsCmd::Delete { org_code } => {
            common::delete::<UcsbOrganization>(ctx, &org_code).await
        }
    }
}

fn new_record(org_code: &str, fields: OrganizationFields) -> Result<UcsbOrganization, CliError> {
    let org_code = org_code.trim().to_string();
    if org_code.is_empty() {
        return Err(CliError::InvalidInput("--org-code must not be empty".into()));
    }
    Ok(UcsbOrganization {
        org_code,
        org_translation_short: required(fields.org_translation_short, "--org-translation-short")?,
        org_translation: required(fields.org_translation, "--org-translation")?,
        inactive: fields.inactive.unwrap_or(false),
    })
}

/// The organization code is the record's identity and never changes here.
fn apply(fields: OrganizationFields, current: UcsbOrganization) -> UcsbOrganization {
    UcsbOrganization {
        org_code: current.org_code,
        org_translation_short: fields
            .org_translation_short
            .unwrap_or(current.org_translation_short),
        org_translation: fields.org_translation.unwrap_or(current.org_translation),
        inactive: fields.inactive.unwrap_or(current.inactive),
    }
}
