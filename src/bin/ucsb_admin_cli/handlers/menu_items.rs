#![deny(clippy::all, clippy::pedantic)]

use ucsb_admin::resources::UcsbDiningCommonsMenuItem;

use crate::args::{MenuItemFields, MenuItemsCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::common;
use crate::io::required;

pub async fn handle(ctx: &Ctx, cmd: MenuItemsCmd) -> Result<(), CliError> {
    match cmd {
        MenuItemsCmd::List => common::list::<UcsbDiningCommonsMenuItem>(ctx).await,
        MenuItemsCmd::Get { id } => common::get::<UcsbDiningCommonsMenuItem>(ctx, &id).await,
        MenuItemsCmd::Create { fields } => common::create(ctx, &new_record(fields)?).await,
        MenuItemsCmd::Update { id, fields } => {
            common::update(ctx, &id, |current| apply(fields, current)).await
        }
        MenuItemsCmd::Delete { id } => {
            common::delete::<UcsbDiningCommonsMenuItem>(ctx, &id).await
        }
    }
}

fn new_record(fields: MenuItemFields) -> Result<UcsbDiningCommonsMenuItem, CliError> {
    Ok(UcsbDiningCommonsMenuItem {
        id: None,
        dining_commons_code: required(fields.dining_commons_code, "--dining-commons-code")?,
        name: required(fields.name, "--name")?,
        station: required(fields.station, "--station")?,
    })
}

fn apply(fields: MenuItemFields, current: UcsbDiningCommonsMenuItem) -> UcsbDiningCommonsMenuItem {
    UcsbDiningCommonsMenuItem {
        id: current.id,
        dining_commons_code: fields
            .dining_commons_code
            .unwrap_or(current.dining_commons_code),
        name: fields.name.unwrap_or(current.name),
        station: fields.station.unwrap_or(current.station),
    }
}
