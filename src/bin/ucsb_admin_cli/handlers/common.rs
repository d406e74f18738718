#![deny(clippy::all, clippy::pedantic)]

//! Resource-agnostic command flows shared by every entity handler.

use ucsb_admin::page::{EditPage, IndexPage, create_page};
use ucsb_admin::resources::{Identity, Resource};

use crate::args::OutputFormat;
use crate::client::{CliError, Ctx};
use crate::print::{print_json, print_table};

pub fn identity<R: Resource>(raw: &str) -> Result<Identity, CliError> {
    R::parse_identity(raw).map_err(CliError::InvalidInput)
}

pub async fn list<R: Resource>(ctx: &Ctx) -> Result<(), CliError> {
    let view = IndexPage::<R>::new(&ctx.pages).load().await;
    if let Some(error) = view.rows.error.clone() {
        return Err(CliError::Query(error));
    }
    match ctx.format {
        OutputFormat::Table => print_table(&view.render()),
        OutputFormat::Json => print_json(&view.rows.data)?,
    }
    Ok(())
}

pub async fn get<R: Resource>(ctx: &Ctx, raw_id: &str) -> Result<(), CliError> {
    let record = load::<R>(&EditPage::new(&ctx.pages, identity::<R>(raw_id)?)).await?;
    print_json(&record)
}

pub async fn create<R: Resource>(ctx: &Ctx, record: &R) -> Result<(), CliError> {
    let payload = create_page::<R>(&ctx.pages).submit(record).await?;
    print_json(&payload)
}

/// Loads the current record, applies `change` and submits the result.
pub async fn update<R: Resource>(
    ctx: &Ctx,
    raw_id: &str,
    change: impl FnOnce(R) -> R,
) -> Result<(), CliError> {
    let page = EditPage::<R>::new(&ctx.pages, identity::<R>(raw_id)?);
    let current = load(&page).await?;
    let payload = page.submit(&change(current)).await?;
    print_json(&payload)
}

pub async fn delete<R: Resource>(ctx: &Ctx, raw_id: &str) -> Result<(), CliError> {
    let page = IndexPage::<R>::new(&ctx.pages);
    let payload = page.delete(&identity::<R>(raw_id)?).await?;
    print_json(&payload)
}

async fn load<R: Resource>(page: &EditPage<R>) -> Result<R, CliError> {
    let snapshot = page.load().await;
    if let Some(error) = snapshot.error {
        return Err(CliError::Query(error));
    }
    snapshot
        .data
        .ok_or_else(|| CliError::NotFound(format!("{} {}", R::NAME, page.identity())))
}
