#![deny(clippy::all, clippy::pedantic)]

use ucsb_admin::resources::MenuItemReview;

use crate::args::{MenuItemReviewFields, MenuItemReviewsCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::common;
use crate::io::required;

pub async fn handle(ctx: &Ctx, cmd: MenuItemReviewsCmd) -> Result<(), CliError> {
    match cmd {
        MenuItemReviewsCmd::List => common::list::<MenuItemReview>(ctx).await,
        MenuItemReviewsCmd::Get { id } => common::get::<MenuItemReview>(ctx, &id).await,
        MenuItemReviewsCmd::Create { fields } => common::create(ctx, &new_record(fields)?).await,
        MenuItemReviewsCmd::Update { id, fields } => {
            common::update(ctx, &id, |current| apply(fields, current)).await
        }
        MenuItemReviewsCmd::Delete { id } => common::delete::<MenuItemReview>(ctx, &id).await,
    }
}

fn new_record(fields: MenuItemReviewFields) -> Result<MenuItemReview, CliError> {
    Ok(MenuItemReview {
        id: None,
        item_id: required(fields.item_id, "--item-id")?,
        reviewer_email: required(fields.reviewer_email, "--reviewer-email")?,
        stars: required(fields.stars, "--stars")?,
        date_reviewed: fields.date_reviewed,
        comments: required(fields.comments, "--comments")?,
    })
}

fn apply(fields: MenuItemReviewFields, current: MenuItemReview) -> MenuItemReview {
    MenuItemReview {
        id: current.id,
        item_id: fields.item_id.unwrap_or(current.item_id),
        reviewer_email: fields.reviewer_email.unwrap_or(current.reviewer_email),
        stars: fields.stars.unwrap_or(current.stars),
        date_reviewed: fields.date_reviewed.or(current.date_reviewed),
        comments: fields.comments.unwrap_or(current.comments),
    }
}
