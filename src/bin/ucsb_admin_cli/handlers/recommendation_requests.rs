#![deny(clippy::all, clippy::pedantic)]

use ucsb_admin::resources::RecommendationRequest;

use crate::args::{RecommendationRequestFields, RecommendationRequestsCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::common;
use crate::io::required;

pub async fn handle(ctx: &Ctx, cmd: RecommendationRequestsCmd) -> Result<(), CliError> {
    match cmd {
        RecommendationRequestsCmd::List => common::list::<RecommendationRequest>(ctx).await,
        RecommendationRequestsCmd::Get { id } => {
            common::get::<RecommendationRequest>(ctx, &id).await
        }
        RecommendationRequestsCmd::Create { fields } => {
            common::create(ctx, &new_record(fields)?).await
        }
        RecommendationRequestsCmd::Update { id, fields } => {
            common::update(ctx, &id, |current| apply(fields, current)).await
        }
        RecommendationRequestsCmd::Delete { id } => {
            common::delete::<RecommendationRequest>(ctx, &id).await
        }
    }
}

fn new_record(fields: RecommendationRequestFields) -> Result<RecommendationRequest, CliError> {
    Ok(RecommendationRequest {
        id: None,
        requester_email: required(fields.requester_email, "--requester-email")?,
        professor_email: required(fields.professor_email, "--professor-email")?,
        explanation: required(fields.explanation, "--explanation")?,
        date_requested: fields.date_requested,
        date_needed: fields.date_needed,
        done: fields.done.unwrap_or(false),
    })
}

fn apply(fields: RecommendationRequestFields, current: RecommendationRequest) -> RecommendationRequest {
    RecommendationRequest {
        id: current.id,
        requester_email: fields.requester_email.unwrap_or(current.requester_email),
        professor_email: fields.professor_email.unwrap_or(current.professor_email),
        explanation: fields.explanation.unwrap_or(current.explanation),
        date_requested: fields.date_requested.or(current.date_requested),
        date_needed: fields.date_needed.or(current.date_needed),
        done: fields.done.unwrap_or(current.done),
    }
}
