#![deny(clippy::all, clippy::pedantic)]

use ucsb_admin::resources::HelpRequest;

use crate::args::{HelpRequestFields, HelpRequestsCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::common;
use crate::io::required;

pub async fn handle(ctx: &Ctx, cmd: HelpRequestsCmd) -> Result<(), CliError> {
    match cmd {
        HelpRequestsCmd::List => common::list::<HelpRequest>(ctx).await,
        HelpRequestsCmd::Get { id } => common::get::<HelpRequest>(ctx, &id).await,
        HelpRequestsCmd::Create { fields } => common::create(ctx, &new_record(fields)?).await,
        HelpRequestsCmd::Update { id, fields } => {
            common::update(ctx, &id, |current| apply(fields, current)).await
        }
        HelpRequestsCmd::Delete { id } => common::delete::<HelpRequest>(ctx, &id).await,
    }
}

pub fn new_record(fields: HelpRequestFields) -> Result<HelpRequest, CliError> {
    Ok(HelpRequest {
        id: None,
        requester_email: required(fields.requester_email, "--requester-email")?,
        team_id: required(fields.team_id, "--team-id")?,
        table_or_breakout_room: required(fields.table_or_breakout_room, "--table-or-breakout-room")?,
        request_time: fields.request_time,
        explanation: required(fields.explanation, "--explanation")?,
        solved: fields.solved.unwrap_or(false),
    })
}

pub fn apply(fields: HelpRequestFields, current: HelpRequest) -> HelpRequest {
    HelpRequest {
        id: current.id,
        requester_email: fields.requester_email.unwrap_or(current.requester_email),
        team_id: fields.team_id.unwrap_or(current.team_id),
        table_or_breakout_room: fields
            .table_or_breakout_room
            .unwrap_or(current.table_or_breakout_room),
        request_time: fields.request_time.or(current.request_time),
        explanation: fields.explanation.unwrap_or(current.explanation),
        solved: fields.solved.unwrap_or(current.solved),
    }
}
