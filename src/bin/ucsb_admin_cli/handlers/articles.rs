#![deny(clippy::all, clippy::pedantic)]

use ucsb_admin::resources::Article;

use crate::args::{ArticleFields, ArticlesCmd};
use crate::client::{CliError, Ctx};
use crate::handlers::common;
use crate::io::required;

pub async fn handle(ctx: &Ctx, cmd: ArticlesCmd) -> Result<(), CliError> {
    match cmd {
        ArticlesCmd::List => common::list::<Article>(ctx).await,
        ArticlesCmd::Get { id } => common::get::<Article>(ctx, &id).await,
        ArticlesCmd::Create { fields } => common::create(ctx, &new_record(fields)?).await,
        ArticlesCmd::Update { id, fields } => {
            common::update(ctx, &id, |current| apply(fields, current)).await
        }
        ArticlesCmd::Delete { id } => common::delete::<Article>(ctx, &id).await,
    }
}

fn new_record(fields: ArticleFields) -> Result<Article, CliError> {
    Ok(Article {
        id: None,
        title: required(fields.title, "--title")?,
        url: required(fields.url, "--url")?,
        explanation: required(fields.explanation, "--explanation")?,
        email: required(fields.email, "--email")?,
        date_added: fields.date_added,
    })
}

fn apply(fields: ArticleFields, current: Article) -> Article {
    Article {
        id: current.id,
        title: fields.title.unwrap_or(current.title),
        url: fields.url.unwrap_or(current.url),
        explanation: fields.explanation.unwrap_or(current.explanation),
        email: fields.email.unwrap_or(current.email),
        date_added: fields.date_added.or(current.date_added),
    }
}
