#![deny(clippy::all, clippy::pedantic)]

use serde_json::json;
use ucsb_admin::auth::{ROLE_ADMIN, current_user, has_role};

use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx) -> Result<(), CliError> {
    let user = current_user(ctx.cache()).await;
    let Some(root) = user.root.as_ref().filter(|_| user.logged_in) else {
        return print_json(&json!({ "loggedIn": false }));
    };
    print_json(&json!({
        "loggedIn": true,
        "email": root.user.email,
        "fullName": root.user.full_name,
        "roles": root.roles_list,
        "admin": has_role(Some(&user), ROLE_ADMIN),
    }))
}
