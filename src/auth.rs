//! Current user and role checks.

use serde_json::Value;
use tracing::debug;
use ucsb_admin_api_types::{CurrentUserResponse, UserProfile};

use crate::cache::{CacheKey, QueryCache};
use crate::request::RequestDescriptor;

pub const CURRENT_USER_PATH: &str = "/api/currentUser";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";

/// The signed-in user as the rest of the client sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub logged_in: bool,
    pub root: Option<CurrentUserRoot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUserRoot {
    pub user: UserProfile,
    pub roles_list: Vec<String>,
}

impl CurrentUser {
    pub fn anonymous() -> Self {
        Self {
            logged_in: false,
            root: None,
        }
    }
}

impl From<CurrentUserResponse> for CurrentUser {
    fn from(response: CurrentUserResponse) -> Self {
        let roles_list = response.roles.into_iter().map(|r| r.authority).collect();
        Self {
            logged_in: true,
            root: Some(CurrentUserRoot {
                user: response.user,
                roles_list,
            }),
        }
    }
}

/// True when `user` is logged in and holds `role`. A missing user has no roles.
pub fn has_role(user: Option<&CurrentUser>, role: &str) -> bool {
    user.filter(|u| u.logged_in)
        .and_then(|u| u.root.as_ref())
        .is_some_and(|root| root.roles_list.iter().any(|r| r == role))
}

pub fn current_user_request() -> RequestDescriptor {
    RequestDescriptor::get(CURRENT_USER_PATH)
}

pub fn current_user_key() -> CacheKey {
    CacheKey::for_request(&current_user_request())
}

/// Loads the current user through the cache. Any failure, including an
/// unauthenticated session, yields an anonymous user.
pub async fn current_user(cache: &QueryCache) -> CurrentUser {
    let snapshot = cache
        .query_settled(&current_user_key(), &current_user_request(), Value::Null)
        .await;
    if let Some(error) = &snapshot.error {
        debug!(error = %error, "current user unavailable");
        return CurrentUser::anonymous();
    }
    serde_json::from_value::<CurrentUserResponse>(snapshot.data)
        .map(CurrentUser::from)
        .unwrap_or_else(|_| CurrentUser::anonymous())
}
