//! Page bindings: submit state machines wired to the mutation executor,
//! toasts and navigation.
//!
//! A binding moves `Idle -> Submitting -> Success | Error`. While a
//! submission is running, further submits are refused. Success emits the
//! resource's toast and, for create and edit pages, a redirect to the index
//! route. Errors emit an error toast and leave the page ready to resubmit.
//! A submit future dropped before it finishes puts the binding back to
//! `Idle`.

mod edit;
mod index;
mod navigation;
mod toast;

use std::sync::{Arc, Mutex};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use ucsb_admin_api_types::MessageResponse;

use crate::cache::QueryCache;
use crate::cache::lock::mutex_lock;
use crate::mutation::{Mutation, MutationError};
use crate::resources::{Identity, Resource};

pub use edit::EditPage;
pub use index::{IndexPage, IndexView};
pub use navigation::{NavigationIntent, Navigator};
pub use toast::{Notifier, Toast, ToastKind};

const SOURCE: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("a submission is already in progress")]
    SubmissionInFlight,
    #[error(transparent)]
    Mutation(#[from] MutationError),
}

/// Collaborators every page needs.
#[derive(Clone)]
pub struct PageContext {
    pub cache: Arc<QueryCache>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl PageContext {
    pub fn new(
        cache: Arc<QueryCache>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            cache,
            notifier,
            navigator,
        }
    }
}

type SuccessMessage<E> = Box<dyn Fn(&E, &Value) -> String + Send + Sync>;

pub struct PageBinding<E> {
    name: &'static str,
    mutation: Mutation<E>,
    message: SuccessMessage<E>,
    redirect: Option<String>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<PageState>,
}

impl<E> PageBinding<E> {
    pub fn new(
        name: &'static str,
        ctx: &PageContext,
        mutation: Mutation<E>,
        message: impl Fn(&E, &Value) -> String + Send + Sync + 'static,
        redirect: Option<String>,
    ) -> Self {
        Self {
            name,
            mutation,
            message: Box::new(message),
            redirect,
            notifier: Arc::clone(&ctx.notifier),
            navigator: Arc::clone(&ctx.navigator),
            state: Mutex::new(PageState::Idle),
        }
    }

    pub fn state(&self) -> PageState {
        mutex_lock(&self.state, SOURCE, "state").clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state() == PageState::Submitting
    }

    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    pub fn mutation(&self) -> &Mutation<E> {
        &self.mutation
    }

    /// Cancel button: goes back without sending anything.
    pub fn cancel(&self) {
        debug!(page = self.name, "cancelled");
        self.navigator.navigate(NavigationIntent::Back);
    }

    /// Runs the mutation for `entity` and reports the outcome to the user.
    pub async fn submit(&self, entity: &E) -> Result<Value, PageError> {
        let _in_flight = self.begin()?;
        match self.mutation.mutate(entity).await {
            Ok(payload) => {
                let text = (self.message)(entity, &payload);
                self.transition(PageState::Success);
                info!(page = self.name, message = %text, "submission succeeded");
                self.notifier.notify(Toast::success(text));
                if let Some(route) = &self.redirect {
                    self.navigator
                        .navigate(NavigationIntent::To(route.clone()));
                }
                Ok(payload)
            }
            Err(err) => {
                let text = err.to_string();
                self.transition(PageState::Error(text.clone()));
                self.notifier.notify(Toast::error(text));
                Err(err.into())
            }
        }
    }

    fn begin(&self) -> Result<InFlight<'_>, PageError> {
        let mut state = mutex_lock(&self.state, SOURCE, "begin");
        if *state == PageState::Submitting {
            debug!(page = self.name, "submit ignored while in flight");
            return Err(PageError::SubmissionInFlight);
        }
        *state = PageState::Submitting;
        Ok(InFlight {
            name: self.name,
            state: &self.state,
        })
    }

    fn transition(&self, next: PageState) {
        let mut state = mutex_lock(&self.state, SOURCE, "transition");
        debug!(page = self.name, from = ?*state, to = ?next, "page state");
        *state = next;
    }
}

/// Held by a running submit. Dropping it while still `Submitting` means the
/// submit future was abandoned, so the binding goes back to `Idle`.
struct InFlight<'a> {
    name: &'static str,
    state: &'a Mutex<PageState>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = mutex_lock(self.state, SOURCE, "abandon");
        if *state == PageState::Submitting {
            debug!(page = self.name, "submission abandoned");
            *state = PageState::Idle;
        }
    }
}

/// Create page: `POST <endpoint>/post`, invalidates the list, then returns
/// to the index.
pub fn create_page<R: Resource>(ctx: &PageContext) -> PageBinding<R> {
    let mutation = Mutation::new(
        Arc::clone(&ctx.cache),
        R::create_request,
        vec![R::list_key()],
    );
    PageBinding::new(
        R::NAME,
        ctx,
        mutation,
        |submitted: &R, payload| saved_or(submitted, payload).created_message(),
        Some(R::INDEX_ROUTE.to_string()),
    )
}

/// Edit page for the record at `identity`. Both the record and the list
/// are invalidated on success.
pub fn edit_page<R: Resource>(ctx: &PageContext, identity: &Identity) -> PageBinding<R> {
    let mutation = Mutation::new(
        Arc::clone(&ctx.cache),
        R::update_request,
        vec![R::item_key(identity), R::list_key()],
    );
    PageBinding::new(
        R::NAME,
        ctx,
        mutation,
        |submitted: &R, payload| saved_or(submitted, payload).updated_message(),
        Some(R::INDEX_ROUTE.to_string()),
    )
}

/// Delete action used by index tables. Shows the backend's confirmation and
/// stays on the page.
pub fn delete_action<R: Resource>(ctx: &PageContext) -> PageBinding<Identity> {
    let mutation = Mutation::new(
        Arc::clone(&ctx.cache),
        R::delete_request_for,
        vec![R::list_key()],
    );
    PageBinding::new(
        R::NAME,
        ctx,
        mutation,
        |identity: &Identity, payload| {
            serde_json::from_value::<MessageResponse>(payload.clone())
                .map(|response| response.message)
                .unwrap_or_else(|_| format!("{} {identity} deleted", R::NAME))
        },
        None,
    )
}

/// The record echoed back by the backend, or the submitted one when the
/// response does not decode.
fn saved_or<R: Resource>(submitted: &R, payload: &Value) -> R {
    serde_json::from_value(payload.clone()).unwrap_or_else(|_| submitted.clone())
}
