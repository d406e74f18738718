use serde_json::Value;

use crate::cache::QuerySnapshot;
use crate::resources::{Identity, Resource};

use super::{PageBinding, PageContext, PageError, edit_page};

/// Edit page: loads the record at `identity`, then submits the changed form.
pub struct EditPage<R: Resource> {
    ctx: PageContext,
    identity: Identity,
    binding: PageBinding<R>,
}

impl<R: Resource> EditPage<R> {
    pub fn new(ctx: &PageContext, identity: Identity) -> Self {
        let binding = edit_page::<R>(ctx, &identity);
        Self {
            ctx: ctx.clone(),
            identity,
            binding,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Current record, fetched through the cache. `data` is `None` until the
    /// record has loaded.
    pub async fn load(&self) -> QuerySnapshot<Option<R>> {
        self.ctx
            .cache
            .query_settled(
                &R::item_key(&self.identity),
                &R::get_request(&self.identity),
                None,
            )
            .await
    }

    pub async fn submit(&self, record: &R) -> Result<Value, PageError> {
        self.binding.submit(record).await
    }

    pub fn cancel(&self) {
        self.binding.cancel();
    }

    pub fn binding(&self) -> &PageBinding<R> {
        &self.binding
    }
}
