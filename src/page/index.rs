use serde_json::Value;

use crate::auth::{self, CurrentUser};
use crate::cache::QuerySnapshot;
use crate::resources::{Identity, Resource};
use crate::table::{self, Column};

use super::{PageBinding, PageContext, PageError, delete_action};

/// Index page: the resource table plus its delete action.
pub struct IndexPage<R: Resource> {
    ctx: PageContext,
    delete: PageBinding<Identity>,
    _resource: std::marker::PhantomData<fn() -> R>,
}

/// One rendering of an index page.
#[derive(Debug, Clone)]
pub struct IndexView<R> {
    pub user: CurrentUser,
    pub rows: QuerySnapshot<Vec<R>>,
    pub columns: Vec<Column>,
}

impl<R: Resource> IndexView<R> {
    pub fn render(&self) -> String {
        table::render(&self.rows.data, &self.columns)
    }
}

impl<R: Resource> IndexPage<R> {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            delete: delete_action::<R>(ctx),
            _resource: std::marker::PhantomData,
        }
    }

    /// Rows as currently cached. Starts a background fetch when the list is
    /// missing or stale; `data` is empty until it lands.
    pub fn rows(&self) -> QuerySnapshot<Vec<R>> {
        self.ctx
            .cache
            .query(&R::list_key(), &R::list_request(), Vec::new())
    }

    /// Loads the user and the rows, waiting for both fetches.
    pub async fn load(&self) -> IndexView<R> {
        let user = auth::current_user(&self.ctx.cache).await;
        let rows = self
            .ctx
            .cache
            .query_settled(&R::list_key(), &R::list_request(), Vec::new())
            .await;
        let columns = table::columns_for::<R>(Some(&user));
        IndexView {
            user,
            rows,
            columns,
        }
    }

    pub async fn delete(&self, identity: &Identity) -> Result<Value, PageError> {
        self.delete.submit(identity).await
    }

    pub fn delete_binding(&self) -> &PageBinding<Identity> {
        &self.delete
    }
}
