//! Resource operations over a [`Transport`].

use futures_core::Stream;
use futures_util::TryStreamExt;
use tracing::{debug, instrument};

use crate::error::ConfigurationError;
use crate::pagination::{Page, PageRequest, PageSize, paginate};
use crate::resources::{CreateKeyRequest, DeleteResponse, Deleted, KeyResource, Resource};
use crate::secret::{CreatedSecret, IssuedKey};
use crate::transport::Transport;
use crate::Result;

/// List, create and delete operations shared by every resource family.
#[derive(Debug, Clone)]
pub struct AdminClient<T> {
    transport: T,
}

impl<T: Transport> AdminClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lazily stream every record of a resource family.
    pub fn list<'a, R: Resource>(
        &'a self,
        resource: &'a R,
        limit: PageSize,
    ) -> impl Stream<Item = Result<R::Record>> + 'a {
        debug!(resource = R::NAME, limit = limit.get(), "listing");
        paginate(limit, move |request| self.fetch_page(resource, request))
    }

    /// Collect every record of a resource family.
    pub async fn list_all<R: Resource>(
        &self,
        resource: &R,
        limit: PageSize,
    ) -> Result<Vec<R::Record>> {
        self.list(resource, limit).try_collect().await
    }

    /// Fetch a single page.
    #[instrument(skip(self, resource), fields(kind = R::NAME))]
    pub async fn fetch_page<R: Resource>(
        &self,
        resource: &R,
        request: PageRequest,
    ) -> Result<Page<R::Record>> {
        let path = resource.collection_path();
        let mut query = request.query();
        query.extend(resource.list_query());

        let body = self.transport.get(&path, &query).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a key and resolve its one-time secret.
    #[instrument(skip(self, resource), fields(kind = R::NAME))]
    pub async fn create_key<R: KeyResource>(
        &self,
        resource: &R,
        name: &str,
    ) -> Result<IssuedKey<R::Record>> {
        if name.is_empty() {
            return Err(ConfigurationError::MissingFlag { flag: "name" }.into());
        }

        let body = serde_json::to_value(CreateKeyRequest { name })?;
        let response = self
            .transport
            .post(&resource.collection_path(), &body)
            .await?;

        let created: CreatedSecret<R::Record> = serde_json::from_value(response)?;
        debug!("key created");
        created.into_issued()
    }

    /// Delete a key by ID.
    #[instrument(skip(self, resource), fields(kind = R::NAME))]
    pub async fn delete_key<R: KeyResource>(&self, resource: &R, id: &str) -> Result<Deleted> {
        let response = self.transport.delete(&resource.item_path(id)).await?;
        let ack: DeleteResponse = serde_json::from_value(response)?;
        let deleted = ack.into_deleted(id);
        debug!(id = %deleted.id, deleted = deleted.deleted, "key deleted");
        Ok(deleted)
    }
}
