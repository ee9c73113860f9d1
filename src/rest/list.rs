//! Collection operations for resource families.
//!
//! A [`ResourceList`] is the entry point for everything collection-shaped:
//! creating records, fetching single pages, and traversing whole result sets
//! eagerly ([`list`](ResourceList::list)), lazily
//! ([`stream`](ResourceList::stream)) or callback-style
//! ([`each`](ResourceList::each)). It also carries the
//! [`get`](ResourceList::get) indexer producing a context for one record.
//!
//! Traversals fetch the next page only once the current page is exhausted,
//! and always deliver records in server page order then in-page order. A
//! `limit` truncates after fetching — it never changes the `PageSize` hint
//! sent to the server.

use std::marker::PhantomData;
use std::ops::ControlFlow;

use futures::stream::Stream;
use futures::TryStreamExt;
use serde_json::Value;

use crate::rest::context::ResourceContext;
use crate::rest::errors::RestError;
use crate::rest::instance::ResourceInstance;
use crate::rest::page::RecordPage;
use crate::rest::resource::{serialize_to_query, Addressable, Creatable, Resource};
use crate::rest::solution::Solution;
use crate::rest::Version;

/// Traversal options shared by `list`, `stream` and `each`.
///
/// `page_size` is only a hint for how many records the server should return
/// per page (the server default is 50, and it may return fewer). `limit`
/// caps how many records the traversal yields in total; reaching it ends the
/// traversal cleanly with the records seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Requested page size, sent as the `PageSize` query parameter.
    pub page_size: Option<u32>,
    /// Maximum number of records to yield across all pages.
    pub limit: Option<usize>,
}

impl ListOptions {
    /// Creates options with neither a page-size hint nor a limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page_size: None,
            limit: None,
        }
    }

    /// Sets the `PageSize` hint.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the total record limit.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Collection handle for a resource family, scoped by a path solution.
///
/// Lists are cheap to clone and perform no I/O at construction; every
/// operation issues its own requests through the list's [`Version`].
#[derive(Debug, Clone)]
pub struct ResourceList<T> {
    version: Version,
    solution: Solution,
    _marker: PhantomData<fn() -> T>,
}

/// Traversal state for [`ResourceList::stream`].
enum StreamState<P, I> {
    Begin(P),
    Draining {
        records: std::vec::IntoIter<I>,
        next_url: Option<String>,
    },
}

impl<T: Resource> ResourceList<T> {
    /// Creates a list bound to the given version and solution.
    ///
    /// The solution must cover every placeholder of the resource's list
    /// template; this is checked when the first request renders the URL.
    #[must_use]
    pub fn new(version: Version, solution: Solution) -> Self {
        Self {
            version,
            solution,
            _marker: PhantomData,
        }
    }

    /// Returns the version this list dispatches through.
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Returns the path solution scoping this list.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Renders the absolute URL of the collection.
    ///
    /// # Panics
    ///
    /// Panics if the solution does not cover the list template.
    #[must_use]
    pub fn url(&self) -> String {
        self.version
            .absolute_url(&self.solution.render(T::LIST_TEMPLATE))
    }

    /// Fetches exactly one page of records.
    ///
    /// `page_size` is a hint: the returned page reflects what the server
    /// actually sent, which may be fewer (or more) records.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx answers,
    /// [`RestError::MalformedResponse`] for bodies without the expected
    /// list shape, and [`RestError::Http`] for transport failures.
    pub async fn page(
        &self,
        params: &T::ListParams,
        page_size: Option<u32>,
    ) -> Result<RecordPage<T>, RestError> {
        let mut query = serialize_to_query(params);
        if let Some(size) = page_size {
            query.insert("PageSize".to_string(), size.to_string());
        }

        let url = self.url();
        let query = if query.is_empty() { None } else { Some(query) };
        let body = self.version.page(&url, query).await?;

        RecordPage::from_body(self.version.clone(), self.solution.clone(), &body, &url)
    }

    /// Lazily traverses the whole result set.
    ///
    /// The stream fetches the first page on first poll and each subsequent
    /// page only once the previous one is exhausted. Dropping the stream
    /// between pages is the cancellation point; a page request already in
    /// flight runs to completion. Every call starts a fresh traversal.
    pub fn stream(
        &self,
        params: T::ListParams,
        opts: ListOptions,
    ) -> impl Stream<Item = Result<ResourceInstance<T>, RestError>> + '_ {
        let ListOptions { page_size, limit } = opts;

        futures::stream::try_unfold(
            (StreamState::Begin(params), 0_usize),
            move |(mut state, yielded)| async move {
                loop {
                    match state {
                        StreamState::Begin(params) => {
                            let page = self.page(&params, page_size).await?;
                            let next_url = page.meta().next_page_url.clone();
                            state = StreamState::Draining {
                                records: page.into_instances().into_iter(),
                                next_url,
                            };
                        }
                        StreamState::Draining {
                            mut records,
                            next_url,
                        } => {
                            if limit.is_some_and(|limit| yielded >= limit) {
                                return Ok(None);
                            }

                            if let Some(instance) = records.next() {
                                return Ok(Some((
                                    instance,
                                    (StreamState::Draining { records, next_url }, yielded + 1),
                                )));
                            }

                            let Some(url) = next_url else {
                                return Ok(None);
                            };

                            let body = self.version.page(&url, None).await?;
                            let page = RecordPage::<T>::from_body(
                                self.version.clone(),
                                self.solution.clone(),
                                &body,
                                &url,
                            )?;
                            let next_url = page.meta().next_page_url.clone();
                            state = StreamState::Draining {
                                records: page.into_instances().into_iter(),
                                next_url,
                            };
                        }
                    }
                }
            },
        )
    }

    /// Eagerly collects the whole result set, in order.
    ///
    /// With a `limit`, returns the first `limit` records and stops — a
    /// truncated result is not an error.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RestError`] hit while traversing.
    pub async fn list(
        &self,
        params: T::ListParams,
        opts: ListOptions,
    ) -> Result<Vec<ResourceInstance<T>>, RestError> {
        let stream = self.stream(params, opts);
        futures::pin_mut!(stream);

        let mut items = Vec::new();
        while let Some(instance) = stream.try_next().await? {
            items.push(instance);
        }
        Ok(items)
    }

    /// Traverses the result set, delivering records through a callback.
    ///
    /// The callback receives each instance together with the number of
    /// records still to come under the configured `limit` (`None` when
    /// unbounded), and ends the traversal early by returning
    /// [`ControlFlow::Break`]. Early termination takes effect between
    /// records; a page already in flight runs to completion.
    ///
    /// # Errors
    ///
    /// Returns the first unrecovered [`RestError`] of the traversal;
    /// `Ok(())` on normal completion or early break.
    pub async fn each<F>(
        &self,
        params: T::ListParams,
        opts: ListOptions,
        mut callback: F,
    ) -> Result<(), RestError>
    where
        F: FnMut(ResourceInstance<T>, Option<usize>) -> ControlFlow<()> + Send,
    {
        let limit = opts.limit;
        let stream = self.stream(params, opts);
        futures::pin_mut!(stream);

        let mut delivered = 0_usize;
        while let Some(instance) = stream.try_next().await? {
            delivered += 1;
            let remaining = limit.map(|limit| limit.saturating_sub(delivered));
            if callback(instance, remaining).is_break() {
                break;
            }
        }
        Ok(())
    }
}

impl<T: Addressable> ResourceList<T> {
    /// Returns a context addressing one record of this collection.
    ///
    /// This performs no I/O; the returned context issues requests on demand.
    #[must_use]
    pub fn get(&self, sid: impl Into<String>) -> ResourceContext<T> {
        ResourceContext::new(
            self.version.clone(),
            self.solution.clone().with(T::IDENTITY_KEY, sid),
        )
    }
}

impl<T: Creatable> ResourceList<T> {
    /// Creates a record, returning the server's snapshot of it.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx answers (surfaced verbatim,
    /// never swallowed), [`RestError::MalformedResponse`] for unusable 2xx
    /// bodies, and [`RestError::Http`] for transport failures.
    ///
    /// # Panics
    ///
    /// Panics if the params cannot be serialized to JSON, which would be a
    /// programming error in the params struct.
    pub async fn create(&self, params: &T::CreateParams) -> Result<ResourceInstance<T>, RestError> {
        let url = self.url();
        let body = serde_json::to_value(params)
            .unwrap_or_else(|e| panic!("Failed to serialize create parameters: {e}"));
        let body = if body.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            body
        };

        let payload = self.version.create(&url, body).await?;
        ResourceInstance::from_payload(self.version.clone(), self.solution.clone(), &payload, &url)
    }
}
