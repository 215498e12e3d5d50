use std::future::Future;

use dioxus::prelude::*;
use shared_types::FetchError;

/// Observable state of a view's one remote read.
///
/// A view starts out `Loading` and moves to `Loaded` or `Failed` once per
/// fetch. The task belongs to the view's scope, so unmounting the view drops
/// it and a late response is never applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> From<Option<Result<T, FetchError>>> for Loadable<T> {
    fn from(value: Option<Result<T, FetchError>>) -> Self {
        match value {
            None => Loadable::Loading,
            Some(Ok(data)) => Loadable::Loaded(data),
            Some(Err(err)) => Loadable::Failed(err),
        }
    }
}

/// A settled result together with the key it was fetched for.
type Fetched<K, T> = (K, Result<T, FetchError>);

/// One remote read owned by the calling component, keyed by what it reads
/// (an id, or `()` for a fixed endpoint).
///
/// `use_resource` keeps its last value across a restart or a key change, so
/// the state is derived from both the resource state and the key the held
/// value belongs to.
pub struct RemoteRead<K: 'static, T: 'static> {
    key: K,
    resource: Resource<Fetched<K, T>>,
}

impl<K: Clone, T> Clone for RemoteRead<K, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            resource: self.resource,
        }
    }
}

impl<K, T> RemoteRead<K, T>
where
    K: Clone + PartialEq + 'static,
    T: Clone + 'static,
{
    pub fn state(&self) -> Loadable<T> {
        let pending = matches!(*self.resource.state().read(), UseResourceState::Pending);
        let value = self.resource.read();
        settle(pending, &self.key, Option::as_ref(&value))
    }

    /// Discard the current result and issue one new fetch for the same key.
    pub fn retry(&self) {
        let mut resource = self.resource;
        resource.restart();
    }
}

fn settle<K: PartialEq, T: Clone>(
    pending: bool,
    key: &K,
    value: Option<&Fetched<K, T>>,
) -> Loadable<T> {
    match value {
        Some((fetched_for, result)) if !pending && fetched_for == key => {
            Loadable::from(Some(result.clone()))
        }
        _ => Loadable::Loading,
    }
}

/// Fetch once on mount and once more whenever `key` changes.
pub fn use_remote<K, T, F, Fut>(key: K, mut fetch: F) -> RemoteRead<K, T>
where
    K: Clone + PartialEq + 'static,
    T: 'static,
    F: FnMut(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let resource = use_resource(use_reactive((&key,), move |(key,)| {
        let read = fetch(key.clone());
        async move { (key, read.await) }
    }));
    RemoteRead { key, resource }
}
