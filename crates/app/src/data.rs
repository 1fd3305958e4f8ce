//! Record access for pages. Pages never call the record server functions
//! directly; they go through a [`DataProvider`].

use serde::de::DeserializeOwned;
use shared_types::{AppError, AppErrorKind, DataProvider, Record};
use std::marker::PhantomData;

/// [`DataProvider`] over the `list_records` / `get_record` server functions.
#[derive(Debug)]
pub struct RemoteProvider<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> Default for RemoteProvider<T> {
    fn default() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Clone for RemoteProvider<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T> Copy for RemoteProvider<T> {}

pub fn provider<T: Record>() -> RemoteProvider<T> {
    RemoteProvider::default()
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::internal(format!("unexpected record shape: {e}")))
}

/// Missing records are `None`, every other error passes through.
pub fn absent_on_not_found<T>(result: Result<T, AppError>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind == AppErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

impl<T: Record> DataProvider<T> for RemoteProvider<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        self.search("").await
    }

    async fn find(&self, id: &str) -> Result<Option<T>, AppError> {
        let result = server::api::get_record(T::COLLECTION.as_str().to_string(), id.to_string())
            .await
            .map_err(|e| AppError::from_transport(&e.to_string()))
            .and_then(decode::<T>);
        absent_on_not_found(result)
    }

    async fn search(&self, query: &str) -> Result<Vec<T>, AppError> {
        let value =
            server::api::list_records(T::COLLECTION.as_str().to_string(), query.to_string())
                .await
                .map_err(|e| AppError::from_transport(&e.to_string()))?;
        decode(value)
    }
}
