use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::{labeled_enum, matches_query};
use crate::error::AppError;

labeled_enum! {
    /// Named record collections served by the office backend.
    Collection {
        Cases => ("cases", "القضايا"),
        Customers => ("customers", "العملاء"),
        Employees => ("employees", "الموظفون"),
        Finance => ("finance", "السجلات المالية"),
        Sessions => ("sessions", "الجلسات"),
        Tasks => ("tasks", "المهام"),
        Agencies => ("agencies", "الوكالات"),
        Articles => ("articles", "المساعد القانوني"),
    }
}

/// A record that can be listed, looked up by id and searched.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Collection this record type is served from.
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    /// Text the search box matches against.
    fn search_text(&self) -> String;

    /// Whether this record matches a free-text query.
    fn matches(&self, query: &str) -> bool {
        matches_query(&self.search_text(), query)
    }
}

/// Read access to a collection of records.
///
/// Presentation code depends only on this trait, so the in-memory provider
/// and the server-backed one are interchangeable.
#[allow(async_fn_in_trait)]
pub trait DataProvider<T: Record> {
    async fn list(&self) -> Result<Vec<T>, AppError>;

    async fn find(&self, id: &str) -> Result<Option<T>, AppError>;

    async fn search(&self, query: &str) -> Result<Vec<T>, AppError>;
}

/// Serves a fixed vector of records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InMemoryProvider<T> {
    items: Vec<T>,
}

impl<T: Record> InMemoryProvider<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// Filter a slice by query, preserving order.
pub fn search_records<T: Record>(items: &[T], query: &str) -> Vec<T> {
    items.iter().filter(|r| r.matches(query)).cloned().collect()
}

impl<T: Record> DataProvider<T> for InMemoryProvider<T> {
    async fn list(&self) -> Result<Vec<T>, AppError> {
        Ok(self.items.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<T>, AppError> {
        Ok(self.items.iter().find(|r| r.id() == id).cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<T>, AppError> {
        Ok(search_records(&self.items, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{Customer, CustomerStatus, CustomerType};

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            phone: "0500000000".to_string(),
            email: None,
            registration_number: None,
            address: None,
            customer_type: CustomerType::Individual,
            status: CustomerStatus::Active,
        }
    }

    fn provider() -> InMemoryProvider<Customer> {
        InMemoryProvider::new(vec![
            customer("c1", "Ahmed Al-Harbi"),
            customer("c2", "Noor Trading Company"),
            customer("c3", "أحمد السالم"),
        ])
    }

    #[tokio::test]
    async fn list_returns_everything_in_order() {
        let all = provider().list().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
    }

    #[tokio::test]
    async fn find_by_id() {
        let p = provider();
        assert_eq!(p.find("c2").await.unwrap().unwrap().name, "Noor Trading Company");
        assert!(p.find("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let hits = provider().search("ahmed").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c1");

        let arabic = provider().search("أحمد").await.unwrap();
        assert_eq!(arabic.len(), 1);
        assert_eq!(arabic[0].id, "c3");
    }

    #[test]
    fn collection_keys_parse() {
        assert_eq!(Collection::parse("agencies"), Some(Collection::Agencies));
        assert_eq!(Collection::parse("judges"), None);
    }
}
