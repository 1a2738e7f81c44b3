use std::future::Future;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::{ClassId, ClassRow, ClassStatus, LocationRow, StoredClass};

pub const CLASSES_TABLE: &str = "classes";
pub const LOCATIONS_TABLE: &str = "class_locations";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Store responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid store URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Store did not return an id for the inserted class")]
    MissingId,
    #[error("Class {0} does not exist")]
    MissingRow(ClassId),
}

pub trait ClassStore {
    fn insert_class(
        &self,
        row: &ClassRow,
    ) -> impl Future<Output = Result<ClassId, StoreError>> + Send;

    fn update_class(
        &self,
        id: &ClassId,
        row: &ClassRow,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn list_classes(
        &self,
        status: Option<ClassStatus>,
    ) -> impl Future<Output = Result<Vec<StoredClass>, StoreError>> + Send;
}

pub trait LocationStore {
    fn delete_locations(
        &self,
        class_id: &ClassId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn insert_location(
        &self,
        row: &LocationRow,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

#[derive(Deserialize)]
struct InsertedRow {
    id: ClassId,
}

#[derive(Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: Arc<Url>,
    api_key: Arc<str>,
}

impl RestStore {
    pub fn new(mut base_url: Url, api_key: impl Into<String>) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::new(base_url),
            api_key: Arc::from(api_key.into()),
        }
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        Ok(self.base_url.join(&format!("rest/v1/{table}"))?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &*self.api_key)
            .bearer_auth(&*self.api_key)
    }

    async fn send(builder: RequestBuilder) -> Result<Response, StoreError> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl ClassStore for RestStore {
    async fn insert_class(&self, row: &ClassRow) -> Result<ClassId, StoreError> {
        let mut url = self.table_url(CLASSES_TABLE)?;
        url.query_pairs_mut().append_pair("select", "id");
        debug!(title = %row.title, "inserting class");

        let response = Self::send(
            self.request(Method::POST, url)
                .header("Prefer", "return=representation")
                .json(row),
        )
        .await?;
        let inserted: Vec<InsertedRow> = response.json().await?;
        inserted
            .into_iter()
            .next()
            .map(|r| r.id)
            .ok_or(StoreError::MissingId)
    }

    async fn update_class(&self, id: &ClassId, row: &ClassRow) -> Result<(), StoreError> {
        let mut url = self.table_url(CLASSES_TABLE)?;
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("select", "id");
        debug!(class_id = %id, "updating class");

        let response = Self::send(
            self.request(Method::PATCH, url)
                .header("Prefer", "return=representation")
                .json(row),
        )
        .await?;
        let updated: Vec<InsertedRow> = response.json().await?;
        if updated.is_empty() {
            return Err(StoreError::MissingRow(id.clone()));
        }
        Ok(())
    }

    async fn list_classes(
        &self,
        status: Option<ClassStatus>,
    ) -> Result<Vec<StoredClass>, StoreError> {
        let mut url = self.table_url(CLASSES_TABLE)?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("select", "*")
                .append_pair("order", "created_at.desc");
            match status {
                Some(ClassStatus::Draft) => {
                    query.append_pair("status", "eq.draft");
                }
                Some(ClassStatus::Published) => {
                    query.append_pair("status", "eq.published");
                }
                None => {}
            }
        }

        let response = Self::send(self.request(Method::GET, url)).await?;
        let classes: Vec<StoredClass> = response.json().await?;
        debug!(count = classes.len(), "listed classes");
        Ok(classes)
    }
}

impl LocationStore for RestStore {
    async fn delete_locations(&self, class_id: &ClassId) -> Result<(), StoreError> {
        let mut url = self.table_url(LOCATIONS_TABLE)?;
        url.query_pairs_mut()
            .append_pair("class_id", &format!("eq.{class_id}"));
        debug!(class_id = %class_id, "deleting class locations");

        Self::send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn insert_location(&self, row: &LocationRow) -> Result<(), StoreError> {
        let url = self.table_url(LOCATIONS_TABLE)?;
        debug!(class_id = %row.class_id, "inserting class location");

        Self::send(self.request(Method::POST, url).json(row)).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum StoreCall {
        InsertClass(ClassRow),
        UpdateClass(ClassId, ClassRow),
        ListClasses(Option<ClassStatus>),
        DeleteLocations(ClassId),
        InsertLocation(LocationRow),
    }

    #[derive(Default)]
    pub(crate) struct RecordingStore {
        pub(crate) calls: Mutex<Vec<StoreCall>>,
        pub(crate) fail_delete: bool,
        pub(crate) fail_insert_location: bool,
        pub(crate) fail_class_write: bool,
    }

    impl RecordingStore {
        pub(crate) fn calls(&self) -> Vec<StoreCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: StoreCall) {
            self.calls.lock().unwrap().push(call);
        }

        fn failure() -> StoreError {
            StoreError::Status {
                status: 500,
                body: "boom".to_string(),
            }
        }
    }

    impl ClassStore for RecordingStore {
        async fn insert_class(&self, row: &ClassRow) -> Result<ClassId, StoreError> {
            if self.fail_class_write {
                return Err(Self::failure());
            }
            self.record(StoreCall::InsertClass(row.clone()));
            Ok(ClassId::new("class-1"))
        }

        async fn update_class(&self, id: &ClassId, row: &ClassRow) -> Result<(), StoreError> {
            if self.fail_class_write {
                return Err(Self::failure());
            }
            self.record(StoreCall::UpdateClass(id.clone(), row.clone()));
            Ok(())
        }

        async fn list_classes(
            &self,
            status: Option<ClassStatus>,
        ) -> Result<Vec<StoredClass>, StoreError> {
            self.record(StoreCall::ListClasses(status));
            Ok(Vec::new())
        }
    }

    impl LocationStore for RecordingStore {
        async fn delete_locations(&self, class_id: &ClassId) -> Result<(), StoreError> {
            self.record(StoreCall::DeleteLocations(class_id.clone()));
            if self.fail_delete {
                return Err(Self::failure());
            }
            Ok(())
        }

        async fn insert_location(&self, row: &LocationRow) -> Result<(), StoreError> {
            self.record(StoreCall::InsertLocation(row.clone()));
            if self.fail_insert_location {
                return Err(Self::failure());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_keeps_base_path() {
        let store = RestStore::new(Url::parse("https://db.example.com/api").unwrap(), "key");
        let url = store.table_url(LOCATIONS_TABLE).unwrap();
        assert_eq!(url.as_str(), "https://db.example.com/api/rest/v1/class_locations");
    }

    #[test]
    fn test_inserted_row_accepts_numeric_id() {
        let rows: Vec<InsertedRow> = serde_json::from_str(r#"[{"id": 42}]"#).unwrap();
        assert_eq!(rows[0].id, ClassId::new("42"));
    }
}
