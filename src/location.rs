use tracing::{debug, info};

use crate::models::{ClassId, FormState, Location, LocationRow};
use crate::store::{LocationStore, StoreError};

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

pub fn has_location_data(location: &Location) -> bool {
    is_filled(&location.meeting_link)
        || is_filled(&location.address.street)
        || is_filled(&location.address.city)
}

pub fn location_row(form_state: &FormState, class_id: &ClassId) -> LocationRow {
    let location = &form_state.location;
    LocationRow {
        class_id: class_id.clone(),
        meeting_link: location.meeting_link.clone(),
        street: location.address.street.clone(),
        city: location.address.city.clone(),
        state: location.address.state.clone(),
        zip_code: location.address.zip_code.clone(),
        country: location.address.country.clone(),
    }
}

pub struct LocationPersister<'a, S> {
    store: &'a S,
}

impl<'a, S: LocationStore + Sync> LocationPersister<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Without location data nothing is written, not even the delete, so an
    /// edit that clears every location field leaves the previous row in place.
    ///
    /// When editing, existing rows are deleted before the insert. Store errors
    /// are returned as they are; a failed insert after a successful delete
    /// leaves the class without a location row.
    pub async fn persist_location(
        &self,
        form_state: &FormState,
        class_id: &ClassId,
        is_editing: bool,
    ) -> Result<(), StoreError> {
        if !has_location_data(&form_state.location) {
            debug!(class_id = %class_id, "no location data, skipping location write");
            return Ok(());
        }

        if is_editing {
            self.store.delete_locations(class_id).await?;
        }

        let row = location_row(form_state, class_id);
        self.store.insert_location(&row).await?;
        info!(class_id = %class_id, replaced = is_editing, "stored class location");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;
    use crate::store::testing::{RecordingStore, StoreCall};

    fn form_with(location: Location) -> FormState {
        FormState {
            location,
            ..FormState::default()
        }
    }

    fn online_form() -> FormState {
        form_with(Location {
            meeting_link: Some("https://meet.example.com/abc".to_string()),
            address: Address::default(),
        })
    }

    #[test]
    fn test_has_location_data() {
        assert!(!has_location_data(&Location::default()));
        assert!(!has_location_data(&Location {
            meeting_link: Some(String::new()),
            address: Address {
                street: Some(String::new()),
                city: None,
                state: Some("IL".to_string()),
                zip_code: Some("62701".to_string()),
                country: Some("USA".to_string()),
            },
        }));
        assert!(has_location_data(&Location {
            meeting_link: None,
            address: Address {
                city: Some("Springfield".to_string()),
                ..Address::default()
            },
        }));
    }

    #[tokio::test]
    async fn test_no_location_data_skips_store() {
        let store = RecordingStore::default();
        let persister = LocationPersister::new(&store);
        let class_id = ClassId::new("c1");

        persister
            .persist_location(&FormState::default(), &class_id, false)
            .await
            .unwrap();
        persister
            .persist_location(&FormState::default(), &class_id, true)
            .await
            .unwrap();

        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_inserts_only() {
        let store = RecordingStore::default();
        let class_id = ClassId::new("c1");
        let form = online_form();

        LocationPersister::new(&store)
            .persist_location(&form, &class_id, false)
            .await
            .unwrap();

        assert_eq!(
            store.calls(),
            vec![StoreCall::InsertLocation(location_row(&form, &class_id))]
        );
    }

    #[tokio::test]
    async fn test_edit_deletes_then_inserts() {
        let store = RecordingStore::default();
        let class_id = ClassId::new("c1");
        let form = form_with(Location {
            meeting_link: None,
            address: Address {
                street: Some("12 Elm Street".to_string()),
                city: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                zip_code: Some("62701".to_string()),
                country: Some("USA".to_string()),
            },
        });

        LocationPersister::new(&store)
            .persist_location(&form, &class_id, true)
            .await
            .unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], StoreCall::DeleteLocations(class_id.clone()));
        let StoreCall::InsertLocation(row) = &calls[1] else {
            panic!("expected insert, got {:?}", calls[1]);
        };
        assert_eq!(row.class_id, class_id);
        assert_eq!(row.street.as_deref(), Some("12 Elm Street"));
        assert_eq!(row.zip_code.as_deref(), Some("62701"));
        assert_eq!(row.meeting_link, None);
    }

    #[tokio::test]
    async fn test_failed_delete_skips_insert() {
        let store = RecordingStore {
            fail_delete: true,
            ..RecordingStore::default()
        };
        let class_id = ClassId::new("c1");

        let err = LocationPersister::new(&store)
            .persist_location(&online_form(), &class_id, true)
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Status { status: 500, .. }));
        assert_eq!(store.calls(), vec![StoreCall::DeleteLocations(class_id)]);
    }

    #[tokio::test]
    async fn test_failed_insert_propagates() {
        let store = RecordingStore {
            fail_insert_location: true,
            ..RecordingStore::default()
        };

        let result = LocationPersister::new(&store)
            .persist_location(&online_form(), &ClassId::new("c1"), true)
            .await;

        assert!(result.is_err());
        assert_eq!(store.calls().len(), 2);
    }
}
