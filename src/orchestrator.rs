use tracing::info;

use crate::location::LocationPersister;
use crate::models::{ClassCreationState, ClassId, ClassRow, ClassStatus, FormState};
use crate::store::{ClassStore, LocationStore, StoreError};
use crate::transform::transform;
use crate::wizard::{ClassWizard, SubmitTarget};

pub fn class_row(form: &FormState, status: ClassStatus) -> ClassRow {
    ClassRow {
        title: form.basic_details.title.clone(),
        subject: form.basic_details.subject.clone(),
        description: form.basic_details.description.clone(),
        thumbnail_url: form.basic_details.thumbnail.clone(),
        delivery_mode: form.delivery_mode,
        class_format: form.class_format,
        class_size: form.class_size,
        duration_type: form.duration_type,
        frequency: form.schedule.frequency,
        start_date: form.schedule.start_date,
        end_date: form.schedule.end_date,
        enrollment_deadline: form.schedule.enrollment_deadline,
        total_sessions: form.schedule.total_sessions,
        price: form.pricing.price,
        currency: form.pricing.currency.clone(),
        max_students: form.pricing.max_students,
        auto_renewal: form.pricing.auto_renewal,
        time_slots: form.time_slots.clone(),
        syllabus: form.syllabus.clone(),
        materials: form.materials.clone(),
        status,
    }
}

/// Runs a class submission: transform, class record, then location.
///
/// Calls are strictly sequential and the first store error ends the
/// submission. Callers must not run two submissions for the same class
/// concurrently.
pub struct ClassSubmitter<'a, S> {
    store: &'a S,
}

impl<'a, S> ClassSubmitter<'a, S>
where
    S: ClassStore + LocationStore + Sync,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn submit(
        &self,
        state: &ClassCreationState,
        target: &SubmitTarget,
        status: ClassStatus,
    ) -> Result<ClassId, StoreError> {
        let form = transform(state);
        let row = class_row(&form, status);

        let class_id = match target {
            SubmitTarget::Create => self.store.insert_class(&row).await?,
            SubmitTarget::Edit(id) => {
                self.store.update_class(id, &row).await?;
                id.clone()
            }
        };

        LocationPersister::new(self.store)
            .persist_location(&form, &class_id, target.is_editing())
            .await?;

        info!(class_id = %class_id, ?status, editing = target.is_editing(), "class submitted");
        Ok(class_id)
    }

    pub async fn save_draft(
        &self,
        state: &ClassCreationState,
        target: &SubmitTarget,
    ) -> Result<ClassId, StoreError> {
        self.submit(state, target, ClassStatus::Draft).await
    }

    pub async fn submit_wizard(
        &self,
        wizard: ClassWizard,
        status: ClassStatus,
    ) -> Result<ClassId, StoreError> {
        let (state, target) = wizard.into_parts();
        self.submit(&state, &target, status).await
    }
}
