use axum::extract::{Path, Query, State};
use axum::{Json, http::StatusCode, response::IntoResponse};
use axum_extra::extract::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};

use crate::models::{
    ClassCreationState, ClassId, ClassPage, ClassStatus, ClassSummary, DisplayTimeSlot,
    StoredClass, SubmitResponse,
};
use crate::orchestrator::ClassSubmitter;
use crate::pagination::Paginator;
use crate::store::ClassStore;
use crate::time_codec::format_time;
use crate::wizard::SubmitTarget;
use crate::{AppState, auth::verify_token, error::ApiError};

#[derive(Debug, serde::Deserialize)]
pub struct SubmitQuery {
    #[serde(default)]
    pub draft: bool,
    pub token: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

async fn submit_form(
    state: &AppState,
    form: &ClassCreationState,
    target: &SubmitTarget,
    draft: bool,
) -> Result<SubmitResponse, ApiError> {
    let submitter = ClassSubmitter::new(&*state.store);
    let (class_id, status) = if draft {
        (submitter.save_draft(form, target).await?, ClassStatus::Draft)
    } else {
        let status = ClassStatus::Published;
        (submitter.submit(form, target, status).await?, status)
    };
    Ok(SubmitResponse { class_id, status })
}

fn summarize(class: StoredClass) -> ClassSummary {
    let StoredClass { id, row } = class;
    ClassSummary {
        id,
        title: row.title,
        subject: row.subject,
        thumbnail_url: row.thumbnail_url,
        delivery_mode: row.delivery_mode,
        class_size: row.class_size,
        price: row.price,
        currency: row.currency,
        time_slots: row
            .time_slots
            .iter()
            .map(|slot| DisplayTimeSlot {
                day: slot.day,
                start: format_time(&slot.start_time),
                end: format_time(&slot.end_time),
            })
            .collect(),
    }
}

#[utoipa::path(get, path = "/", tag = "classes")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Tutor Classes API",
        "endpoints": {
            "/classes": "List published classes (GET) or create a class (POST)",
            "/classes/{id}": "Edit an existing class (PUT)"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "classes")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "classes")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/classes",
    params(
        ("page" = Option<usize>, Query, description = "Page number, clamped into the available range")
    ),
    responses(
        (status = 200, description = "One page of published classes", body = ClassPage),
        (status = 502, description = "Class store unavailable")
    ),
    tag = "classes"
)]
pub async fn list_classes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let classes = state
        .store
        .list_classes(Some(ClassStatus::Published))
        .await?;

    let mut pager = Paginator::new(classes.len(), state.settings.items_per_page);
    pager.go_to_page(query.page);

    let items = pager
        .window(&classes)
        .iter()
        .cloned()
        .map(summarize)
        .collect();

    Ok(Json(ClassPage {
        items,
        page: pager.current_page(),
        total_pages: pager.total_pages(),
        total_items: pager.total_items(),
        has_next_page: pager.has_next_page(),
        has_previous_page: pager.has_previous_page(),
    }))
}

#[utoipa::path(
    post,
    path = "/classes",
    params(
        ("draft" = Option<bool>, Query, description = "Save as draft instead of publishing"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    request_body = ClassCreationState,
    responses(
        (status = 201, description = "Class created", body = SubmitResponse),
        (status = 401, description = "Invalid authentication token"),
        (status = 502, description = "Class store rejected the write")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "classes"
)]
pub async fn create_class(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Query(query): Query<SubmitQuery>,
    Json(form): Json<ClassCreationState>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    let response = submit_form(&state, &form, &SubmitTarget::Create, query.draft).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/classes/{id}",
    params(
        ("id" = String, Path, description = "Class identifier"),
        ("draft" = Option<bool>, Query, description = "Save as draft instead of publishing"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    request_body = ClassCreationState,
    responses(
        (status = 200, description = "Class updated", body = SubmitResponse),
        (status = 401, description = "Invalid authentication token"),
        (status = 404, description = "Class not found"),
        (status = 502, description = "Class store rejected the write")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "classes"
)]
pub async fn update_class(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Path(id): Path<String>,
    Query(query): Query<SubmitQuery>,
    Json(form): Json<ClassCreationState>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.settings, auth_header, query.token.as_deref())?;

    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("class id must not be empty".into()));
    }

    let target = SubmitTarget::Edit(ClassId::new(id));
    let response = submit_form(&state, &form, &target, query.draft).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassRow, DayOfWeek, TimeSlot};
    use crate::orchestrator::class_row;
    use crate::transform::{tests::sample_state, transform};

    #[test]
    fn test_summarize_formats_time_slots() {
        let mut row: ClassRow = class_row(&transform(&sample_state()), ClassStatus::Published);
        row.time_slots = vec![TimeSlot {
            day: DayOfWeek::Wednesday,
            start_time: "00:15".to_string(),
            end_time: "13:30".to_string(),
        }];

        let summary = summarize(StoredClass {
            id: ClassId::new("c1"),
            row,
        });

        assert_eq!(summary.time_slots[0].start, "12:15 AM");
        assert_eq!(summary.time_slots[0].end, "1:30 PM");
        assert_eq!(summary.title, "Algebra Foundations");
    }
}
