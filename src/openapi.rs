use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    ClassCreationState, ClassFormat, ClassId, ClassPage, ClassSize, ClassStatus, ClassSummary,
    DayOfWeek, DeliveryMode, DisplayTimeSlot, DurationType, Frequency, MaterialRef,
    SubmitResponse, SyllabusEntry, TimeSlot,
};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        components.add_security_scheme(
            "query_token",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new("token"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::list_classes,
        crate::handlers::create_class,
        crate::handlers::update_class
    ),
    components(schemas(
        ClassCreationState,
        ClassId,
        ClassPage,
        ClassSummary,
        DisplayTimeSlot,
        SubmitResponse,
        TimeSlot,
        SyllabusEntry,
        MaterialRef,
        DeliveryMode,
        ClassFormat,
        ClassSize,
        DurationType,
        Frequency,
        DayOfWeek,
        ClassStatus
    )),
    tags(
        (name = "classes", description = "Tutoring class creation and listing")
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;
