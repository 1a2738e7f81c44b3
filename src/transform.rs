use crate::models::{
    Address, BasicDetails, ClassCreationState, FormState, Location, Pricing, Schedule,
};

/// Reshapes flat wizard state into the nested persistence record.
///
/// Structural only: values are copied as they are, nothing is validated.
pub fn transform(state: &ClassCreationState) -> FormState {
    FormState {
        delivery_mode: state.delivery_mode,
        class_format: state.class_format,
        class_size: state.class_size,
        duration_type: state.duration_type,
        basic_details: BasicDetails {
            title: state.title.clone(),
            subject: state.subject.clone(),
            description: state.description.clone(),
            thumbnail: state.thumbnail.clone(),
        },
        schedule: Schedule {
            frequency: state.frequency,
            start_date: state.start_date,
            end_date: state.end_date,
            enrollment_deadline: state.enrollment_deadline,
            total_sessions: state.total_sessions,
        },
        pricing: Pricing {
            price: state.price,
            currency: state.currency.clone(),
            max_students: state.max_students,
            auto_renewal: state.auto_renewal,
        },
        location: Location {
            meeting_link: state.meeting_link.clone(),
            address: Address {
                street: state.street.clone(),
                city: state.city.clone(),
                state: state.state.clone(),
                zip_code: state.zip_code.clone(),
                country: state.country.clone(),
            },
        },
        time_slots: state.time_slots.clone(),
        syllabus: state.syllabus.clone(),
        materials: state.materials.clone(),
    }
}

impl FormState {
    pub fn into_creation_state(self) -> ClassCreationState {
        let FormState {
            delivery_mode,
            class_format,
            class_size,
            duration_type,
            basic_details,
            schedule,
            pricing,
            location,
            time_slots,
            syllabus,
            materials,
        } = self;

        ClassCreationState {
            delivery_mode,
            class_format,
            class_size,
            duration_type,
            title: basic_details.title,
            subject: basic_details.subject,
            description: basic_details.description,
            thumbnail: basic_details.thumbnail,
            frequency: schedule.frequency,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            enrollment_deadline: schedule.enrollment_deadline,
            total_sessions: schedule.total_sessions,
            time_slots,
            price: pricing.price,
            currency: pricing.currency,
            max_students: pricing.max_students,
            auto_renewal: pricing.auto_renewal,
            meeting_link: location.meeting_link,
            street: location.address.street,
            city: location.address.city,
            state: location.address.state,
            zip_code: location.address.zip_code,
            country: location.address.country,
            syllabus,
            materials,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{
        ClassFormat, ClassSize, DayOfWeek, DeliveryMode, DurationType, Frequency, MaterialRef,
        SyllabusEntry, TimeSlot,
    };

    pub(crate) fn sample_state() -> ClassCreationState {
        ClassCreationState {
            delivery_mode: DeliveryMode::Offline,
            class_format: ClassFormat::Live,
            class_size: ClassSize::Group,
            duration_type: DurationType::Recurring,
            title: "Algebra Foundations".to_string(),
            subject: "Mathematics".to_string(),
            description: "Linear equations and inequalities".to_string(),
            thumbnail: Some("thumbs/algebra.png".to_string()),
            frequency: Some(Frequency::Weekly),
            start_date: NaiveDate::from_ymd_opt(2026, 11, 2),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 21),
            enrollment_deadline: NaiveDate::from_ymd_opt(2026, 10, 30),
            total_sessions: Some(8),
            time_slots: vec![TimeSlot {
                day: DayOfWeek::Monday,
                start_time: "17:00".to_string(),
                end_time: "18:30".to_string(),
            }],
            price: 49.5,
            currency: "USD".to_string(),
            max_students: 12,
            auto_renewal: true,
            meeting_link: None,
            street: Some("12 Elm Street".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip_code: Some("62701".to_string()),
            country: Some("USA".to_string()),
            syllabus: vec![SyllabusEntry {
                title: "Week 1".to_string(),
                description: "One-variable equations".to_string(),
                duration_minutes: Some(90),
            }],
            materials: vec![MaterialRef {
                name: "Workbook".to_string(),
                url: "https://cdn.example.com/workbook.pdf".to_string(),
                kind: Some("pdf".to_string()),
            }],
        }
    }

    #[test]
    fn test_transform_groups_fields() {
        let state = sample_state();
        let form = transform(&state);

        assert_eq!(form.delivery_mode, state.delivery_mode);
        assert_eq!(form.class_format, state.class_format);
        assert_eq!(form.class_size, state.class_size);
        assert_eq!(form.duration_type, state.duration_type);

        assert_eq!(form.basic_details.title, state.title);
        assert_eq!(form.basic_details.subject, state.subject);
        assert_eq!(form.basic_details.description, state.description);
        assert_eq!(form.basic_details.thumbnail, state.thumbnail);

        assert_eq!(form.schedule.frequency, state.frequency);
        assert_eq!(form.schedule.start_date, state.start_date);
        assert_eq!(form.schedule.end_date, state.end_date);
        assert_eq!(form.schedule.enrollment_deadline, state.enrollment_deadline);
        assert_eq!(form.schedule.total_sessions, state.total_sessions);

        assert_eq!(form.pricing.price, state.price);
        assert_eq!(form.pricing.currency, state.currency);
        assert_eq!(form.pricing.max_students, state.max_students);
        assert_eq!(form.pricing.auto_renewal, state.auto_renewal);

        assert_eq!(form.location.meeting_link, state.meeting_link);
        assert_eq!(form.location.address.street, state.street);
        assert_eq!(form.location.address.city, state.city);
        assert_eq!(form.location.address.state, state.state);
        assert_eq!(form.location.address.zip_code, state.zip_code);
        assert_eq!(form.location.address.country, state.country);

        assert_eq!(form.time_slots, state.time_slots);
        assert_eq!(form.syllabus, state.syllabus);
        assert_eq!(form.materials, state.materials);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let state = sample_state();
        assert_eq!(transform(&state), transform(&state));
    }

    #[test]
    fn test_transform_keeps_empty_strings() {
        let state = ClassCreationState {
            meeting_link: Some(String::new()),
            ..ClassCreationState::default()
        };
        let form = transform(&state);
        assert_eq!(form.location.meeting_link, Some(String::new()));
        assert_eq!(form.location.address.street, None);
    }

    #[test]
    fn test_into_creation_state_restores_input() {
        let state = sample_state();
        assert_eq!(transform(&state).into_creation_state(), state);
    }
}
