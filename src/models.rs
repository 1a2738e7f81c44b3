use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ClassId(pub String);

// Stores hand out either text (uuid) or integer keys.
impl<'de> Deserialize<'de> for ClassId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self(id.to_string()),
        })
    }
}

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    #[default]
    Online,
    Offline,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClassFormat {
    #[default]
    Live,
    Recorded,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClassSize {
    OneOnOne,
    #[default]
    Group,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DurationType {
    #[default]
    Recurring,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeSlot {
    pub day: DayOfWeek,
    #[schema(example = "13:30")]
    pub start_time: String,
    #[schema(example = "14:30")]
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SyllabusEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MaterialRef {
    pub name: String,
    pub url: String,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ClassCreationState {
    pub delivery_mode: DeliveryMode,
    pub class_format: ClassFormat,
    pub class_size: ClassSize,
    pub duration_type: DurationType,

    pub title: String,
    pub subject: String,
    pub description: String,
    pub thumbnail: Option<String>,

    pub frequency: Option<Frequency>,
    #[schema(value_type = Option<String>, format = "date", example = "2026-11-02")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub enrollment_deadline: Option<NaiveDate>,
    pub total_sessions: Option<u32>,
    pub time_slots: Vec<TimeSlot>,

    pub price: f64,
    pub currency: String,
    pub max_students: u32,
    pub auto_renewal: bool,

    pub meeting_link: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,

    pub syllabus: Vec<SyllabusEntry>,
    pub materials: Vec<MaterialRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BasicDetails {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Schedule {
    pub frequency: Option<Frequency>,
    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = "date")]
    pub enrollment_deadline: Option<NaiveDate>,
    pub total_sessions: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pricing {
    pub price: f64,
    pub currency: String,
    pub max_students: u32,
    pub auto_renewal: bool,
}

/// Postal address; every component is optional so a missing address and an
/// empty one stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub meeting_link: Option<String>,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FormState {
    pub delivery_mode: DeliveryMode,
    pub class_format: ClassFormat,
    pub class_size: ClassSize,
    pub duration_type: DurationType,
    pub basic_details: BasicDetails,
    pub schedule: Schedule,
    pub pricing: Pricing,
    pub location: Location,
    pub time_slots: Vec<TimeSlot>,
    pub syllabus: Vec<SyllabusEntry>,
    pub materials: Vec<MaterialRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRow {
    pub class_id: ClassId,
    pub meeting_link: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

// Nullable columns read back from the store fall back to their defaults.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRow {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delivery_mode: DeliveryMode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_format: ClassFormat,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_size: ClassSize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_type: DurationType,
    pub frequency: Option<Frequency>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub enrollment_deadline: Option<NaiveDate>,
    pub total_sessions: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_students: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_renewal: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub syllabus: Vec<SyllabusEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub materials: Vec<MaterialRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ClassStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredClass {
    pub id: ClassId,
    #[serde(flatten)]
    pub row: ClassRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DisplayTimeSlot {
    pub day: DayOfWeek,
    #[schema(example = "1:30 PM")]
    pub start: String,
    #[schema(example = "2:30 PM")]
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassSummary {
    pub id: ClassId,
    pub title: String,
    pub subject: String,
    pub thumbnail_url: Option<String>,
    pub delivery_mode: DeliveryMode,
    pub class_size: ClassSize,
    pub price: f64,
    pub currency: String,
    pub time_slots: Vec<DisplayTimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassPage {
    pub items: Vec<ClassSummary>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub class_id: ClassId,
    pub status: ClassStatus,
}
