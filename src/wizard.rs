use serde::{Deserialize, Serialize};

use crate::models::{
    ClassCreationState, ClassId, DayOfWeek, FormState, MaterialRef, SyllabusEntry, TimeSlot,
};
use crate::time_codec::parse_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    BasicDetails,
    Schedule,
    Pricing,
    Location,
    Syllabus,
    Materials,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::BasicDetails,
        WizardStep::Schedule,
        WizardStep::Pricing,
        WizardStep::Location,
        WizardStep::Syllabus,
        WizardStep::Materials,
        WizardStep::Review,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Edit(ClassId),
}

impl SubmitTarget {
    pub fn is_editing(&self) -> bool {
        matches!(self, SubmitTarget::Edit(_))
    }
}

#[derive(Debug, Clone)]
pub struct ClassWizard {
    state: ClassCreationState,
    step: WizardStep,
    editing: Option<ClassId>,
}

impl Default for ClassWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassWizard {
    pub fn new() -> Self {
        Self {
            state: ClassCreationState::default(),
            step: WizardStep::BasicDetails,
            editing: None,
        }
    }

    pub fn editing(class_id: ClassId, stored: FormState) -> Self {
        Self {
            state: stored.into_creation_state(),
            step: WizardStep::BasicDetails,
            editing: Some(class_id),
        }
    }

    pub fn state(&self) -> &ClassCreationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ClassCreationState {
        &mut self.state
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    pub fn next_step(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    pub fn previous_step(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    pub fn target(&self) -> SubmitTarget {
        match &self.editing {
            Some(id) => SubmitTarget::Edit(id.clone()),
            None => SubmitTarget::Create,
        }
    }

    pub fn add_time_slot(&mut self, day: DayOfWeek, start: &str, end: &str) {
        self.state.time_slots.push(TimeSlot {
            day,
            start_time: parse_time(start),
            end_time: parse_time(end),
        });
    }

    pub fn remove_time_slot(&mut self, index: usize) -> Option<TimeSlot> {
        (index < self.state.time_slots.len()).then(|| self.state.time_slots.remove(index))
    }

    pub fn add_syllabus_entry(&mut self, entry: SyllabusEntry) {
        self.state.syllabus.push(entry);
    }

    pub fn remove_syllabus_entry(&mut self, index: usize) -> Option<SyllabusEntry> {
        (index < self.state.syllabus.len()).then(|| self.state.syllabus.remove(index))
    }

    pub fn add_material(&mut self, material: MaterialRef) {
        self.state.materials.push(material);
    }

    pub fn remove_material(&mut self, index: usize) -> Option<MaterialRef> {
        (index < self.state.materials.len()).then(|| self.state.materials.remove(index))
    }

    pub fn into_parts(self) -> (ClassCreationState, SubmitTarget) {
        let target = self.target();
        (self.state, target)
    }
}
