use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

use super::Phase;
use crate::error::{SubmitError, SubmitRejected, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AgeGroup {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45+")]
    Over45,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::From18To24,
        AgeGroup::From25To34,
        AgeGroup::From35To44,
        AgeGroup::Over45,
    ];

    pub fn value(self) -> &'static str {
        match self {
            AgeGroup::From18To24 => "18-24",
            AgeGroup::From25To34 => "25-34",
            AgeGroup::From35To44 => "35-44",
            AgeGroup::Over45 => "45+",
        }
    }

    pub fn label(self) -> String {
        format!("{} years", self.value())
    }

    /// Parses a `<select>` value. The empty placeholder option yields `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|age| age.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TechComfort {
    Beginner,
    Intermediate,
    Advanced,
}

impl TechComfort {
    pub const ALL: [TechComfort; 3] = [
        TechComfort::Beginner,
        TechComfort::Intermediate,
        TechComfort::Advanced,
    ];

    pub fn value(self) -> &'static str {
        match self {
            TechComfort::Beginner => "beginner",
            TechComfort::Intermediate => "intermediate",
            TechComfort::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TechComfort::Beginner => "Beginner - I prefer simple apps",
            TechComfort::Intermediate => "Intermediate - I'm comfortable with most apps",
            TechComfort::Advanced => "Advanced - I love trying new tech features",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

/// The fixed catalog of features applicants can express interest in.
/// Declaration order is display order, and the order features are sent in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Feature {
    #[serde(rename = "Period Prediction & Tracking")]
    PeriodPrediction,
    #[serde(rename = "Pregnancy Week-by-Week Guide")]
    PregnancyGuide,
    #[serde(rename = "Postpartum Recovery Support")]
    PostpartumRecovery,
    #[serde(rename = "PCOD & Fertility Tracking")]
    PcodFertility,
    #[serde(rename = "Symptom & Mood Logging")]
    SymptomMoodLogging,
    #[serde(rename = "AI Health Insights")]
    AiHealthInsights,
    #[serde(rename = "Voice-Based Daily Tips")]
    VoiceDailyTips,
    #[serde(rename = "Community Support")]
    CommunitySupport,
}

impl Feature {
    pub const CATALOG: [Feature; 8] = [
        Feature::PeriodPrediction,
        Feature::PregnancyGuide,
        Feature::PostpartumRecovery,
        Feature::PcodFertility,
        Feature::SymptomMoodLogging,
        Feature::AiHealthInsights,
        Feature::VoiceDailyTips,
        Feature::CommunitySupport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Feature::PeriodPrediction => "Period Prediction & Tracking",
            Feature::PregnancyGuide => "Pregnancy Week-by-Week Guide",
            Feature::PostpartumRecovery => "Postpartum Recovery Support",
            Feature::PcodFertility => "PCOD & Fertility Tracking",
            Feature::SymptomMoodLogging => "Symptom & Mood Logging",
            Feature::AiHealthInsights => "AI Health Insights",
            Feature::VoiceDailyTips => "Voice-Based Daily Tips",
            Feature::CommunitySupport => "Community Support",
        }
    }
}

fn blank_if_none<T: Serialize, S: Serializer>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// A beta program application as sent to `/api/beta`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetaApplication {
    pub full_name: String,
    pub email: String,
    #[serde(serialize_with = "blank_if_none")]
    pub age: Option<AgeGroup>,
    pub health_goals: String,
    pub current_challenges: String,
    #[serde(serialize_with = "blank_if_none")]
    pub tech_comfort: Option<TechComfort>,
    pub features: BTreeSet<Feature>,
    pub feedback: String,
    pub newsletter: bool,
}

impl BetaApplication {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("Full Name");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            missing.push("Email Address");
        }
        if self.age.is_none() {
            missing.push("Age Group");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// One user edit. Each variant replaces exactly one field.
#[derive(Clone, Debug, PartialEq)]
pub enum BetaField {
    FullName(String),
    Email(String),
    Age(Option<AgeGroup>),
    HealthGoals(String),
    CurrentChallenges(String),
    TechComfort(Option<TechComfort>),
    Feedback(String),
    Newsletter(bool),
}

impl BetaField {
    fn apply(self, record: &mut BetaApplication) {
        match self {
            BetaField::FullName(v) => record.full_name = v,
            BetaField::Email(v) => record.email = v,
            BetaField::Age(v) => record.age = v,
            BetaField::HealthGoals(v) => record.health_goals = v,
            BetaField::CurrentChallenges(v) => record.current_challenges = v,
            BetaField::TechComfort(v) => record.tech_comfort = v,
            BetaField::Feedback(v) => record.feedback = v,
            BetaField::Newsletter(v) => record.newsletter = v,
        }
    }
}

/// What the form should tell the user after a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Invalid(ValidationError),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BetaForm {
    record: BetaApplication,
    phase: Phase,
    notice: Option<Notice>,
}

impl BetaForm {
    pub fn record(&self) -> &BetaApplication {
        &self.record
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Applies one edit. Ignored once the application has been submitted.
    pub fn edit(&mut self, field: BetaField) -> bool {
        if self.phase == Phase::Submitted {
            return false;
        }
        field.apply(&mut self.record);
        if matches!(self.notice, Some(Notice::Invalid(_))) {
            self.notice = None;
        }
        true
    }

    /// Adds the feature if absent, removes it if present.
    pub fn toggle_feature(&mut self, feature: Feature) -> bool {
        if self.phase == Phase::Submitted {
            return false;
        }
        if !self.record.features.remove(&feature) {
            self.record.features.insert(feature);
        }
        true
    }

    /// Validates and moves to `Submitting`. On success returns the payload
    /// the caller must send, exactly once.
    pub fn begin_submit(&mut self) -> Result<BetaApplication, SubmitRejected> {
        match self.phase {
            Phase::Submitting => return Err(SubmitRejected::InFlight),
            Phase::Submitted => return Err(SubmitRejected::Closed),
            Phase::Editing => {}
        }
        if let Err(invalid) = self.record.validate() {
            self.notice = Some(Notice::Invalid(invalid.clone()));
            return Err(invalid.into());
        }
        self.notice = None;
        self.phase = Phase::Submitting;
        Ok(self.record.clone())
    }

    /// Records the outcome of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match outcome {
            Ok(()) => self.phase = Phase::Submitted,
            Err(_) => {
                self.phase = Phase::Editing;
                self.notice = Some(Notice::Failed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> BetaForm {
        let mut form = BetaForm::default();
        form.edit(BetaField::FullName("Jane Doe".into()));
        form.edit(BetaField::Email("jane@x.com".into()));
        form.edit(BetaField::Age(AgeGroup::from_value("25-34")));
        form
    }

    #[test]
    fn edits_touch_only_their_field() {
        let mut form = filled();
        form.edit(BetaField::Feedback("love it".into()));
        form.toggle_feature(Feature::CommunitySupport);

        let before = form.record().clone();
        form.edit(BetaField::HealthGoals("sleep better".into()));

        let after = form.record();
        assert_eq!(after.health_goals, "sleep better");
        assert_eq!(
            BetaApplication {
                health_goals: before.health_goals.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn each_edit_changes_exactly_its_own_field() {
        let blank = BetaApplication::default();
        let cases = [
            (
                BetaField::FullName("A".into()),
                BetaApplication { full_name: "A".into(), ..blank.clone() },
            ),
            (
                BetaField::Email("a@b".into()),
                BetaApplication { email: "a@b".into(), ..blank.clone() },
            ),
            (
                BetaField::Age(Some(AgeGroup::Over45)),
                BetaApplication { age: Some(AgeGroup::Over45), ..blank.clone() },
            ),
            (
                BetaField::HealthGoals("g".into()),
                BetaApplication { health_goals: "g".into(), ..blank.clone() },
            ),
            (
                BetaField::CurrentChallenges("c".into()),
                BetaApplication { current_challenges: "c".into(), ..blank.clone() },
            ),
            (
                BetaField::TechComfort(Some(TechComfort::Advanced)),
                BetaApplication { tech_comfort: Some(TechComfort::Advanced), ..blank.clone() },
            ),
            (
                BetaField::Feedback("f".into()),
                BetaApplication { feedback: "f".into(), ..blank.clone() },
            ),
            (
                BetaField::Newsletter(true),
                BetaApplication { newsletter: true, ..blank.clone() },
            ),
        ];
        for (edit, expected) in cases {
            let mut form = BetaForm::default();
            form.edit(edit.clone());
            assert_eq!(form.record(), &expected, "after {:?}", edit);
        }
    }

    #[test]
    fn toggling_twice_is_a_no_op() {
        let mut form = filled();
        form.toggle_feature(Feature::PcodFertility);
        let before = form.record().features.clone();
        for feature in Feature::CATALOG {
            form.toggle_feature(feature);
            form.toggle_feature(feature);
        }
        assert_eq!(form.record().features, before);
    }

    #[test]
    fn missing_required_fields_never_produce_a_request() {
        let cases: [fn(&mut BetaForm); 4] = [
            |f| {
                f.edit(BetaField::FullName(String::new()));
            },
            |f| {
                f.edit(BetaField::Email(String::new()));
            },
            |f| {
                f.edit(BetaField::Age(None));
            },
            |f| {
                f.edit(BetaField::Email("not-an-email".into()));
            },
        ];
        for break_it in cases {
            let mut form = filled();
            break_it(&mut form);
            let result = form.begin_submit();
            assert!(matches!(result, Err(SubmitRejected::Invalid(_))));
            assert_eq!(form.phase(), Phase::Editing);
            assert!(matches!(form.notice(), Some(Notice::Invalid(_))));
        }
    }

    #[test]
    fn empty_form_lists_all_required_fields() {
        let mut form = BetaForm::default();
        let Err(SubmitRejected::Invalid(err)) = form.begin_submit() else {
            panic!("empty form should not submit");
        };
        assert_eq!(err.missing, vec!["Full Name", "Email Address", "Age Group"]);
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.phase(), Phase::Submitting);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn submitted_form_ignores_edits() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), Phase::Submitted);

        let frozen = form.record().clone();
        assert!(!form.edit(BetaField::FullName("Someone Else".into())));
        assert!(!form.toggle_feature(Feature::AiHealthInsights));
        assert_eq!(form.record(), &frozen);
        assert_eq!(form.phase(), Phase::Submitted);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Closed));
    }

    #[test]
    fn failure_returns_to_editing_with_values_intact() {
        let mut form = filled();
        form.toggle_feature(Feature::VoiceDailyTips);
        let before = form.record().clone();

        form.begin_submit().unwrap();
        form.finish_submit(Err(SubmitError::Status(500)));

        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.record(), &before);
        assert_eq!(form.notice(), Some(&Notice::Failed));

        // and can be submitted again by hand
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn stray_outcome_is_ignored() {
        let mut form = filled();
        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn jane_doe_scenario_sends_one_payload_with_no_features() {
        let mut form = filled();
        form.toggle_feature(Feature::AiHealthInsights);
        form.toggle_feature(Feature::AiHealthInsights);

        let mut requests = Vec::new();
        for _ in 0..3 {
            if let Ok(payload) = form.begin_submit() {
                requests.push(payload);
            }
        }
        assert_eq!(requests.len(), 1);
        assert_eq!(
            serde_json::to_value(&requests[0]).unwrap(),
            json!({
                "fullName": "Jane Doe",
                "email": "jane@x.com",
                "age": "25-34",
                "healthGoals": "",
                "currentChallenges": "",
                "techComfort": "",
                "features": [],
                "feedback": "",
                "newsletter": false
            })
        );
    }

    #[test]
    fn features_serialize_as_labels_in_catalog_order() {
        let mut form = filled();
        form.toggle_feature(Feature::CommunitySupport);
        form.toggle_feature(Feature::PeriodPrediction);
        form.edit(BetaField::TechComfort(TechComfort::from_value("beginner")));

        let value = serde_json::to_value(form.record()).unwrap();
        assert_eq!(
            value["features"],
            json!(["Period Prediction & Tracking", "Community Support"])
        );
        assert_eq!(value["techComfort"], json!("beginner"));
    }

    #[test]
    fn select_values_round_trip() {
        for age in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_value(age.value()), Some(age));
        }
        assert_eq!(AgeGroup::from_value(""), None);
        assert_eq!(TechComfort::from_value("expert"), None);
    }
}
