//! Input records produced by the upstream extractor, and the typed profiles the scorer consumes.
//!
//! Personality values reach us on one of two scales. The raw record only carries numbers, so the
//! scale is made explicit here (`PersonalityScale`) and resolved exactly once, in
//! `TraitScores::into_percent`. A finite value outside its declared scale is rejected there,
//! e.g. an untagged `[0, 100]` map read under the `fraction` default.
//! The scorer accepts nothing but `PercentScores`.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::scoring::normalise::{fraction_to_percent, percent_to_percent, MAX_PERCENT};

// ────────────────────────────────────────────────────────────────────────────
// Scale handling
// ────────────────────────────────────────────────────────────────────────────

/// The numeric scale a personality map was produced on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityScale {
    /// `[0, 1]`, as emitted by the extractor.
    #[default]
    Fraction,
    /// `[0, 100]`
    Percent,
}

impl PersonalityScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityScale::Fraction => "fraction",
            PersonalityScale::Percent => "percent",
        }
    }

    /// Largest value the scale admits. The lower bound is always 0.
    pub fn upper_bound(&self) -> f64 {
        match self {
            PersonalityScale::Fraction => 1.0,
            PersonalityScale::Percent => MAX_PERCENT,
        }
    }
}

impl FromStr for PersonalityScale {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fraction" => Ok(PersonalityScale::Fraction),
            "percent" => Ok(PersonalityScale::Percent),
            other => Err(MatchError::InvalidArgument(format!(
                "unknown personality scale '{other}' (expected 'fraction' or 'percent')"
            ))),
        }
    }
}

/// Trait map exactly as it arrives: a plain object, or a list of `[trait, value]` entries
/// (how map-like containers serialize). `null` values are malformed numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTraits {
    Map(BTreeMap<String, Option<f64>>),
    Entries(Vec<(String, Option<f64>)>),
}

impl Default for RawTraits {
    fn default() -> Self {
        RawTraits::Map(BTreeMap::new())
    }
}

impl RawTraits {
    /// Flattens either shape into a plain map. Duplicate entries: last one wins.
    /// Missing numbers become NaN so the safe-score guard zeroes them downstream.
    fn into_map(self) -> BTreeMap<String, f64> {
        let entries = match self {
            RawTraits::Map(map) => map.into_iter().collect::<Vec<_>>(),
            RawTraits::Entries(entries) => entries,
        };
        entries
            .into_iter()
            .map(|(name, value)| (name, value.unwrap_or(f64::NAN)))
            .collect()
    }
}

/// Trait scores tagged with the scale they were produced on.
#[derive(Debug, Clone, PartialEq)]
pub enum TraitScores {
    Fraction(BTreeMap<String, f64>),
    Percent(BTreeMap<String, f64>),
}

impl TraitScores {
    pub fn from_raw(raw: RawTraits, scale: PersonalityScale) -> Self {
        let values = raw.into_map();
        match scale {
            PersonalityScale::Fraction => TraitScores::Fraction(values),
            PersonalityScale::Percent => TraitScores::Percent(values),
        }
    }

    pub fn scale(&self) -> PersonalityScale {
        match self {
            TraitScores::Fraction(_) => PersonalityScale::Fraction,
            TraitScores::Percent(_) => PersonalityScale::Percent,
        }
    }

    /// The single normalization step: round to an integer percentage in `[0, 100]`.
    /// Non-finite values become `0`. A finite value outside the declared scale is an
    /// `InvalidArgument` naming the trait.
    pub fn into_percent(self) -> Result<PercentScores, MatchError> {
        let scale = self.scale();
        match self {
            TraitScores::Fraction(values) => convert_all(values, scale, fraction_to_percent),
            TraitScores::Percent(values) => convert_all(values, scale, percent_to_percent),
        }
    }
}

fn convert_all(
    values: BTreeMap<String, f64>,
    scale: PersonalityScale,
    convert: fn(f64) -> f64,
) -> Result<PercentScores, MatchError> {
    let upper = scale.upper_bound();
    values
        .into_iter()
        .map(|(name, value)| {
            if value.is_finite() && !(0.0..=upper).contains(&value) {
                return Err(MatchError::InvalidArgument(format!(
                    "personality trait '{name}' is {value}, outside the {} scale [0, {upper}] \
                     (set personalityScale on the record if it uses another scale)",
                    scale.as_str()
                )));
            }
            Ok((name, convert(value)))
        })
        .collect()
}

/// Trait scores on the `[0, 100]` scale. The only personality input the scorer takes.
///
/// Values inserted directly are trusted as percentages; the scorer still applies the
/// safe-score guard to each of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PercentScores(BTreeMap<String, f64>);

impl PercentScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, trait_name: impl Into<String>, score: f64) {
        self.0.insert(trait_name.into(), score);
    }

    pub fn get(&self, trait_name: &str) -> Option<f64> {
        self.0.get(trait_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PercentScores {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        PercentScores(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer-facing profiles
// ────────────────────────────────────────────────────────────────────────────

/// Candidate metadata passed through to the report untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMeta {
    pub name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub meta: CandidateMeta,
    pub skills: Vec<String>,
    pub personality: PercentScores,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobRequirements {
    pub job_title: Option<String>,
    pub required_skills: Vec<String>,
    pub ideal_personality: PercentScores,
}

// ────────────────────────────────────────────────────────────────────────────
// Raw extractor records
// ────────────────────────────────────────────────────────────────────────────

/// Candidate record as emitted by the resume extractor. Extra keys (`phone`, `location`,
/// `raw_text_length`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub personality: RawTraits,
    #[serde(default)]
    pub personality_scale: Option<PersonalityScale>,
}

impl CandidateRecord {
    /// Resolves the personality scale (record's own tag, else `default_scale`).
    pub fn into_profile(
        self,
        default_scale: PersonalityScale,
    ) -> Result<CandidateProfile, MatchError> {
        let scale = self.personality_scale.unwrap_or(default_scale);
        Ok(CandidateProfile {
            meta: CandidateMeta {
                name: self.name,
                email: self.email,
                job_title: self.job_title,
                summary: self.summary,
            },
            skills: self.skills,
            personality: TraitScores::from_raw(self.personality, scale).into_percent()?,
        })
    }
}

/// Job record as emitted by the job-description extractor. Accepts the extractor's
/// upper-case keys as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(default, alias = "REQUIRED_SKILLS")]
    pub required_skills: Vec<String>,
    #[serde(default, alias = "IDEAL_PERSONALITY")]
    pub ideal_personality: RawTraits,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub personality_scale: Option<PersonalityScale>,
}

impl JobRecord {
    pub fn into_requirements(
        self,
        default_scale: PersonalityScale,
    ) -> Result<JobRequirements, MatchError> {
        let scale = self.personality_scale.unwrap_or(default_scale);
        Ok(JobRequirements {
            job_title: self.job_title,
            required_skills: self.required_skills,
            ideal_personality: TraitScores::from_raw(self.ideal_personality, scale)
                .into_percent()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scale_from_str() {
        assert_eq!("fraction".parse::<PersonalityScale>().unwrap(), PersonalityScale::Fraction);
        assert_eq!(" Percent ".parse::<PersonalityScale>().unwrap(), PersonalityScale::Percent);
        assert!("ratio".parse::<PersonalityScale>().is_err());
    }

    #[test]
    fn test_fraction_scores_become_rounded_percentages() {
        let raw: RawTraits =
            serde_json::from_value(json!({"Openness": 0.804, "Neuroticism": 0.156})).unwrap();
        let scores = TraitScores::from_raw(raw, PersonalityScale::Fraction).into_percent().unwrap();
        assert_eq!(scores.get("Openness"), Some(80.0));
        assert_eq!(scores.get("Neuroticism"), Some(16.0));
    }

    #[test]
    fn test_fraction_scale_bounds_are_inclusive() {
        let raw: RawTraits =
            serde_json::from_value(json!({"Openness": 1.0, "Agreeableness": 0.0})).unwrap();
        let scores = TraitScores::from_raw(raw, PersonalityScale::Fraction).into_percent().unwrap();
        assert_eq!(scores.get("Openness"), Some(100.0));
        assert_eq!(scores.get("Agreeableness"), Some(0.0));
    }

    #[test]
    fn test_fraction_value_above_one_is_rejected() {
        let raw: RawTraits = serde_json::from_value(json!({"Openness": 1.7})).unwrap();
        let err = TraitScores::from_raw(raw, PersonalityScale::Fraction)
            .into_percent()
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidArgument(_)));
        assert!(err.to_string().contains("Openness"), "got {err}");
    }

    #[test]
    fn test_negative_value_is_rejected_on_either_scale() {
        for scale in [PersonalityScale::Fraction, PersonalityScale::Percent] {
            let raw: RawTraits = serde_json::from_value(json!({"Agreeableness": -0.2})).unwrap();
            assert!(TraitScores::from_raw(raw, scale).into_percent().is_err());
        }
    }

    #[test]
    fn test_untagged_percent_map_read_as_fraction_is_rejected() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "personality": {"Openness": 80, "Neuroticism": 15}
        }))
        .unwrap();
        let err = record.into_profile(PersonalityScale::Fraction).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Neuroticism") || msg.contains("Openness"), "got {msg}");
        assert!(msg.contains("fraction"), "got {msg}");
    }

    #[test]
    fn test_percent_scores_are_not_rescaled() {
        let raw: RawTraits = serde_json::from_value(json!({"Openness": 80})).unwrap();
        let scores = TraitScores::from_raw(raw, PersonalityScale::Percent).into_percent().unwrap();
        assert_eq!(scores.get("Openness"), Some(80.0));
    }

    #[test]
    fn test_percent_scores_rounded() {
        let raw: RawTraits =
            serde_json::from_value(json!({"Openness": 72.6, "Extraversion": 100})).unwrap();
        let scores = TraitScores::from_raw(raw, PersonalityScale::Percent).into_percent().unwrap();
        assert_eq!(scores.get("Openness"), Some(73.0));
        assert_eq!(scores.get("Extraversion"), Some(100.0));
    }

    #[test]
    fn test_percent_value_above_hundred_is_rejected() {
        let raw: RawTraits = serde_json::from_value(json!({"Extraversion": 150})).unwrap();
        assert!(TraitScores::from_raw(raw, PersonalityScale::Percent)
            .into_percent()
            .is_err());
    }

    #[test]
    fn test_null_value_coerces_to_zero() {
        let raw: RawTraits = serde_json::from_value(json!({"Openness": null})).unwrap();
        let scores = TraitScores::from_raw(raw, PersonalityScale::Fraction).into_percent().unwrap();
        assert_eq!(scores.get("Openness"), Some(0.0));
    }

    #[test]
    fn test_entry_list_shape_is_accepted() {
        let raw: RawTraits = serde_json::from_value(json!([
            ["Openness", 0.5],
            ["Conscientiousness", 0.9],
            ["Openness", 0.7]
        ]))
        .unwrap();
        assert!(matches!(raw, RawTraits::Entries(_)));
        let scores = TraitScores::from_raw(raw, PersonalityScale::Fraction).into_percent().unwrap();
        assert_eq!(scores.len(), 2);
        // last duplicate wins
        assert_eq!(scores.get("Openness"), Some(70.0));
        assert_eq!(scores.get("Conscientiousness"), Some(90.0));
    }

    #[test]
    fn test_trait_scores_report_their_scale() {
        let raw = RawTraits::default();
        assert_eq!(
            TraitScores::from_raw(raw.clone(), PersonalityScale::Percent).scale(),
            PersonalityScale::Percent
        );
        assert_eq!(
            TraitScores::from_raw(raw, PersonalityScale::Fraction).scale(),
            PersonalityScale::Fraction
        );
    }

    #[test]
    fn test_candidate_record_ignores_extra_keys() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "name": "Ada Lovelace",
            "jobTitle": "Engineer",
            "email": "ada@example.com",
            "phone": "5551234567",
            "summary": "Analytical engine enthusiast",
            "skills": ["Python", "SQL"],
            "personality": {"Openness": 0.8},
            "raw_text_length": 1200,
            "location": "Location N/A"
        }))
        .unwrap();
        let profile = record.into_profile(PersonalityScale::Fraction).unwrap();
        assert_eq!(profile.meta.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.meta.job_title.as_deref(), Some("Engineer"));
        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert_eq!(profile.personality.get("Openness"), Some(80.0));
    }

    #[test]
    fn test_record_scale_tag_overrides_default() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "personality": {"Openness": 80},
            "personalityScale": "percent"
        }))
        .unwrap();
        let profile = record.into_profile(PersonalityScale::Fraction).unwrap();
        assert_eq!(profile.personality.get("Openness"), Some(80.0));
    }

    #[test]
    fn test_job_record_accepts_extractor_keys() {
        let record: JobRecord = serde_json::from_value(json!({
            "REQUIRED_SKILLS": ["Python", "Docker"],
            "IDEAL_PERSONALITY": {"Conscientiousness": 0.9, "Neuroticism": 0.15}
        }))
        .unwrap();
        let job = record.into_requirements(PersonalityScale::Fraction).unwrap();
        assert_eq!(job.required_skills, vec!["Python", "Docker"]);
        assert_eq!(job.ideal_personality.get("Conscientiousness"), Some(90.0));
        assert_eq!(job.ideal_personality.get("Neuroticism"), Some(15.0));
        assert!(job.job_title.is_none());
    }

    #[test]
    fn test_job_record_camel_case_keys() {
        let record: JobRecord = serde_json::from_value(json!({
            "requiredSkills": ["Rust"],
            "idealPersonality": {"Openness": 60},
            "jobTitle": "Backend Engineer",
            "personalityScale": "percent"
        }))
        .unwrap();
        let job = record.into_requirements(PersonalityScale::Fraction).unwrap();
        assert_eq!(job.job_title.as_deref(), Some("Backend Engineer"));
        assert_eq!(job.ideal_personality.get("Openness"), Some(60.0));
    }

    #[test]
    fn test_skills_must_be_a_list() {
        let result: Result<CandidateRecord, _> =
            serde_json::from_value(json!({"skills": "Python"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_percent_scores_from_iter() {
        let scores: PercentScores = [("Openness", 80.0), ("Agreeableness", 55.0)]
            .into_iter()
            .collect();
        assert_eq!(scores.len(), 2);
        assert!(!scores.is_empty());
        let names: Vec<&str> = scores.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Agreeableness", "Openness"]);
    }
}
