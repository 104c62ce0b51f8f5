use super::FactorProfile;
use serde::{Deserialize, Serialize};

pub const PROCEED_OVERALL: f64 = 75.0;
pub const ATTITUDINAL_FLOOR: u8 = 70;
pub const DOMAIN_KNOWLEDGE_FLOOR: u8 = 60;
pub const RECONSIDER_OVERALL: f64 = 55.0;

/// Final verdict of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Proceed,
    Reconsider,
    NotRecommended,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Proceed => "Proceed",
            Self::Reconsider => "Reconsider",
            Self::NotRecommended => "Not Recommended",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Proceed => "Excellent Fit!",
            Self::Reconsider => "Moderate Fit",
            Self::NotRecommended => "Consider Alternatives",
        }
    }
}

/// `(attitudinal + domain_knowledge + factor average) / 3`.
///
/// Computed as `(6a + 6d + factor total) / 18` so that integer inputs landing
/// exactly on a threshold produce exactly that threshold.
pub(crate) fn overall(attitudinal: u8, domain_knowledge: u8, profile: &FactorProfile) -> f64 {
    let blend = 6 * u32::from(attitudinal) + 6 * u32::from(domain_knowledge) + profile.total();
    f64::from(blend) / 18.0
}

/// Thresholds are inclusive.
pub fn classify(overall: f64, attitudinal: u8, domain_knowledge: u8) -> Recommendation {
    if overall >= PROCEED_OVERALL
        && attitudinal >= ATTITUDINAL_FLOOR
        && domain_knowledge >= DOMAIN_KNOWLEDGE_FLOOR
    {
        Recommendation::Proceed
    } else if overall >= RECONSIDER_OVERALL {
        Recommendation::Reconsider
    } else {
        Recommendation::NotRecommended
    }
}

pub(crate) fn decide_recommendation(
    attitudinal: u8,
    domain_knowledge: u8,
    profile: &FactorProfile,
) -> Recommendation {
    classify(
        overall(attitudinal, domain_knowledge, profile),
        attitudinal,
        domain_knowledge,
    )
}

/// `round(0.3 * attitudinal + 0.3 * domain_knowledge + 0.4 * factor average)`,
/// evaluated over sixtieths with halves rounded up.
pub(crate) fn confidence(attitudinal: u8, domain_knowledge: u8, profile: &FactorProfile) -> u8 {
    let sixtieths = 18 * u32::from(attitudinal)
        + 18 * u32::from(domain_knowledge)
        + 4 * profile.total();
    ((sixtieths + 30) / 60).min(100) as u8
}
