use super::super::bank::{
    AnswerKey, DETAIL_ORIENTED, NUMERICAL_REASONING, PREFERS_STRUCTURE, REGULATORY_SUBSET,
};
use super::super::responses::ResponseSet;
use super::FactorProfile;
use serde::{Deserialize, Serialize};

const STRONG_FIT: u8 = 70;
const MODERATE_ATTITUDE: u8 = 60;
const CURIOSITY_FLOOR: u8 = 60;
const TRAIT_AGREEMENT: u8 = 4;

/// Career path tier. Exactly one applies to any result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerTrack {
    Senior,
    Mid,
    Generalist,
}

impl CareerTrack {
    pub fn select(attitudinal: u8, domain_knowledge: u8) -> Self {
        if attitudinal >= STRONG_FIT && domain_knowledge >= STRONG_FIT {
            Self::Senior
        } else if attitudinal >= MODERATE_ATTITUDE {
            Self::Mid
        } else {
            Self::Generalist
        }
    }

    pub const fn titles(self) -> [&'static str; 3] {
        match self {
            Self::Senior => [
                "Risk Compliance Specialist",
                "Regulatory Affairs Officer",
                "Internal Auditor",
            ],
            Self::Mid => [
                "Compliance Analyst",
                "Business Process Analyst",
                "Corporate Policy Writer",
            ],
            Self::Generalist => ["Business Analyst", "Data Analyst", "Operations Specialist"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonalityType {
    AnalyticalConscientious,
    General,
}

impl PersonalityType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AnalyticalConscientious => "Analytical-Conscientious",
            Self::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillGap {
    NumericalReasoning,
    RegulatoryKnowledge,
}

impl SkillGap {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NumericalReasoning => "Numerical reasoning",
            Self::RegulatoryKnowledge => "Regulatory knowledge",
        }
    }
}

/// Topics to study, grouped by readiness tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub beginner: Vec<String>,
    pub intermediate: Vec<String>,
    pub job_ready: Vec<String>,
}

pub(crate) fn next_steps(
    attitudinal: u8,
    domain_knowledge: u8,
    profile: &FactorProfile,
) -> Vec<String> {
    let mut steps = Vec::new();

    if domain_knowledge < STRONG_FIT {
        steps.push("Study fundamental compliance regulations (GDPR, AML, SOX)");
        steps.push("Practice numerical reasoning and risk calculations");
    }

    if profile.demonstrated_skill < STRONG_FIT {
        steps.push("Develop proficiency in Excel and data analysis tools");
        steps.push("Practice writing formal reports and documentation");
    }

    if attitudinal >= STRONG_FIT && domain_knowledge >= STRONG_FIT {
        steps.push("Consider pursuing CRCM or CAMS certification");
        steps.push("Look for entry-level compliance analyst positions");
    }

    if profile.curiosity < CURIOSITY_FLOOR {
        steps.push("Shadow a compliance professional to better understand the role");
        steps.push("Explore related fields like business analysis or legal tech");
    }

    steps.into_iter().map(str::to_string).collect()
}

/// The path does not vary with the inputs yet; they are part of the
/// signature so personalised paths can slot in without touching callers.
pub(crate) fn learning_path(_domain_knowledge: u8, _profile: &FactorProfile) -> LearningPath {
    LearningPath {
        beginner: topics(&[
            "Introduction to Risk & Compliance",
            "Business Ethics Fundamentals",
            "Regulatory Framework Overview",
        ]),
        intermediate: topics(&[
            "GRC Tools & Software",
            "Compliance Documentation",
            "Risk Assessment Methodologies",
        ]),
        job_ready: topics(&[
            "CRCM Certification Program",
            "Advanced Risk Analytics",
            "Compliance Audit Practices",
        ]),
    }
}

fn topics(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

pub(crate) fn personality_type(responses: &ResponseSet) -> PersonalityType {
    let agrees = |question_id: &str| {
        responses
            .answer(question_id)
            .and_then(|answer| answer.ordinal())
            .is_some_and(|value| value >= TRAIT_AGREEMENT)
    };

    if agrees(DETAIL_ORIENTED) && agrees(PREFERS_STRUCTURE) {
        PersonalityType::AnalyticalConscientious
    } else {
        PersonalityType::General
    }
}

pub(crate) fn skill_gaps(key: &AnswerKey, responses: &ResponseSet) -> Vec<SkillGap> {
    let mut gaps = Vec::new();

    if let Some(answer) = responses.answer(NUMERICAL_REASONING) {
        if !key.is_correct(NUMERICAL_REASONING, answer) {
            gaps.push(SkillGap::NumericalReasoning);
        }
    }

    let (answered, correct) = REGULATORY_SUBSET
        .iter()
        .filter_map(|id| responses.answer(id).map(|answer| key.is_correct(id, answer)))
        .fold((0u32, 0u32), |(answered, correct), is_correct| {
            (answered + 1, correct + u32::from(is_correct))
        });

    // fewer than 70% of the answered regulatory items correct
    if correct * 10 < answered * 7 {
        gaps.push(SkillGap::RegulatoryKnowledge);
    }

    gaps
}
