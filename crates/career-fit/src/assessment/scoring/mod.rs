mod guidance;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use guidance::{CareerTrack, LearningPath, PersonalityType, SkillGap};
pub use policy::{
    classify, Recommendation, ATTITUDINAL_FLOOR, DOMAIN_KNOWLEDGE_FLOOR, PROCEED_OVERALL,
    RECONSIDER_OVERALL,
};

use super::bank::QuestionBank;
use super::domain::{Factor, QuestionCategory};
use super::responses::ResponseSet;
use serde::{Deserialize, Serialize};

/// Stateless engine turning a validated response set into an assessment.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: QuestionBank,
}

impl ScoringEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn standard() -> Self {
        Self::new(QuestionBank::standard())
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Missing answers are left out of every average; an empty category or
    /// factor scores 0.
    pub fn compute(&self, responses: &ResponseSet) -> AssessmentResult {
        let attitudinal_score =
            rules::category_score(&self.bank, responses, QuestionCategory::Attitudinal);
        let domain_knowledge_score = rules::domain_knowledge_score(&self.bank, responses);
        let factor_profile = rules::factor_profile(&self.bank, responses);

        let confidence_score =
            policy::confidence(attitudinal_score, domain_knowledge_score, &factor_profile);
        let recommendation = policy::decide_recommendation(
            attitudinal_score,
            domain_knowledge_score,
            &factor_profile,
        );

        let career_track = CareerTrack::select(attitudinal_score, domain_knowledge_score);

        AssessmentResult {
            attitudinal_score,
            domain_knowledge_score,
            factor_profile,
            recommendation,
            confidence_score,
            next_steps: guidance::next_steps(
                attitudinal_score,
                domain_knowledge_score,
                &factor_profile,
            ),
            career_track,
            career_matches: career_track
                .titles()
                .iter()
                .map(|title| title.to_string())
                .collect(),
            learning_path: guidance::learning_path(domain_knowledge_score, &factor_profile),
            personality_type: guidance::personality_type(responses),
            skill_gaps: guidance::skill_gaps(self.bank.answer_key(), responses),
        }
    }
}

/// Per-factor scores, one named field per WISCAR factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorProfile {
    pub commitment: u8,
    pub curiosity: u8,
    pub demonstrated_skill: u8,
    pub cognitive_aptitude: u8,
    pub adaptability: u8,
    pub real_world_fit: u8,
}

impl FactorProfile {
    pub fn from_fn<F>(mut score: F) -> Self
    where
        F: FnMut(Factor) -> u8,
    {
        Self {
            commitment: score(Factor::Commitment),
            curiosity: score(Factor::Curiosity),
            demonstrated_skill: score(Factor::DemonstratedSkill),
            cognitive_aptitude: score(Factor::CognitiveAptitude),
            adaptability: score(Factor::Adaptability),
            real_world_fit: score(Factor::RealWorldFit),
        }
    }

    pub const fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Commitment => self.commitment,
            Factor::Curiosity => self.curiosity,
            Factor::DemonstratedSkill => self.demonstrated_skill,
            Factor::CognitiveAptitude => self.cognitive_aptitude,
            Factor::Adaptability => self.adaptability,
            Factor::RealWorldFit => self.real_world_fit,
        }
    }

    pub fn entries(&self) -> [(Factor, u8); 6] {
        Factor::ordered().map(|factor| (factor, self.get(factor)))
    }

    pub fn total(&self) -> u32 {
        Factor::ordered()
            .iter()
            .map(|factor| u32::from(self.get(*factor)))
            .sum()
    }

    /// Unweighted mean of the six factor scores.
    pub fn average(&self) -> f64 {
        f64::from(self.total()) / Factor::ordered().len() as f64
    }
}

/// Outcome of one assessment. Built once by `ScoringEngine::compute`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub attitudinal_score: u8,
    pub domain_knowledge_score: u8,
    pub factor_profile: FactorProfile,
    pub recommendation: Recommendation,
    pub confidence_score: u8,
    pub next_steps: Vec<String>,
    pub career_track: CareerTrack,
    pub career_matches: Vec<String>,
    pub learning_path: LearningPath,
    pub personality_type: PersonalityType,
    pub skill_gaps: Vec<SkillGap>,
}

impl AssessmentResult {
    /// Blend of the attitudinal, domain-knowledge and average factor scores.
    pub fn overall_score(&self) -> f64 {
        policy::overall(
            self.attitudinal_score,
            self.domain_knowledge_score,
            &self.factor_profile,
        )
    }
}
