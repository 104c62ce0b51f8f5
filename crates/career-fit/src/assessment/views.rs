use super::bank::QuestionBank;
use super::domain::{Factor, Question, QuestionCategory};
use super::scoring::{AssessmentResult, Recommendation};
use serde::Serialize;

/// Colour band the results page uses for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Developing,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Strong
        } else if score >= 60 {
            Self::Moderate
        } else {
            Self::Developing
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Developing => "Developing",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreLine {
    pub key: &'static str,
    pub label: &'static str,
    pub score: u8,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

impl ScoreLine {
    fn new(key: &'static str, label: &'static str, score: u8) -> Self {
        let band = ScoreBand::from_score(score);
        Self {
            key,
            label,
            score,
            band,
            band_label: band.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub headline: &'static str,
    pub confidence_score: u8,
    pub overall_score: f64,
    pub factor_average: f64,
    pub core_scores: Vec<ScoreLine>,
    pub factor_scores: Vec<ScoreLine>,
    pub personality_label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skill_gap_labels: Vec<&'static str>,
}

impl AssessmentResult {
    pub fn summary(&self) -> ResultSummary {
        let core_scores = vec![
            ScoreLine::new("attitudinal", "Psychometric Fit", self.attitudinal_score),
            ScoreLine::new(
                "domain_knowledge",
                "Technical Readiness",
                self.domain_knowledge_score,
            ),
        ];

        let factor_scores = self
            .factor_profile
            .entries()
            .into_iter()
            .map(|(factor, score)| ScoreLine::new(factor.key(), factor.label(), score))
            .collect();

        ResultSummary {
            recommendation: self.recommendation,
            recommendation_label: self.recommendation.label(),
            headline: self.recommendation.headline(),
            confidence_score: self.confidence_score,
            overall_score: (self.overall_score() * 100.0).round() / 100.0,
            factor_average: (self.factor_profile.average() * 100.0).round() / 100.0,
            core_scores,
            factor_scores,
            personality_label: self.personality_type.label(),
            skill_gap_labels: self.skill_gaps.iter().map(|gap| gap.label()).collect(),
        }
    }
}

/// Client-facing rendering of a question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub position: usize,
    pub id: &'static str,
    pub text: &'static str,
    pub answer_type: &'static str,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
    pub category: QuestionCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Factor>,
    pub display_label: String,
    pub weight: f64,
}

impl QuestionView {
    pub fn new(position: usize, question: &Question) -> Self {
        Self {
            position,
            id: question.id,
            text: question.text,
            answer_type: question.kind.label(),
            options: question.kind.options(),
            category: question.category(),
            factor: question.topic.factor(),
            display_label: question.display_label(),
            weight: question.weight,
        }
    }
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

#[derive(Debug, Clone, Serialize)]
pub struct OrdinalOption {
    pub value: u8,
    pub label: &'static str,
}

pub fn ordinal_options(labels: &[&'static str]) -> Vec<OrdinalOption> {
    labels
        .iter()
        .copied()
        .zip(1u8..)
        .map(|(label, value)| OrdinalOption { value, label })
        .collect()
}

/// Everything a client needs to render the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    pub questions: Vec<QuestionView>,
    pub ordinal_options: Vec<OrdinalOption>,
}

impl QuestionCatalog {
    pub fn from_bank(bank: &QuestionBank) -> Self {
        let questions = bank
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionView::new(index + 1, question))
            .collect();

        Self {
            questions,
            ordinal_options: ordinal_options(bank.ordinal_labels()),
        }
    }
}

/// Scored result together with its presentation summary.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub result: AssessmentResult,
    pub summary: ResultSummary,
}

impl AssessmentReport {
    pub fn new(result: AssessmentResult) -> Self {
        let summary = result.summary();
        Self { result, summary }
    }
}
