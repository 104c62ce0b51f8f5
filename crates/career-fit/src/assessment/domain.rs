use serde::{Deserialize, Serialize};

/// Labels shown for ordinal answers 1 through 5, in value order.
pub const ORDINAL_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

pub const MIN_ORDINAL: u8 = 1;
pub const MAX_ORDINAL: u8 = 5;

/// Top-level grouping that decides which scoring scheme applies to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Attitudinal,
    DomainKnowledge,
    MultiFactorProfile,
}

impl QuestionCategory {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::Attitudinal,
            Self::DomainKnowledge,
            Self::MultiFactorProfile,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Attitudinal => "Psychometric",
            Self::DomainKnowledge => "Technical",
            Self::MultiFactorProfile => "WISCAR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttitudinalFacet {
    Interest,
    Personality,
    Cognitive,
}

impl AttitudinalFacet {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interest => "Interest",
            Self::Personality => "Personality",
            Self::Cognitive => "Cognitive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KnowledgeArea {
    Regulatory,
    Numerical,
    Risk,
}

impl KnowledgeArea {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regulatory => "Regulatory",
            Self::Numerical => "Numerical",
            Self::Risk => "Risk",
        }
    }
}

/// The six WISCAR factors. Every produced profile carries all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Factor {
    Commitment,
    Curiosity,
    DemonstratedSkill,
    CognitiveAptitude,
    Adaptability,
    RealWorldFit,
}

impl Factor {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Commitment,
            Self::Curiosity,
            Self::DemonstratedSkill,
            Self::CognitiveAptitude,
            Self::Adaptability,
            Self::RealWorldFit,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Commitment => "commitment",
            Self::Curiosity => "curiosity",
            Self::DemonstratedSkill => "demonstrated-skill",
            Self::CognitiveAptitude => "cognitive-aptitude",
            Self::Adaptability => "adaptability",
            Self::RealWorldFit => "real-world-fit",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Commitment => "Will",
            Self::Curiosity => "Interest",
            Self::DemonstratedSkill => "Skill",
            Self::CognitiveAptitude => "Cognitive",
            Self::Adaptability => "Ability",
            Self::RealWorldFit => "Real World",
        }
    }
}

/// Category plus subcategory in one closed type, so a multi-factor question
/// can only ever be keyed by a real factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "subcategory", rename_all = "kebab-case")]
pub enum Topic {
    Attitudinal(AttitudinalFacet),
    DomainKnowledge(KnowledgeArea),
    MultiFactorProfile(Factor),
}

impl Topic {
    pub const fn category(self) -> QuestionCategory {
        match self {
            Topic::Attitudinal(_) => QuestionCategory::Attitudinal,
            Topic::DomainKnowledge(_) => QuestionCategory::DomainKnowledge,
            Topic::MultiFactorProfile(_) => QuestionCategory::MultiFactorProfile,
        }
    }

    pub const fn subcategory_label(self) -> &'static str {
        match self {
            Topic::Attitudinal(facet) => facet.label(),
            Topic::DomainKnowledge(area) => area.label(),
            Topic::MultiFactorProfile(factor) => factor.label(),
        }
    }

    pub const fn factor(self) -> Option<Factor> {
        match self {
            Topic::MultiFactorProfile(factor) => Some(factor),
            _ => None,
        }
    }
}

/// Shape of the answer a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    /// 1-5 agreement scale.
    Ordinal,
    MultipleChoice(&'static [&'static str]),
    /// Literal "yes" / "no".
    Binary,
}

impl AnswerKind {
    pub const fn label(self) -> &'static str {
        match self {
            AnswerKind::Ordinal => "likert",
            AnswerKind::MultipleChoice(_) => "multiple-choice",
            AnswerKind::Binary => "yes-no",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            AnswerKind::MultipleChoice(options) => options,
            AnswerKind::Ordinal | AnswerKind::Binary => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: AnswerKind,
    pub topic: Topic,
    /// Relative importance within the question's category; always positive.
    pub weight: f64,
}

impl Question {
    pub const fn category(&self) -> QuestionCategory {
        self.topic.category()
    }

    pub fn display_label(&self) -> String {
        format!(
            "{} • {}",
            self.category().label(),
            self.topic.subcategory_label()
        )
    }
}

/// A validated answer. Construction goes through `ResponseSet`, which checks
/// the value against the question's `AnswerKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Ordinal(u8),
    Binary(bool),
    Choice(String),
}

impl Answer {
    /// Maps the answer onto 0.0..=1.0. Multiple-choice answers have no
    /// position on a scale and are scored through the answer key instead.
    pub fn normalized(&self) -> Option<f64> {
        match self {
            Answer::Ordinal(value) => Some(
                f64::from(value.saturating_sub(MIN_ORDINAL))
                    / f64::from(MAX_ORDINAL - MIN_ORDINAL),
            ),
            Answer::Binary(true) => Some(1.0),
            Answer::Binary(false) => Some(0.0),
            Answer::Choice(_) => None,
        }
    }

    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Answer::Ordinal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Answer::Ordinal(value) => ordinal_label(*value)
                .map(|label| format!("{value} ({label})"))
                .unwrap_or_else(|| value.to_string()),
            Answer::Binary(true) => "yes".to_string(),
            Answer::Binary(false) => "no".to_string(),
            Answer::Choice(option) => option.clone(),
        }
    }
}

pub fn ordinal_label(value: u8) -> Option<&'static str> {
    if (MIN_ORDINAL..=MAX_ORDINAL).contains(&value) {
        Some(ORDINAL_LABELS[usize::from(value - MIN_ORDINAL)])
    } else {
        None
    }
}
