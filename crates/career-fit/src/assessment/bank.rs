use std::collections::BTreeMap;

use super::domain::{
    Answer, AnswerKind, AttitudinalFacet, Factor, KnowledgeArea, Question, QuestionCategory,
    Topic, ORDINAL_LABELS,
};

/// "I prefer working with structured processes" item.
pub const PREFERS_STRUCTURE: &str = "attitude_structure";
/// "I am naturally detail-oriented" item.
pub const DETAIL_ORIENTED: &str = "attitude_detail";
/// Flag-rate percentage item used for the numerical reasoning gap.
pub const NUMERICAL_REASONING: &str = "knowledge_flag_rate";
/// Items that make up the regulatory knowledge gap check.
pub const REGULATORY_SUBSET: [&str; 3] = ["knowledge_gdpr", "knowledge_aml", "knowledge_kyc"];

const GDPR_OPTIONS: &[&str] = &[
    "General Data Protection Regulation",
    "Global Data Privacy Requirements",
    "Government Data Protection Rules",
    "General Digital Privacy Regulation",
];
const FLAG_RATE_OPTIONS: &[&str] = &["5%", "10%", "2%", "50%"];
const AML_OPTIONS: &[&str] = &[
    "Anti-Money Laundering",
    "Automated Monitoring Logs",
    "Asset Management Licensing",
    "Audit Management Laws",
];
const KYC_OPTIONS: &[&str] = &[
    "To verify customer identity and assess risk",
    "To increase sales opportunities",
    "To reduce customer service calls",
    "To improve marketing targeting",
];
const RISK_MATRIX_OPTIONS: &[&str] = &[
    "Probability vs Impact",
    "Cost vs Benefit",
    "Time vs Resources",
    "Revenue vs Expenses",
];
const SOX_OPTIONS: &[&str] = &[
    "Financial reporting accuracy",
    "Data privacy protection",
    "Workplace safety standards",
    "Environmental regulations",
];

/// Ordered, immutable catalog of assessment questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    answer_key: AnswerKey,
}

impl QuestionBank {
    /// Bank over a custom catalog. Ids must be unique and weights positive.
    pub fn new(questions: Vec<Question>, answer_key: AnswerKey) -> Self {
        Self {
            questions,
            answer_key,
        }
    }

    pub fn standard() -> Self {
        Self::new(standard_questions(), AnswerKey::standard())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_in(&self, category: QuestionCategory) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.category() == category)
    }

    pub fn questions_for_factor(&self, factor: Factor) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.topic.factor() == Some(factor))
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    pub fn ordinal_labels(&self) -> &'static [&'static str; 5] {
        &ORDINAL_LABELS
    }
}

/// Expected option text per domain-knowledge question.
///
/// Matching is exact and case-sensitive. Anything that does not match,
/// including a question with no entry, counts as incorrect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    expected: BTreeMap<&'static str, &'static str>,
}

impl AnswerKey {
    pub fn standard() -> Self {
        let expected = BTreeMap::from([
            ("knowledge_gdpr", "General Data Protection Regulation"),
            (NUMERICAL_REASONING, "5%"),
            ("knowledge_aml", "Anti-Money Laundering"),
            ("knowledge_kyc", "To verify customer identity and assess risk"),
            ("knowledge_risk_matrix", "Probability vs Impact"),
            ("knowledge_sox", "Financial reporting accuracy"),
        ]);
        Self { expected }
    }

    pub fn expected(&self, question_id: &str) -> Option<&'static str> {
        self.expected.get(question_id).copied()
    }

    pub fn is_correct(&self, question_id: &str, answer: &Answer) -> bool {
        match (self.expected(question_id), answer) {
            (Some(expected), Answer::Choice(given)) => expected == given,
            _ => false,
        }
    }
}

fn attitudinal(
    id: &'static str,
    text: &'static str,
    facet: AttitudinalFacet,
    weight: f64,
) -> Question {
    Question {
        id,
        text,
        kind: AnswerKind::Ordinal,
        topic: Topic::Attitudinal(facet),
        weight,
    }
}

fn knowledge(
    id: &'static str,
    text: &'static str,
    options: &'static [&'static str],
    area: KnowledgeArea,
    weight: f64,
) -> Question {
    Question {
        id,
        text,
        kind: AnswerKind::MultipleChoice(options),
        topic: Topic::DomainKnowledge(area),
        weight,
    }
}

fn profile(id: &'static str, text: &'static str, factor: Factor, weight: f64) -> Question {
    Question {
        id,
        text,
        kind: AnswerKind::Ordinal,
        topic: Topic::MultiFactorProfile(factor),
        weight,
    }
}

fn standard_questions() -> Vec<Question> {
    use AttitudinalFacet::{Cognitive, Interest, Personality};

    vec![
        attitudinal(
            "attitude_patterns",
            "I enjoy analyzing complex data to identify patterns and trends.",
            Interest,
            0.8,
        ),
        attitudinal(
            "attitude_rules",
            "I find satisfaction in ensuring rules and procedures are followed correctly.",
            Interest,
            0.9,
        ),
        attitudinal(
            PREFERS_STRUCTURE,
            "I prefer working with structured processes rather than ambiguous situations.",
            Personality,
            0.7,
        ),
        attitudinal(
            DETAIL_ORIENTED,
            "I am naturally detail-oriented and rarely miss important information.",
            Personality,
            0.9,
        ),
        attitudinal(
            "attitude_speak_up",
            "I feel comfortable speaking up when I notice something is wrong or risky.",
            Personality,
            0.8,
        ),
        attitudinal(
            "attitude_regulations",
            "I enjoy learning about laws, regulations, and industry standards.",
            Interest,
            0.9,
        ),
        attitudinal(
            "attitude_focus",
            "I can stay focused on repetitive tasks for extended periods.",
            Cognitive,
            0.7,
        ),
        attitudinal(
            "attitude_independent",
            "I prefer to work independently rather than in large teams.",
            Personality,
            0.5,
        ),
        knowledge(
            "knowledge_gdpr",
            "What does GDPR stand for?",
            GDPR_OPTIONS,
            KnowledgeArea::Regulatory,
            0.8,
        ),
        knowledge(
            NUMERICAL_REASONING,
            "If a company has 1000 transactions and 50 are flagged for review, what is the flag rate percentage?",
            FLAG_RATE_OPTIONS,
            KnowledgeArea::Numerical,
            0.7,
        ),
        knowledge(
            "knowledge_aml",
            "AML in banking compliance refers to:",
            AML_OPTIONS,
            KnowledgeArea::Regulatory,
            0.9,
        ),
        knowledge(
            "knowledge_kyc",
            "What is the primary purpose of KYC (Know Your Customer) procedures?",
            KYC_OPTIONS,
            KnowledgeArea::Regulatory,
            0.8,
        ),
        knowledge(
            "knowledge_risk_matrix",
            "A risk assessment matrix typically plots:",
            RISK_MATRIX_OPTIONS,
            KnowledgeArea::Risk,
            0.8,
        ),
        knowledge(
            "knowledge_sox",
            "SOX compliance is primarily concerned with:",
            SOX_OPTIONS,
            KnowledgeArea::Regulatory,
            0.7,
        ),
        profile(
            "wiscar_commitment_study",
            "I am willing to study regulations and compliance frameworks for several hours each week.",
            Factor::Commitment,
            0.9,
        ),
        profile(
            "wiscar_commitment_persist",
            "I would persist in learning complex compliance topics even when they seem boring.",
            Factor::Commitment,
            0.8,
        ),
        profile(
            "wiscar_curiosity_ethics",
            "I find business ethics and corporate responsibility topics genuinely interesting.",
            Factor::Curiosity,
            0.9,
        ),
        profile(
            "wiscar_curiosity_crime",
            "I enjoy reading about financial crimes and how companies prevent them.",
            Factor::Curiosity,
            0.8,
        ),
        profile(
            "wiscar_skill_spreadsheets",
            "I have experience with spreadsheet software (Excel, Google Sheets) for data analysis.",
            Factor::DemonstratedSkill,
            0.7,
        ),
        profile(
            "wiscar_skill_reports",
            "I have written formal reports or documentation in academic or professional settings.",
            Factor::DemonstratedSkill,
            0.6,
        ),
        profile(
            "wiscar_cognitive_logic",
            "I can easily identify logical inconsistencies in arguments or processes.",
            Factor::CognitiveAptitude,
            0.8,
        ),
        profile(
            "wiscar_cognitive_juggle",
            "I can mentally juggle multiple complex requirements simultaneously.",
            Factor::CognitiveAptitude,
            0.8,
        ),
        profile(
            "wiscar_adaptability_change",
            "I adapt quickly when regulations or procedures change.",
            Factor::Adaptability,
            0.8,
        ),
        profile(
            "wiscar_adaptability_tools",
            "I learn new software tools easily and efficiently.",
            Factor::Adaptability,
            0.7,
        ),
        profile(
            "wiscar_fit_hierarchy",
            "I would be comfortable working in a corporate environment with formal hierarchies.",
            Factor::RealWorldFit,
            0.7,
        ),
        profile(
            "wiscar_fit_pressure",
            "I can handle the pressure of being responsible for ensuring company compliance.",
            Factor::RealWorldFit,
            0.9,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_bank_has_expected_shape() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 26);
        assert_eq!(bank.questions_in(QuestionCategory::Attitudinal).count(), 8);
        assert_eq!(bank.questions_in(QuestionCategory::DomainKnowledge).count(), 6);
        assert_eq!(
            bank.questions_in(QuestionCategory::MultiFactorProfile).count(),
            12
        );
        for factor in Factor::ordered() {
            assert_eq!(bank.questions_for_factor(factor).count(), 2, "{factor:?}");
        }
    }

    #[test]
    fn identifiers_are_unique_and_weights_positive() {
        let bank = QuestionBank::standard();
        let mut seen = HashSet::new();
        for question in bank.questions() {
            assert!(!question.id.is_empty());
            assert!(seen.insert(question.id), "duplicate id {}", question.id);
            assert!(question.weight > 0.0, "{} has no weight", question.id);
        }
    }

    #[test]
    fn every_knowledge_question_has_a_keyed_option() {
        let bank = QuestionBank::standard();
        for question in bank.questions_in(QuestionCategory::DomainKnowledge) {
            let expected = bank
                .answer_key()
                .expected(question.id)
                .expect("answer key entry");
            assert!(question.kind.options().contains(&expected), "{}", question.id);
        }
    }

    #[test]
    fn heuristic_identifiers_resolve() {
        let bank = QuestionBank::standard();
        assert_eq!(
            bank.question(PREFERS_STRUCTURE).map(|q| q.kind),
            Some(AnswerKind::Ordinal)
        );
        assert_eq!(
            bank.question(DETAIL_ORIENTED).map(|q| q.kind),
            Some(AnswerKind::Ordinal)
        );
        assert!(bank.question(NUMERICAL_REASONING).is_some());
        for id in REGULATORY_SUBSET {
            assert!(bank.question(id).is_some(), "{id}");
        }
    }

    #[test]
    fn answer_key_is_exact_and_fails_closed() {
        let key = AnswerKey::standard();
        assert!(key.is_correct(NUMERICAL_REASONING, &Answer::Choice("5%".to_string())));
        assert!(!key.is_correct(
            "knowledge_aml",
            &Answer::Choice("anti-money laundering".to_string())
        ));
        assert!(!key.is_correct("attitude_rules", &Answer::Choice("5%".to_string())));
        assert!(!key.is_correct(NUMERICAL_REASONING, &Answer::Ordinal(5)));
    }
}
