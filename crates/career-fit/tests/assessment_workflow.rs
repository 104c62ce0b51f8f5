use career_fit::assessment::{
    AnswerKind, AssessmentSession, CareerTrack, PersonalityType, QuestionBank, QuestionCategory,
    RawAnswer, Recommendation, ResponseError, ResponseSet, ResponseSubmission, ScoringEngine,
    SessionStep, SkillGap,
};
use chrono::{DateTime, TimeZone, Utc};

fn submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 14, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn correct_option(bank: &QuestionBank, question_id: &str) -> String {
    bank.answer_key()
        .expected(question_id)
        .expect("keyed question")
        .to_string()
}

/// Attitudinal answers at `attitude`, every knowledge question correct and
/// every profile answer at `profile`.
fn submissions(bank: &QuestionBank, attitude: i64, profile: i64) -> Vec<ResponseSubmission> {
    bank.questions()
        .iter()
        .map(|question| {
            let answer = match question.category() {
                QuestionCategory::Attitudinal => RawAnswer::Number(attitude),
                QuestionCategory::DomainKnowledge => {
                    RawAnswer::Text(correct_option(bank, question.id))
                }
                QuestionCategory::MultiFactorProfile => RawAnswer::Number(profile),
            };
            ResponseSubmission {
                question_id: question.id.to_string(),
                answer,
                captured_at: None,
            }
        })
        .collect()
}

#[test]
fn agreeing_respondent_with_full_knowledge_should_proceed() {
    let engine = ScoringEngine::standard();
    let responses =
        ResponseSet::from_submissions(engine.bank(), submissions(engine.bank(), 4, 5), submitted_at())
            .expect("valid responses");

    let result = engine.compute(&responses);

    assert_eq!(result.attitudinal_score, 75);
    assert_eq!(result.domain_knowledge_score, 100);
    assert!(result
        .factor_profile
        .entries()
        .iter()
        .all(|(_, score)| *score == 100));
    assert_eq!(result.recommendation, Recommendation::Proceed);
    assert_eq!(result.confidence_score, 93);
    assert!((result.overall_score() - 91.666_666).abs() < 1e-3);

    assert_eq!(result.career_track, CareerTrack::Senior);
    assert_eq!(
        result.career_matches,
        vec![
            "Risk Compliance Specialist",
            "Regulatory Affairs Officer",
            "Internal Auditor"
        ]
    );
    assert_eq!(
        result.next_steps,
        vec![
            "Consider pursuing CRCM or CAMS certification",
            "Look for entry-level compliance analyst positions"
        ]
    );
    assert_eq!(result.personality_type, PersonalityType::AnalyticalConscientious);
    assert!(result.skill_gaps.is_empty());
    assert_eq!(result.learning_path.beginner.len(), 3);
}

#[test]
fn indifferent_respondent_is_steered_elsewhere() {
    let engine = ScoringEngine::standard();
    let bank = engine.bank();
    let mut batch = submissions(bank, 2, 2);
    for submission in batch.iter_mut() {
        if let Some(question) = bank.question(&submission.question_id) {
            if let AnswerKind::MultipleChoice(options) = question.kind {
                let wrong = options
                    .iter()
                    .find(|option| **option != correct_option(bank, question.id))
                    .expect("distractor available");
                submission.answer = RawAnswer::from(*wrong);
            }
        }
    }
    let responses =
        ResponseSet::from_submissions(bank, batch, submitted_at()).expect("valid responses");

    let result = engine.compute(&responses);

    assert_eq!(result.attitudinal_score, 25);
    assert_eq!(result.domain_knowledge_score, 0);
    assert_eq!(result.recommendation, Recommendation::NotRecommended);
    assert_eq!(result.career_track, CareerTrack::Generalist);
    assert_eq!(result.personality_type, PersonalityType::General);
    assert_eq!(
        result.skill_gaps,
        vec![SkillGap::NumericalReasoning, SkillGap::RegulatoryKnowledge]
    );
    assert_eq!(result.next_steps.len(), 6);
}

#[test]
fn a_single_invalid_entry_rejects_the_batch() {
    let engine = ScoringEngine::standard();
    let mut batch = submissions(engine.bank(), 4, 5);
    batch.push(ResponseSubmission {
        question_id: "knowledge_sox".to_string(),
        answer: RawAnswer::from("financial reporting accuracy"),
        captured_at: None,
    });

    let err = ResponseSet::from_submissions(engine.bank(), batch, submitted_at())
        .expect_err("case-sensitive option match");

    assert_eq!(
        err,
        ResponseError::UnknownOption {
            question_id: "knowledge_sox".to_string(),
            given: "financial reporting accuracy".to_string(),
        }
    );
}

#[test]
fn compute_is_repeatable_for_the_same_responses() {
    let engine = ScoringEngine::standard();
    let responses =
        ResponseSet::from_submissions(engine.bank(), submissions(engine.bank(), 3, 4), submitted_at())
            .expect("valid responses");

    assert_eq!(engine.compute(&responses), engine.compute(&responses));
}

#[test]
fn interactive_session_matches_batch_scoring() {
    let engine = ScoringEngine::standard();
    let batch = submissions(engine.bank(), 4, 5);
    let mut session = AssessmentSession::new(&engine);
    session.start();

    let mut completed = None;
    for submission in batch.iter().cloned() {
        if let SessionStep::Completed(result) = session
            .answer(submission.answer, submitted_at())
            .expect("valid answer")
        {
            completed = Some(result);
        }
    }

    let expected = engine.compute(
        &ResponseSet::from_submissions(engine.bank(), batch, submitted_at())
            .expect("valid responses"),
    );
    assert_eq!(completed, Some(expected));
}
