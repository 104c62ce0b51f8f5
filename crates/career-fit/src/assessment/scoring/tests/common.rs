use chrono::{DateTime, TimeZone, Utc};

use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{Factor, QuestionCategory};
use crate::assessment::responses::{RawAnswer, ResponseSet};
use crate::assessment::scoring::{FactorProfile, ScoringEngine};

pub(super) fn captured_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn record(set: &mut ResponseSet, bank: &QuestionBank, id: &str, answer: RawAnswer) {
    set.record(bank, id, answer, captured_at())
        .unwrap_or_else(|err| panic!("answer for {id} rejected: {err}"));
}

pub(super) fn answer_category(
    set: &mut ResponseSet,
    bank: &QuestionBank,
    category: QuestionCategory,
    value: i64,
) {
    let ids: Vec<_> = bank.questions_in(category).map(|q| q.id).collect();
    for id in ids {
        record(set, bank, id, RawAnswer::Number(value));
    }
}

pub(super) fn answer_factor(set: &mut ResponseSet, bank: &QuestionBank, factor: Factor, value: i64) {
    let ids: Vec<_> = bank.questions_for_factor(factor).map(|q| q.id).collect();
    for id in ids {
        record(set, bank, id, RawAnswer::Number(value));
    }
}

/// Answers every knowledge question with the keyed option, except the ids
/// listed in `wrong`, which get the first option that is not keyed.
pub(super) fn answer_knowledge(set: &mut ResponseSet, bank: &QuestionBank, wrong: &[&str]) {
    let key = bank.answer_key().clone();
    let picks: Vec<_> = bank
        .questions_in(QuestionCategory::DomainKnowledge)
        .map(|question| {
            let expected = key.expected(question.id).expect("keyed question");
            let option = if wrong.contains(&question.id) {
                question
                    .kind
                    .options()
                    .iter()
                    .copied()
                    .find(|option| *option != expected)
                    .expect("distractor option")
            } else {
                expected
            };
            (question.id, option)
        })
        .collect();

    for (id, option) in picks {
        record(set, bank, id, RawAnswer::from(option));
    }
}

pub(super) fn profile(values: [u8; 6]) -> FactorProfile {
    FactorProfile {
        commitment: values[0],
        curiosity: values[1],
        demonstrated_skill: values[2],
        cognitive_aptitude: values[3],
        adaptability: values[4],
        real_world_fit: values[5],
    }
}
