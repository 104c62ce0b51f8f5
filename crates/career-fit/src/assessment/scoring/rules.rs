use super::super::bank::QuestionBank;
use super::super::domain::{Question, QuestionCategory};
use super::super::responses::ResponseSet;
use super::FactorProfile;

/// Weighted mean of the normalized answers, as a 0-100 score.
///
/// Unanswered questions, and answers without a scale position, are left out
/// of both the weighted sum and the weight total.
pub(crate) fn weighted_score<'a, I>(questions: I, responses: &ResponseSet) -> u8
where
    I: IntoIterator<Item = &'a Question>,
{
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for question in questions {
        let Some(value) = responses
            .answer(question.id)
            .and_then(|answer| answer.normalized())
        else {
            continue;
        };
        weighted_sum += value * question.weight;
        weight_total += question.weight;
    }

    if weight_total > 0.0 {
        ((weighted_sum / weight_total) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

pub(crate) fn category_score(
    bank: &QuestionBank,
    responses: &ResponseSet,
    category: QuestionCategory,
) -> u8 {
    weighted_score(bank.questions_in(category), responses)
}

/// Share of answered domain-knowledge questions matching the answer key.
/// Question weights play no part here.
pub(crate) fn domain_knowledge_score(bank: &QuestionBank, responses: &ResponseSet) -> u8 {
    let key = bank.answer_key();
    let mut answered: u32 = 0;
    let mut correct: u32 = 0;

    for question in bank.questions_in(QuestionCategory::DomainKnowledge) {
        if let Some(answer) = responses.answer(question.id) {
            answered += 1;
            if key.is_correct(question.id, answer) {
                correct += 1;
            }
        }
    }

    rounded_percent(correct, answered)
}

pub(crate) fn factor_profile(bank: &QuestionBank, responses: &ResponseSet) -> FactorProfile {
    FactorProfile::from_fn(|factor| weighted_score(bank.questions_for_factor(factor), responses))
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
pub(crate) fn rounded_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (part.min(whole) * 200 + whole) / (whole * 2);
    percent.min(100) as u8
}
