use chrono::{DateTime, Utc};

use super::domain::{Answer, Question};
use super::responses::{RawAnswer, ResponseError, ResponseSet};
use super::scoring::{AssessmentResult, ScoringEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    Intro,
    Questions,
    Results,
}

/// Where the respondent is in the question sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub percent: f64,
}

/// What happened after an answer was recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep {
    Next { index: usize },
    Completed(AssessmentResult),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("assessment is not in progress")]
    NotInProgress,
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// One respondent's walk through the question bank. Owns the answers
/// collected so far; nothing survives `restart`.
#[derive(Debug)]
pub struct AssessmentSession<'e> {
    engine: &'e ScoringEngine,
    stage: SessionStage,
    index: usize,
    responses: ResponseSet,
    result: Option<AssessmentResult>,
}

impl<'e> AssessmentSession<'e> {
    pub fn new(engine: &'e ScoringEngine) -> Self {
        Self {
            engine,
            stage: SessionStage::Intro,
            index: 0,
            responses: ResponseSet::new(),
            result: None,
        }
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    pub fn start(&mut self) {
        self.stage = SessionStage::Questions;
        self.index = 0;
        self.responses.clear();
        self.result = None;
    }

    pub fn current_question(&self) -> Option<&'e Question> {
        match self.stage {
            SessionStage::Questions => self.engine.bank().get(self.index),
            SessionStage::Intro | SessionStage::Results => None,
        }
    }

    /// Answer previously given to the current question, if any.
    pub fn current_answer(&self) -> Option<&Answer> {
        self.current_question()
            .and_then(|question| self.responses.answer(question.id))
    }

    pub fn progress(&self) -> SessionProgress {
        let total = self.engine.bank().len();
        let position = (self.index + 1).min(total);
        let percent = if total == 0 {
            0.0
        } else {
            position as f64 / total as f64 * 100.0
        };

        SessionProgress {
            position,
            total,
            answered: self.responses.len(),
            percent,
        }
    }

    /// Record an answer for the current question and move on. Answering the
    /// last question scores the session.
    pub fn answer(
        &mut self,
        raw: RawAnswer,
        captured_at: DateTime<Utc>,
    ) -> Result<SessionStep, SessionError> {
        let question = self.current_question().ok_or(SessionError::NotInProgress)?;
        self.responses
            .record(self.engine.bank(), question.id, raw, captured_at)?;

        if self.index + 1 < self.engine.bank().len() {
            self.index += 1;
            return Ok(SessionStep::Next { index: self.index });
        }

        let result = self.engine.compute(&self.responses);
        self.result = Some(result.clone());
        self.stage = SessionStage::Results;
        Ok(SessionStep::Completed(result))
    }

    /// Step back one question. Earlier answers are kept.
    pub fn previous(&mut self) -> bool {
        if self.stage == SessionStage::Questions && self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn restart(&mut self) {
        self.stage = SessionStage::Intro;
        self.index = 0;
        self.responses.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::AnswerKind;
    use crate::assessment::scoring::Recommendation;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn best_answer(question: &Question, engine: &ScoringEngine) -> RawAnswer {
        match question.kind {
            AnswerKind::Ordinal => RawAnswer::Number(5),
            AnswerKind::Binary => RawAnswer::from("yes"),
            AnswerKind::MultipleChoice(_) => RawAnswer::from(
                engine
                    .bank()
                    .answer_key()
                    .expected(question.id)
                    .expect("keyed question"),
            ),
        }
    }

    #[test]
    fn answering_before_start_is_rejected() {
        let engine = ScoringEngine::standard();
        let mut session = AssessmentSession::new(&engine);

        assert_eq!(session.stage(), SessionStage::Intro);
        assert!(session.current_question().is_none());
        assert_eq!(
            session.answer(RawAnswer::Number(3), now()),
            Err(SessionError::NotInProgress)
        );
    }

    #[test]
    fn walks_every_question_then_scores_once() {
        let engine = ScoringEngine::standard();
        let mut session = AssessmentSession::new(&engine);
        session.start();

        let total = engine.bank().len();
        let mut completed = None;
        for step in 0..total {
            let question = session.current_question().expect("question available");
            assert_eq!(session.progress().position, step + 1);
            let answer = best_answer(question, &engine);
            match session.answer(answer, now()).expect("valid answer") {
                SessionStep::Next { index } => assert_eq!(index, step + 1),
                SessionStep::Completed(result) => completed = Some(result),
            }
        }

        let result = completed.expect("session completed");
        assert_eq!(session.stage(), SessionStage::Results);
        assert_eq!(session.result(), Some(&result));
        assert_eq!(result.recommendation, Recommendation::Proceed);
        assert_eq!(session.responses().len(), total);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn invalid_answers_keep_the_current_question() {
        let engine = ScoringEngine::standard();
        let mut session = AssessmentSession::new(&engine);
        session.start();

        let err = session
            .answer(RawAnswer::Number(9), now())
            .expect_err("out of range");
        assert!(matches!(
            err,
            SessionError::Response(ResponseError::ScaleOutOfRange { .. })
        ));
        assert_eq!(session.progress().position, 1);
        assert_eq!(session.progress().answered, 0);
    }

    #[test]
    fn revisiting_a_question_shows_and_replaces_the_answer() {
        let engine = ScoringEngine::standard();
        let mut session = AssessmentSession::new(&engine);
        session.start();

        session
            .answer(RawAnswer::Number(2), now())
            .expect("valid answer");
        assert!(session.previous());
        assert_eq!(session.current_answer(), Some(&Answer::Ordinal(2)));

        session
            .answer(RawAnswer::Number(4), now())
            .expect("valid answer");
        assert!(session.previous());
        assert_eq!(session.current_answer(), Some(&Answer::Ordinal(4)));
        assert_eq!(session.progress().answered, 1);
        assert!(!session.previous());
    }

    #[test]
    fn restart_discards_everything() {
        let engine = ScoringEngine::standard();
        let mut session = AssessmentSession::new(&engine);
        session.start();
        session
            .answer(RawAnswer::Number(5), now())
            .expect("valid answer");

        session.restart();

        assert_eq!(session.stage(), SessionStage::Intro);
        assert!(session.responses().is_empty());
        assert!(session.result().is_none());
        assert_eq!(session.progress().position, 1);
    }

    #[test]
    fn progress_reports_percent_complete() {
        let engine = ScoringEngine::standard();
        let mut session = AssessmentSession::new(&engine);
        session.start();
        for _ in 0..12 {
            let question = session.current_question().expect("question available");
            let answer = best_answer(question, &engine);
            session.answer(answer, now()).expect("valid answer");
        }
        // eight attitudinal and four knowledge answers in
        let progress = session.progress();
        assert_eq!(progress.position, 13);
        assert_eq!(progress.total, 26);
        assert_eq!(progress.percent, 50.0);
    }
}
