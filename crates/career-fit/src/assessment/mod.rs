//! Career-fit assessment: the question bank, response validation, the scoring
//! engine and the surfaces built on top of it.

pub mod bank;
pub mod domain;
pub mod responses;
pub mod router;
pub mod scoring;
pub mod session;
pub mod views;

pub use bank::{AnswerKey, QuestionBank};
pub use domain::{
    Answer, AnswerKind, AttitudinalFacet, Factor, KnowledgeArea, Question, QuestionCategory,
    Topic,
};
pub use responses::{
    RawAnswer, Response, ResponseError, ResponseSet, ResponseSubmission, SubmissionBatch,
};
pub use router::assessment_router;
pub use scoring::{
    AssessmentResult, CareerTrack, FactorProfile, LearningPath, PersonalityType, Recommendation,
    ScoringEngine, SkillGap,
};
pub use session::{AssessmentSession, SessionError, SessionProgress, SessionStage, SessionStep};
pub use views::{AssessmentReport, QuestionCatalog, QuestionView, ResultSummary, ScoreBand};
