use career_fit::assessment::{
    AnswerKind, AssessmentReport, AssessmentSession, Question, RawAnswer, ScoringEngine,
    SessionError, SessionStep,
};
use career_fit::error::AppError;
use chrono::Utc;
use std::io::{BufRead, Write};

/// One line of terminal input, interpreted against the current question.
#[derive(Debug, PartialEq)]
enum QuizInput {
    Answer(RawAnswer),
    Back,
    Quit,
    Invalid(String),
}

/// Walks a respondent through the bank. Returns `None` if they quit or input
/// runs out before the last question.
pub(crate) fn run_quiz<R, W>(
    engine: &ScoringEngine,
    input: R,
    out: &mut W,
) -> Result<Option<AssessmentReport>, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut session = AssessmentSession::new(engine);
    let mut lines = input.lines();

    writeln!(out, "Risk & Compliance career fit assessment")?;
    writeln!(
        out,
        "{} questions. Enter 'b' to go back, 'q' to quit.",
        engine.bank().len()
    )?;
    session.start();

    while let Some(question) = session.current_question() {
        let progress = session.progress();
        writeln!(
            out,
            "\n[{}/{}] {} ({:.0}% complete)",
            progress.position,
            progress.total,
            question.display_label(),
            progress.percent
        )?;
        writeln!(out, "{}", question.text)?;
        write_choices(out, question, engine.bank().ordinal_labels())?;
        if let Some(answer) = session.current_answer() {
            writeln!(out, "Current answer: {}", answer.display())?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;

        match parse_input(question, line.trim()) {
            QuizInput::Quit => return Ok(None),
            QuizInput::Back => {
                if !session.previous() {
                    writeln!(out, "Already at the first question.")?;
                }
            }
            QuizInput::Invalid(message) => writeln!(out, "{message}")?,
            QuizInput::Answer(raw) => match session.answer(raw, Utc::now()) {
                Ok(SessionStep::Next { .. }) => {}
                Ok(SessionStep::Completed(result)) => {
                    return Ok(Some(AssessmentReport::new(result)));
                }
                Err(SessionError::Response(error)) => writeln!(out, "{error}")?,
                Err(error) => return Err(error.into()),
            },
        }
    }

    Ok(session.result().cloned().map(AssessmentReport::new))
}

fn write_choices<W: Write>(
    out: &mut W,
    question: &Question,
    ordinal_labels: &[&str],
) -> std::io::Result<()> {
    match question.kind {
        AnswerKind::Ordinal => {
            for (value, label) in (1..).zip(ordinal_labels) {
                writeln!(out, "  {value}) {label}")?;
            }
        }
        AnswerKind::MultipleChoice(options) => {
            for (index, option) in options.iter().enumerate() {
                writeln!(out, "  {}) {}", index + 1, option)?;
            }
        }
        AnswerKind::Binary => writeln!(out, "  yes / no")?,
    }
    Ok(())
}

fn parse_input(question: &Question, input: &str) -> QuizInput {
    match input.to_ascii_lowercase().as_str() {
        "q" | "quit" => return QuizInput::Quit,
        "b" | "back" => return QuizInput::Back,
        _ => {}
    }

    match question.kind {
        AnswerKind::Ordinal => match input.parse::<i64>() {
            Ok(value) => QuizInput::Answer(RawAnswer::Number(value)),
            Err(_) => QuizInput::Invalid("Enter a number from 1 to 5.".to_string()),
        },
        AnswerKind::MultipleChoice(options) => input
            .parse::<usize>()
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| options.get(index))
            .map(|option| QuizInput::Answer(RawAnswer::from(*option)))
            .unwrap_or_else(|| {
                QuizInput::Invalid(format!("Pick an option from 1 to {}.", options.len()))
            }),
        AnswerKind::Binary => match input.to_ascii_lowercase().as_str() {
            "y" | "yes" => QuizInput::Answer(RawAnswer::from("yes")),
            "n" | "no" => QuizInput::Answer(RawAnswer::from("no")),
            _ => QuizInput::Invalid("Answer yes or no.".to_string()),
        },
    }
}
