use crate::infra::load_submission;
use crate::quiz::run_quiz;
use crate::report::{render_questions, render_report};
use crate::server;
use career_fit::assessment::{AssessmentReport, QuestionCatalog, ResponseSet, ScoringEngine};
use career_fit::error::AppError;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Career Fit Assessment",
    about = "Score the Risk & Compliance career fit assessment over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the question bank in presentation order
    Questions(QuestionsArgs),
    /// Score a JSON file of responses
    Score(ScoreArgs),
    /// Take the assessment interactively in the terminal
    Quiz,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Emit the catalog as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a `{"responses": [...]}` document
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Emit the result and summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions(args) => run_questions(args),
        Command::Score(args) => run_score(args),
        Command::Quiz => run_interactive(),
    }
}

fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let engine = ScoringEngine::standard();
    let catalog = QuestionCatalog::from_bank(engine.bank());
    let mut stdout = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &catalog)?;
        writeln!(stdout)?;
    } else {
        render_questions(&mut stdout, &catalog)?;
    }
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = ScoringEngine::standard();
    let batch = load_submission(&args.responses)?;
    let responses = ResponseSet::from_submissions(engine.bank(), batch.responses, Utc::now())?;
    let report = AssessmentReport::new(engine.compute(&responses));
    let mut stdout = io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        render_report(&mut stdout, &report)?;
    }
    Ok(())
}

fn run_interactive() -> Result<(), AppError> {
    let engine = ScoringEngine::standard();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match run_quiz(&engine, stdin, &mut stdout)? {
        Some(report) => render_report(&mut stdout, &report)?,
        None => writeln!(stdout, "\nAssessment abandoned; nothing was scored.")?,
    }
    Ok(())
}
