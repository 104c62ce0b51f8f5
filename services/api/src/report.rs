use career_fit::assessment::{AssessmentReport, QuestionCatalog};
use std::io::{self, Write};

pub(crate) fn render_questions<W: Write>(out: &mut W, catalog: &QuestionCatalog) -> io::Result<()> {
    writeln!(out, "Risk & Compliance career fit assessment")?;
    writeln!(out, "{} questions", catalog.questions.len())?;

    for question in &catalog.questions {
        writeln!(
            out,
            "\n{:>2}. [{}] {}",
            question.position, question.display_label, question.text
        )?;
        writeln!(out, "    id: {} | answer: {}", question.id, question.answer_type)?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(out, "    {}) {}", index + 1, option)?;
        }
    }

    writeln!(out, "\nScale")?;
    for option in &catalog.ordinal_options {
        writeln!(out, "- {} = {}", option.value, option.label)?;
    }
    Ok(())
}

pub(crate) fn render_report<W: Write>(out: &mut W, report: &AssessmentReport) -> io::Result<()> {
    let AssessmentReport { result, summary } = report;

    writeln!(out, "\n{}", summary.headline)?;
    writeln!(
        out,
        "Recommendation: {} | Confidence {}% | Overall {:.2}",
        summary.recommendation_label, summary.confidence_score, summary.overall_score
    )?;

    writeln!(out, "\nCore scores")?;
    for line in &summary.core_scores {
        writeln!(out, "- {}: {} ({})", line.label, line.score, line.band_label)?;
    }

    writeln!(out, "\nWISCAR profile")?;
    for line in &summary.factor_scores {
        writeln!(out, "- {}: {} ({})", line.label, line.score, line.band_label)?;
    }

    writeln!(out, "\nPersonality type: {}", summary.personality_label)?;
    if summary.skill_gap_labels.is_empty() {
        writeln!(out, "Skill gaps: none detected")?;
    } else {
        writeln!(out, "Skill gaps: {}", summary.skill_gap_labels.join(", "))?;
    }

    if !result.next_steps.is_empty() {
        writeln!(out, "\nNext steps")?;
        for step in &result.next_steps {
            writeln!(out, "- {}", step)?;
        }
    }

    writeln!(out, "\nCareer matches")?;
    for title in &result.career_matches {
        writeln!(out, "- {}", title)?;
    }

    writeln!(out, "\nLearning path")?;
    let tiers = [
        ("Beginner", &result.learning_path.beginner),
        ("Intermediate", &result.learning_path.intermediate),
        ("Job ready", &result.learning_path.job_ready),
    ];
    for (tier, topics) in tiers {
        writeln!(out, "- {}: {}", tier, topics.join(", "))?;
    }
    Ok(())
}
