//! The `reportgen generate` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use reportgen_core::{ReportEngine, ReportKind};
use reportgen_data::config::load_config_from;
use reportgen_data::JsonDataSource;

pub fn execute(
    student: Option<String>,
    report: Option<String>,
    data_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let student_id = match student {
        Some(id) => id,
        None => prompt_student_id(&mut input, &mut stdout)?,
    };
    let kind = match report {
        Some(name) => name.parse::<ReportKind>().map_err(anyhow::Error::msg)?,
        None => prompt_report_kind(&mut input, &mut stdout)?,
    };

    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(dir) = data_dir {
        config.data.dir = dir;
    }
    let source = JsonDataSource::from_config(&config.data)
        .with_context(|| format!("cannot open data directory {}", config.data.dir.display()))?;

    let text = ReportEngine::new(&source).generate(kind, &student_id)?;

    println!("{text}");
    println!("Report generated successfully!");
    Ok(())
}

fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Ask for the student ID.
fn prompt_student_id(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "Student ID: ")?;
    output.flush()?;

    let student_id = read_answer(input)?;
    if student_id.is_empty() {
        anyhow::bail!("a student ID is required");
    }
    Ok(student_id)
}

/// Offer the report menu; an empty answer picks the first entry.
fn prompt_report_kind(input: &mut impl BufRead, output: &mut impl Write) -> Result<ReportKind> {
    writeln!(output, "Select Report type to generate [{}]:", ReportKind::Diagnostic.title())?;
    for (index, kind) in ReportKind::ALL.iter().enumerate() {
        writeln!(output, "  [{}] {}", index + 1, kind.title())?;
    }
    write!(output, " > ")?;
    output.flush()?;

    let answer = read_answer(input)?;
    if answer.is_empty() {
        return Ok(ReportKind::Diagnostic);
    }
    answer.parse::<ReportKind>().map_err(anyhow::Error::msg)
}
