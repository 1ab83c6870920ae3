use std::io::Read;
use std::path::Path;

use psykit_assembly::config::load_config;
use psykit_assembly::{Assembler, AssemblyConfig, ProfileTable};
use psykit_core::catalogue::parse_catalogue;
use psykit_core::models::record::ContentRecord;
use psykit_instruments::scoring::{ScoringContext, Sex};
use psykit_instruments::{require_instrument, score_strict, score_with};

fn read_catalogue(path: &Path) -> eyre::Result<Vec<ContentRecord>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read catalogue at {}: {e}", path.display()))?;
    let records = parse_catalogue(&contents)?;
    tracing::info!(path = %path.display(), records = records.len(), "catalogue loaded");
    Ok(records)
}

fn read_stdin() -> eyre::Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| eyre::eyre!("failed to read stdin: {e}"))?;
    Ok(input)
}

pub fn assemble(catalogue: &Path, config: Option<&Path>) -> eyre::Result<()> {
    let records = read_catalogue(catalogue)?;
    let config = match config {
        Some(path) => load_config(path)?,
        None => AssemblyConfig::default(),
    };
    let assembler = Assembler::new(ProfileTable::builtin(), config);

    let blocks: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            serde_json::json!({
                "id": record.id,
                "profile": assembler.profile_for(record),
                "block": assembler.assemble(record),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

pub fn score(
    instrument: &str,
    responses: &[f64],
    sex: Option<Sex>,
    strict: bool,
) -> eyre::Result<()> {
    let instrument = require_instrument(instrument)?;
    let context = ScoringContext { sex };

    let result = if strict {
        score_strict(instrument.as_ref(), responses, &context)?
    } else {
        for problem in instrument.validate_responses(responses) {
            tracing::warn!(item = problem.item, value = problem.value, "{}", problem.message);
        }
        score_with(instrument.as_ref(), responses, &context)
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub fn sanitize() -> eyre::Result<()> {
    println!("{}", psykit_sanitize::sanitize(&read_stdin()?));
    Ok(())
}

pub fn text() -> eyre::Result<()> {
    println!("{}", psykit_sanitize::extract_text(&read_stdin()?));
    Ok(())
}

pub fn profile(catalogue: &Path) -> eyre::Result<()> {
    let records = read_catalogue(catalogue)?;
    let assembler = Assembler::default();
    for record in &records {
        println!("{}\t{}", record.id, assembler.profile_for(record));
    }
    Ok(())
}
