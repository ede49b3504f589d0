use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the React client
    let mut types = Vec::new();

    // Job record types
    types.push(clean_type(JobType::export_to_string()?));
    types.push(clean_type(JobSubtype::export_to_string()?));
    types.push(clean_type(WorkMode::export_to_string()?));
    types.push(clean_type(ExtractedJob::export_to_string()?));

    // Candidate record types
    types.push(clean_type(ExtractedCandidate::export_to_string()?));

    // Intake/parsing types
    types.push(clean_type(RecordKind::export_to_string()?));
    types.push(clean_type(ParseMethod::export_to_string()?));
    types.push(clean_type(ParsedRecord::export_to_string()?));

    let output_dir = Path::new("../client/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Keep import lines only when the definition actually references
    // another exported type (ExtractedCandidate imports JobType)
    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with("import type") {
                return has_import;
            }
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
