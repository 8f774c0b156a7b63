use crate::catalog::{self, validate_catalog};
use crate::errors::AssessmentError;
use anyhow::Result;

pub fn validate_catalog_command() -> Result<()> {
    let questions = catalog::all();
    let issues = validate_catalog(questions);

    if issues.is_empty() {
        println!("Catalog OK: {} questions", questions.len());
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  - {issue}");
    }
    Err(AssessmentError::CatalogInvalid {
        count: issues.len(),
    }
    .into())
}
