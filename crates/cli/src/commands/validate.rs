use folio_validator::validate_portfolio;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating portfolio at: {}", path.display());

    if !path.exists() {
        anyhow::bail!("Portfolio directory does not exist: {}", path.display());
    }

    let report = validate_portfolio(&path);

    for info in &report.info {
        println!("✓ {}", info);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        println!("✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✅ Portfolio is ready to build");
    Ok(())
}
