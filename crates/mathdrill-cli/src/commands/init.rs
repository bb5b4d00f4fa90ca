//! The `mathdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mathdrill.toml").exists() {
        println!("mathdrill.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write("mathdrill.toml", SAMPLE_CONFIG)?;
    println!("Created mathdrill.toml");

    println!("\nNext steps:");
    println!("  1. Pick your operations and difficulty under [defaults]");
    println!("  2. Run: mathdrill play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathdrill configuration

# Where the last-used quiz settings are stored.
data_dir = "${HOME}/.config/mathdrill"

# Save a JSON report of every finished quiz here.
# report_dir = "./mathdrill-reports"

# Fixed seed for reproducible question lists.
# seed = 42

# Settings used until you change them with `mathdrill config set`.
[defaults]
operations = ["addition", "subtraction"]
difficulty = "medium"
question_count = 10
timer_enabled = false
timer_seconds = 30
auto_advance = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn sample_config_parses() {
        let config: AppConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.defaults.operations.len(), 2);
        assert!(config.defaults.validate().is_ok());
    }
}
