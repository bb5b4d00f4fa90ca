//! The `mathdrill config` command.

use std::path::Path;

use anyhow::Result;

use mathdrill_core::store::ConfigStore;

use crate::commands::QuizArgs;
use crate::config::load_config_from;

pub fn show(config_path: Option<&Path>) -> Result<()> {
    let app = load_config_from(config_path)?;
    let store = app.config_store();

    let (config, source) = match store.load() {
        Some(stored) => (stored, "stored"),
        None => (app.defaults.clone(), "defaults"),
    };
    eprintln!("# {} ({source})", store.path().display());
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn set(quiz: QuizArgs, config_path: Option<&Path>) -> Result<()> {
    let app = load_config_from(config_path)?;
    let store = app.config_store();
    let mut config = app.quiz_config(&store);

    if !quiz.apply(&mut config)? {
        println!("Nothing to change.");
        return Ok(());
    }
    store.save(&config)?;
    println!("Saved {}", store.path().display());
    Ok(())
}

pub fn reset(config_path: Option<&Path>) -> Result<()> {
    let app = load_config_from(config_path)?;
    let store = app.config_store();
    store.clear()?;
    println!("Cleared stored configuration.");
    Ok(())
}
