use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{
    Confirm, CustomType, InquireError, Password, PasswordDisplayMode, Select, Text,
};
use irrigation_core::{
    AdviceInput, Advisor, Config, Crop, Language, SessionLog, export_file_name,
    provider_from_config,
};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::render;

/// Number of past entries shown in the session history view.
const HISTORY_LEN: usize = 5;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "irrigation", version, about = "Smart irrigation advisory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key and display language.
    Configure,

    /// Show the per-crop requirement table.
    Crops,

    /// Get irrigation advice for a single location.
    Advise {
        /// City or village name.
        location: String,

        /// Crop type; unknown names use the Wheat profile.
        #[arg(long, default_value = "Wheat")]
        crop: String,

        /// Soil moisture level in percent.
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
        soil_moisture: u8,

        /// Display language (english, gujarati, hindi); defaults to the configured one.
        #[arg(long)]
        language: Option<String>,

        /// Write the result as a CSV log into this directory.
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Start an interactive advisory session with history and export.
    Session {
        /// Display language (english, gujarati, hindi); defaults to the configured one.
        #[arg(long)]
        language: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Crops => {
                render::print_crop_table();
                Ok(())
            }
            Command::Advise { location, crop, soil_moisture, language, export } => {
                let config = Config::load()?;
                let lang = resolve_language(language.as_deref(), &config)?;
                let input = AdviceInput {
                    location,
                    crop: Crop::lookup(&crop),
                    soil_moisture_pct: soil_moisture,
                };

                advise_once(&config, lang, input, export.as_deref()).await
            }
            Command::Session { language } => {
                let config = Config::load()?;
                let lang = resolve_language(language.as_deref(), &config)?;
                run_session(&config, lang).await
            }
        }
    }
}

fn resolve_language(flag: Option<&str>, config: &Config) -> anyhow::Result<Language> {
    match flag {
        Some(s) => s.parse(),
        None => config.language(),
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let prompt = if config.is_api_key_configured() {
        "OpenWeather API key (leave empty to keep the current one):"
    } else {
        "OpenWeather API key:"
    };
    let key = Password::new(prompt)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    if !key.trim().is_empty() {
        config.set_api_key(key.trim().to_string());
    }

    let current = config.language().unwrap_or_default();
    let cursor = Language::all().iter().position(|l| *l == current).unwrap_or(0);
    let language = Select::new("Display language:", Language::all().to_vec())
        .with_starting_cursor(cursor)
        .prompt()?;
    config.set_language(language);

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

async fn advise_once(
    config: &Config,
    lang: Language,
    input: AdviceInput,
    export_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let advisor = Advisor::new(provider_from_config(config)?);
    let mut log = SessionLog::new();

    match advisor.advise(&mut log, input).await {
        Ok(entry) => {
            render::print_weather(entry, lang);
            render::print_advice(entry, lang);
        }
        Err(err) => anyhow::bail!(err.user_message(lang)),
    }

    if let Some(dir) = export_dir {
        let path = write_export(&log, dir)?;
        println!();
        println!("Log written to {}", path.display());
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    GetAdvice,
    History,
    Stats,
    CropInfo,
    Export,
    Quit,
}

impl MenuAction {
    const fn all() -> &'static [MenuAction] {
        &[
            MenuAction::GetAdvice,
            MenuAction::History,
            MenuAction::Stats,
            MenuAction::CropInfo,
            MenuAction::Export,
            MenuAction::Quit,
        ]
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MenuAction::GetAdvice => "Get irrigation advice",
            MenuAction::History => "Show recent history",
            MenuAction::Stats => "Show quick stats",
            MenuAction::CropInfo => "Show crop requirements",
            MenuAction::Export => "Download complete log (CSV)",
            MenuAction::Quit => "Quit",
        };
        f.write_str(text)
    }
}

/// Answers from the previous request, offered as defaults for the next one.
#[derive(Debug, Clone, Default)]
struct LastInput {
    location: Option<String>,
    crop: Crop,
    soil_moisture_pct: Option<u8>,
}

async fn run_session(config: &Config, lang: Language) -> anyhow::Result<()> {
    let advisor = Advisor::new(provider_from_config(config)?);
    let mut log = SessionLog::new();
    let mut last = LastInput::default();

    loop {
        println!();
        let action = match Select::new("What would you like to do?", MenuAction::all().to_vec())
            .prompt()
        {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match action {
            MenuAction::GetAdvice => {
                let input = match prompt_advice_input(&last) {
                    Ok(input) => input,
                    Err(InquireError::OperationCanceled) => continue,
                    Err(e) => return Err(e.into()),
                };
                last = LastInput {
                    location: Some(input.location.clone()),
                    crop: input.crop,
                    soil_moisture_pct: Some(input.soil_moisture_pct),
                };

                match advisor.advise(&mut log, input).await {
                    Ok(entry) => {
                        render::print_weather(entry, lang);
                        render::print_advice(entry, lang);
                    }
                    Err(err) => eprintln!("{}", err.user_message(lang)),
                }
            }
            MenuAction::History => render::print_history(log.tail(HISTORY_LEN)),
            MenuAction::Stats => render::print_stats(&log.stats()),
            MenuAction::CropInfo => {
                let cursor = crop_cursor(last.crop);
                match Select::new("Crop:", Crop::all().to_vec()).with_starting_cursor(cursor).prompt()
                {
                    Ok(crop) => render::print_crop(crop),
                    Err(InquireError::OperationCanceled) => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            MenuAction::Export => {
                if log.is_empty() {
                    println!("No irrigation history available yet.");
                    continue;
                }
                let dir = match Text::new("Save to directory:").with_default(".").prompt() {
                    Ok(dir) => dir,
                    Err(InquireError::OperationCanceled) => continue,
                    Err(e) => return Err(e.into()),
                };
                match write_export(&log, Path::new(&dir)) {
                    Ok(path) => println!("Log written to {}", path.display()),
                    Err(err) => eprintln!("Export failed: {err:#}"),
                }
            }
            MenuAction::Quit => break,
        }
    }

    if !log.is_empty() {
        let save = Confirm::new("Download the session log before leaving?")
            .with_default(false)
            .prompt()
            .unwrap_or(false);
        if save {
            let path = write_export(&log, Path::new("."))?;
            println!("Log written to {}", path.display());
        }
    }

    Ok(())
}

fn prompt_advice_input(last: &LastInput) -> Result<AdviceInput, InquireError> {
    let mut location_prompt = Text::new("Enter your location (City/Village):");
    if let Some(prev) = last.location.as_deref() {
        location_prompt = location_prompt.with_default(prev);
    }
    let location = location_prompt.prompt()?;

    let crop = Select::new("Select Crop Type:", Crop::all().to_vec())
        .with_starting_cursor(crop_cursor(last.crop))
        .prompt()?;

    let soil_moisture_pct = CustomType::<u8>::new("Enter Soil Moisture Level (%):")
        .with_default(last.soil_moisture_pct.unwrap_or(50))
        .with_error_message("Please type a whole number between 0 and 100")
        .prompt()?;

    Ok(AdviceInput { location, crop, soil_moisture_pct })
}

fn crop_cursor(crop: Crop) -> usize {
    Crop::all().iter().position(|c| *c == crop).unwrap_or(0)
}

fn write_export(log: &SessionLog, dir: &Path) -> anyhow::Result<PathBuf> {
    let csv = log.export_csv()?;
    let path = dir.join(export_file_name(Local::now().date_naive()));

    fs::write(&path, csv)
        .with_context(|| format!("Failed to write log file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), rows = log.len(), "Session log exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn advise_defaults() {
        let cli = Cli::try_parse_from(["irrigation", "advise", "Anand"]).unwrap();
        match cli.command {
            Command::Advise { location, crop, soil_moisture, language, export } => {
                assert_eq!(location, "Anand");
                assert_eq!(crop, "Wheat");
                assert_eq!(soil_moisture, 50);
                assert!(language.is_none());
                assert!(export.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn soil_moisture_out_of_range_is_rejected() {
        let res = Cli::try_parse_from(["irrigation", "advise", "Anand", "--soil-moisture", "120"]);
        assert!(res.is_err());
    }

    #[test]
    fn language_flag_overrides_config() {
        let mut cfg = Config::default();
        cfg.set_language(Language::Hindi);

        assert_eq!(resolve_language(Some("gujarati"), &cfg).unwrap(), Language::Gujarati);
        assert_eq!(resolve_language(None, &cfg).unwrap(), Language::Hindi);
    }

    #[test]
    fn export_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::new();

        let path = write_export(&log, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();

        assert!(name.starts_with("irrigation_log_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
    }
}
