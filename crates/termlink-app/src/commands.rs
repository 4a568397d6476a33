use anyhow::Context;
use termlink_config::Config;
use termlink_core::{LocaleId, ScoredResult};
use termlink_provider::{
    LogoStyle, ProjectInfo, RepositoryProvider, SessionContext, SuggestionRequest,
    TranslationProvider, TranslationRequest,
};

use crate::cli::{Command, LookupArgs};

pub async fn run(
    provider: &RepositoryProvider,
    config: &Config,
    command: Command,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        Command::Languages => {
            print_locales(provider.languages().iter(), json)?;
        }
        Command::Targets { source } => {
            let source = LocaleId::parse(&source)?;
            let targets = provider.get_targets(&source);
            if targets.is_empty() {
                tracing::warn!("{source} is not supported by the repository");
            }
            print_locales(targets.iter(), json)?;
        }
        Command::Translate(lookup) => {
            let session = open_session(provider, &lookup)?;
            let request = TranslationRequest::new(lookup.text);
            let result = provider.translate(&session, &request).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(provider, &result);
            }
        }
        Command::Suggest { lookup, max } => {
            let session = open_session(provider, &lookup)?;
            let max_results = max.unwrap_or(config.query.max_suggestions);
            let request = SuggestionRequest::new(lookup.text, max_results);
            let results = provider.suggest(&session, &request).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No suggestions");
            } else {
                for result in &results {
                    print_result(provider, result);
                }
            }
        }
        Command::Fields => {
            let columns = provider.resources().metadata_columns();
            if json {
                println!("{}", serde_json::to_string_pretty(&columns)?);
            } else {
                for (label, description) in columns {
                    println!("{label}: {description}");
                }
            }
        }
        Command::Logo { style, out } => {
            let style: LogoStyle = style.parse()?;
            let bytes = provider.get_logo(style)?;
            std::fs::write(&out, bytes)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            tracing::info!("Wrote {style} logo to {}", out.display());
        }
    }

    Ok(())
}

fn open_session(
    provider: &RepositoryProvider,
    lookup: &LookupArgs,
) -> anyhow::Result<SessionContext> {
    let source = LocaleId::parse(&lookup.from)?;
    let target = LocaleId::parse(&lookup.to)?;

    if !provider.is_supported(&source, &target) {
        tracing::warn!("{source} -> {target} is not in the repository's language list");
    }

    let project = ProjectInfo {
        name: "termlink-cli".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(provider.initialize(source, target, project)?)
}

fn print_locales<'a>(
    locales: impl Iterator<Item = &'a LocaleId>,
    json: bool,
) -> anyhow::Result<()> {
    let mut tags: Vec<String> = locales.map(LocaleId::to_string).collect();
    tags.sort();

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }
    Ok(())
}

fn print_result(provider: &RepositoryProvider, result: &ScoredResult) {
    println!(
        "[{:>3}] {} => {} ({})",
        result.confidence.value(),
        result.source,
        result.target,
        result.state.as_str()
    );
    for (label, value) in provider.resources().labelled_metadata(&result.metadata) {
        println!("      {label}: {value}");
    }
}
