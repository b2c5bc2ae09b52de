use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use hilite::cli::{Action, CliArgs, InputSource, RunConfig};
use hilite::config::HiliteConfig;
use hilite::config_paths;
use hilite::page::{render_block, render_page, Block};
use hilite::theme::{self, ThemeSource};

fn main() -> Result<()> {
    hilite::tracing::init();

    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;
    let mut settings = HiliteConfig::load();

    let output = match &run.action {
        Action::ListThemes => list_themes(),
        Action::SetTheme(id) => set_theme(&mut settings, id)?,
        Action::Highlight => highlight_inputs(&run, &settings)?,
    };

    match &run.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn list_themes() -> String {
    theme::list_available_themes()
        .into_iter()
        .map(|info| {
            let source = match info.source {
                ThemeSource::User => "user",
                ThemeSource::Builtin => "builtin",
            };
            format!("{}\t{}\t({})\n", info.id, info.name, source)
        })
        .collect()
}

fn set_theme(settings: &mut HiliteConfig, id: &str) -> Result<String> {
    let theme = theme::load_theme(id).map_err(anyhow::Error::msg)?;
    let path = config_paths::config_file().context("No config directory available")?;
    settings.set_theme(id, &path).map_err(anyhow::Error::msg)?;
    Ok(format!("Theme set to {} ({})\n", id, theme.name))
}

fn highlight_inputs(run: &RunConfig, settings: &HiliteConfig) -> Result<String> {
    let highlighter = settings.highlighter();
    let fallback = settings.default_language();

    let mut blocks = Vec::new();
    match &run.input {
        InputSource::Stdin => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            let language = run.language_for(None, fallback);
            blocks.push(Block {
                title: None,
                language,
                markup: highlighter.highlight(&source, language),
            });
        }
        InputSource::Files(paths) => {
            for path in paths {
                blocks.push(highlight_file(run, &highlighter, path, fallback)?);
            }
        }
    }

    if run.page {
        let theme_id = run.theme.as_deref().unwrap_or(&settings.theme);
        let theme = theme::load_theme(theme_id).map_err(anyhow::Error::msg)?;
        return Ok(render_page(&blocks, &theme));
    }

    // A lone snippet is emitted as bare markup, several as titled blocks
    match blocks.as_slice() {
        [single] => Ok(single.markup.clone()),
        _ => Ok(blocks.iter().map(render_block).collect()),
    }
}

fn highlight_file(
    run: &RunConfig,
    highlighter: &hilite::Highlighter,
    path: &Path,
    fallback: hilite::LanguageId,
) -> Result<Block> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let language = run.language_for(Some(path), fallback);
    tracing::info!("Highlighting {} as {}", path.display(), language.display_name());

    Ok(Block {
        title: Some(path.display().to_string()),
        language,
        markup: highlighter.highlight(&source, language),
    })
}
