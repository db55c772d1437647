use super::render::{
    print_config, print_draft, print_entries, print_full_entries, print_json, print_messages,
    print_vocabulary,
};
use super::setup::{Cli, Commands, DraftCommands, OutputFormat, VocabCommands};
use clap::Parser;
use directories::ProjectDirs;
use dreamz::api::{CmdResult, ConfigAction, DreamzApi, DreamzPaths, FormInput};
use dreamz::config::DreamzConfig;
use dreamz::error::{DreamzError, Result};
use dreamz::filter::EntryFilter;
use dreamz::logging::{effective_level, init_logging};
use dreamz::model::Tone;
use dreamz::store::fs::FileStore;
use std::path::PathBuf;

/// Overrides the data directory. Tests point it at a temp dir.
const HOME_ENV: &str = "DREAMZ_HOME";

struct AppContext {
    api: DreamzApi<FileStore>,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Write { form }) => handle_write(&mut ctx, form.into()),
        Some(Commands::Edit { position, form }) => handle_edit(&mut ctx, &position, form.into()),
        Some(Commands::Stage { position }) => handle_stage(&mut ctx, &position),
        Some(Commands::List { search, tone, tag }) => handle_list(&mut ctx, search, tone, tag),
        Some(Commands::View { positions }) => handle_view(&mut ctx, &positions),
        Some(Commands::Delete { positions }) => handle_delete(&mut ctx, &positions),
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Draft(cmd)) => match cmd {
            DraftCommands::Show => handle_draft_show(&mut ctx),
            DraftCommands::Discard => handle_draft_discard(&mut ctx),
        },
        Some(Commands::Vocab(cmd)) => match cmd {
            VocabCommands::List => handle_vocab_list(&mut ctx),
            VocabCommands::Add { kind, item } => {
                let result = ctx.api.add_vocabulary(kind.into(), &item)?;
                finish(&ctx, &result)
            }
            VocabCommands::Remove { kind, item } => {
                let result = ctx.api.remove_vocabulary(kind.into(), &item)?;
                finish(&ctx, &result)
            }
        },
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = DreamzConfig::load(&data_dir)?;

    init_logging(&effective_level(cli.verbose, &config.log_level)).map_err(DreamzError::Api)?;
    log::debug!("using data directory {}", data_dir.display());

    let store = FileStore::new(data_dir.clone());
    let paths = DreamzPaths { data_dir };

    Ok(AppContext {
        api: DreamzApi::new(store, paths, config),
        output: cli.output,
    })
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "dreamz", "dreamz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DreamzError::Api("Could not determine data directory".to_string()))
}

fn handle_write(ctx: &mut AppContext, input: FormInput) -> Result<()> {
    let result = ctx.api.write_entry(&input)?;
    finish(ctx, &result)
}

fn handle_edit(ctx: &mut AppContext, position: &str, input: FormInput) -> Result<()> {
    let result = ctx.api.edit_entry(position, &input)?;
    finish(ctx, &result)
}

fn handle_stage(ctx: &mut AppContext, position: &str) -> Result<()> {
    let result = ctx.api.stage_edit(position)?;
    finish(ctx, &result)
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    tone: Option<Tone>,
    tag: Option<String>,
) -> Result<()> {
    let filter = EntryFilter {
        query: search,
        tone,
        tag,
    };

    // A journal that cannot be read still renders, as an empty list.
    let result = match ctx.api.list_entries(&filter) {
        Ok(result) => result,
        Err(e) => {
            log::error!("failed to load dreams: {}", e);
            CmdResult::default()
        }
    };

    match ctx.output {
        OutputFormat::Json => print_json(&result.listed_entries),
        OutputFormat::Text => {
            print_entries(&result.listed_entries, filter.query.is_some());
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_view(ctx: &mut AppContext, positions: &[String]) -> Result<()> {
    let result = ctx.api.view_entries(positions)?;
    match ctx.output {
        OutputFormat::Json => print_json(&result.listed_entries),
        OutputFormat::Text => {
            print_full_entries(&result.listed_entries);
            Ok(())
        }
    }
}

fn handle_delete(ctx: &mut AppContext, positions: &[String]) -> Result<()> {
    let result = ctx.api.delete_entries(positions)?;
    finish(ctx, &result)
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset()?;
    finish(ctx, &result)
}

fn handle_draft_show(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.show_draft()?;
    match ctx.output {
        OutputFormat::Json => print_json(&result.draft),
        OutputFormat::Text => {
            print_messages(&result.messages);
            if let Some(draft) = &result.draft {
                print_draft(draft);
            }
            Ok(())
        }
    }
}

fn handle_draft_discard(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.discard_draft()?;
    finish(ctx, &result)
}

fn handle_vocab_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.vocabulary()?;
    match (&ctx.output, &result.vocabulary) {
        (OutputFormat::Json, vocabulary) => print_json(vocabulary),
        (OutputFormat::Text, Some(vocabulary)) => {
            print_vocabulary(vocabulary);
            Ok(())
        }
        (OutputFormat::Text, None) => Ok(()),
    }
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = ctx.api.config(action)?;

    match (ctx.output, show_all, &result.config) {
        (OutputFormat::Json, _, config) => print_json(config),
        (OutputFormat::Text, true, Some(config)) => {
            print_config(config);
            Ok(())
        }
        _ => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

/// Renders a mutation: the entries it touched as JSON, or its messages.
fn finish(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => print_json(&result.affected_entries),
        OutputFormat::Text => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}
