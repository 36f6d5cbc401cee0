// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use flatfile_cms::utils::logging::{format_info, format_success};
use flatfile_cms::{Collection, Config, Entry, FileFinder, MarkdownRenderer, Publishable};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "flatfile_cms")]
#[command(version = "0.1.0")]
#[command(about = "Flat-file CMS: front-matter documents with full-text search", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a collection's files for the given text
    Search {
        /// Collection name under the content root, e.g. "articles"
        collection: String,

        /// Query text, matched case-insensitively as a literal
        query: String,
    },

    /// Print one document's matter and body
    Show {
        collection: String,

        id: String,

        #[arg(long)]
        json: bool,

        #[arg(long)]
        html: bool,
    },

    /// Set a single matter value and save the document
    Set {
        collection: String,

        id: String,

        key: String,

        value: String,
    },

    /// List the document ids stored in a collection
    List {
        collection: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    flatfile_cms::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Search { collection, query } => {
            cmd_search(&config, &collection, &query)?;
        }
        Commands::Show {
            collection,
            id,
            json,
            html,
        } => {
            cmd_show(&config, &collection, &id, json, html)?;
        }
        Commands::Set {
            collection,
            id,
            key,
            value,
        } => {
            cmd_set(&config, &collection, &id, &key, &value)?;
        }
        Commands::List { collection } => {
            cmd_list(&config, &collection)?;
        }
    }

    Ok(())
}

fn cmd_search(config: &Config, collection_name: &str, query: &str) -> Result<()> {
    info!("Searching {} for: {}", collection_name, query);

    let collection = Collection::new(&config.content, collection_name);
    let finder = FileFinder::new(config.search.clone());

    let results = finder
        .find(&collection, query)
        .context("Search failed")?;

    if results.is_empty() {
        println!("\nNo results found for query: \"{}\"\n", query);
        return Ok(());
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("Found {} result(s)\n", results.len());
    println!("{}", "=".repeat(80));

    let renderer = MarkdownRenderer::new();
    for (idx, entry) in results.iter().enumerate() {
        let title = entry.get("title").unwrap_or(entry.filename());
        println!("\n{}. {} ({})", idx + 1, title, entry.filename());

        let excerpt = renderer.excerpt(entry.body(), 200);
        for line in excerpt.lines().take(3) {
            println!("   {}", line);
        }
    }

    println!("\n{}", "=".repeat(80));
    Ok(())
}

fn cmd_show(
    config: &Config,
    collection_name: &str,
    id: &str,
    json: bool,
    html: bool,
) -> Result<()> {
    let entry = find_entry(config, collection_name, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(entry.matter())?);
        return Ok(());
    }

    for (key, value) in entry.matter() {
        println!("{}: {}", key, value);
    }

    println!();

    if html {
        println!("{}", MarkdownRenderer::new().render_html(entry.body()));
    } else {
        println!("{}", entry.body());
    }

    Ok(())
}

fn cmd_set(
    config: &Config,
    collection_name: &str,
    id: &str,
    key: &str,
    value: &str,
) -> Result<()> {
    let mut entry = find_entry(config, collection_name, id)?;

    entry.set(key, value).save().context("Failed to save document")?;

    println!(
        "{}",
        format_success(&format!("Updated {} in {}/{}", key, collection_name, id))
    );

    Ok(())
}

fn cmd_list(config: &Config, collection_name: &str) -> Result<()> {
    let collection = Collection::new(&config.content, collection_name);
    let ids = collection.list_ids().context("Failed to list collection")?;

    if ids.is_empty() {
        println!("{}", format_info(&format!("No documents in {}", collection_name)));
        return Ok(());
    }

    for id in ids {
        match collection.find(&id)? {
            Some(entry) => {
                let marker = if entry.is_published() { "published" } else { "draft" };
                let title = entry.get("title").unwrap_or("(untitled)");
                println!("{:30} {:10} {}", id, marker, title);
            }
            None => println!("{}", id),
        }
    }

    Ok(())
}

fn find_entry(config: &Config, collection_name: &str, id: &str) -> Result<Entry> {
    let collection = Collection::new(&config.content, collection_name);

    match collection.find(id)? {
        Some(entry) => Ok(entry),
        None => bail!("No {} document with id {}", collection_name, id),
    }
}
