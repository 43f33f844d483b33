use anyhow::{Context, Result};
use doc2doc_config::Config;
use doc2doc_engine::{PageError, RenderOptions, generate_page, markdown_to_html_node};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl Args {
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [_, input] => Some(Self {
                input: PathBuf::from(input),
                output: None,
            }),
            [_, input, output] => Some(Self {
                input: PathBuf::from(input),
                output: Some(PathBuf::from(output)),
            }),
            _ => None,
        }
    }
}

/// Full page when a template is given, otherwise the bare document `div`.
fn render(
    markdown: &str,
    template: Option<&str>,
    options: &RenderOptions,
) -> Result<String, PageError> {
    match template {
        Some(template) => generate_page(markdown, template, options),
        None => Ok(markdown_to_html_node(markdown)?.to_html_with(options)?),
    }
}

/// Explicit path first, then the configured output directory; `None` is stdout.
fn destination(args: &Args, config: &Config) -> Option<PathBuf> {
    args.output
        .clone()
        .or_else(|| config.output_path_for(&args.input))
}

fn run(args: &Args) -> Result<()> {
    let config_path = Config::config_path();
    let config = match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
    };

    let markdown = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let template = config
        .template_path
        .as_deref()
        .map(|path| {
            log::info!("Using template {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))
        })
        .transpose()?;

    let options = RenderOptions {
        escape_html: config.escape_html,
    };
    let html = render(&markdown, template.as_deref(), &options)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    match destination(args, &config) {
        Some(path) => write_output(&path, &html)?,
        None => println!("{html}"),
    }
    Ok(())
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let raw: Vec<String> = env::args().collect();
    let Some(args) = Args::parse(&raw) else {
        let program_name = raw.first().map_or("doc2doc-cli", String::as_str);
        eprintln!("Usage: {program_name} <input.md> [output.html]");
        process::exit(1);
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
