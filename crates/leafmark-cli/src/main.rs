//! Leafmark CLI - Render inline markdown to markup and inspect text nodes
//!
//! Usage:
//!   lmcli [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   render    Render each paragraph to a `<p>` element (default)
//!   nodes     Show the text nodes of each paragraph
//!   links     List `[label](url)` references
//!   images    List `![alt](src)` references

use std::env;
use std::fs;
use std::process;

use leafmark_core::{
    extract_markdown_images, extract_markdown_links, render_inline, text_to_text_nodes, TextNode,
};
use log::{debug, info};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;
    init_logging(config.verbose);
    debug!("{:?}", config);

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let paragraphs = split_paragraphs(&input);
    info!("{}: {} paragraph(s)", config.file, paragraphs.len());

    match config.command {
        Command::Render => cmd_render(&paragraphs, &config),
        Command::Nodes => cmd_nodes(&paragraphs, &config),
        Command::Links => cmd_references(&input, extract_markdown_links, &config),
        Command::Images => cmd_references(&input, extract_markdown_images, &config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Nodes,
    Links,
    Images,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("lmcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "render" => command = Command::Render,
            "nodes" => command = Command::Nodes,
            "links" => command = Command::Links,
            "images" => command = Command::Images,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        verbose,
    })
}

/// `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn print_help() {
    eprintln!(
        r#"lmcli - render inline markdown to markup

USAGE:
    lmcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    render      Render each paragraph to a <p> element (default)
    nodes       Show the text nodes of each paragraph
    links       List [label](url) references
    images      List ![alt](src) references

OPTIONS:
    -v, --verbose    Enable debug logging
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    lmcli notes.md            Render paragraphs to markup
    lmcli -j nodes notes.md   Show text nodes as JSON
    lmcli links notes.md      List links
"#
    );
}

/// Paragraphs are separated by blank lines; lines inside one are joined
/// with a single space.
fn split_paragraphs(input: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(paragraphs: &[String], config: &Config) -> Result<(), String> {
    let mut rendered = Vec::with_capacity(paragraphs.len());

    for (i, paragraph) in paragraphs.iter().enumerate() {
        let html = render_inline(paragraph).map_err(|e| format!("paragraph {}: {}", i + 1, e))?;
        rendered.push(html);
    }

    match config.format {
        OutputFormat::Json => print_json(&rendered)?,
        OutputFormat::Text => {
            for html in &rendered {
                println!("{}", html);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Nodes Command
// =============================================================================

#[derive(Serialize)]
struct JsonTextNode<'a> {
    text: &'a str,
    #[serde(rename = "type")]
    text_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl<'a> From<&'a TextNode> for JsonTextNode<'a> {
    fn from(node: &'a TextNode) -> Self {
        JsonTextNode {
            text: &node.text,
            text_type: node.text_type.as_str(),
            url: node.url.as_deref(),
        }
    }
}

fn cmd_nodes(paragraphs: &[String], config: &Config) -> Result<(), String> {
    let mut all = Vec::with_capacity(paragraphs.len());

    for (i, paragraph) in paragraphs.iter().enumerate() {
        let nodes =
            text_to_text_nodes(paragraph).map_err(|e| format!("paragraph {}: {}", i + 1, e))?;
        all.push(nodes);
    }

    match config.format {
        OutputFormat::Json => {
            let json: Vec<Vec<JsonTextNode>> = all
                .iter()
                .map(|nodes| nodes.iter().map(JsonTextNode::from).collect())
                .collect();
            print_json(&json)?;
        }
        OutputFormat::Text => {
            for (i, nodes) in all.iter().enumerate() {
                println!("[{}] {} node(s)", i + 1, nodes.len());
                for node in nodes {
                    println!("  {}", node);
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// Links / Images Commands
// =============================================================================

#[derive(Serialize)]
struct JsonReference<'a> {
    label: &'a str,
    url: &'a str,
}

fn cmd_references(
    input: &str,
    extract: fn(&str) -> Vec<(&str, &str)>,
    config: &Config,
) -> Result<(), String> {
    let pairs = extract(input);
    debug!("{} reference(s) found", pairs.len());

    match config.format {
        OutputFormat::Json => {
            let json: Vec<JsonReference> = pairs
                .iter()
                .map(|&(label, url)| JsonReference { label, url })
                .collect();
            print_json(&json)?;
        }
        OutputFormat::Text => {
            for (label, url) in pairs {
                println!("{}\t{}", label, url);
            }
        }
    }

    Ok(())
}

// =============================================================================
// JSON Output
// =============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("lmcli")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_args_defaults_to_render() {
        let config = parse_args(&args(&["notes.md"])).unwrap();
        assert!(matches!(config.command, Command::Render));
        assert!(matches!(config.format, OutputFormat::Text));
        assert!(!config.verbose);
        assert_eq!(config.file, "notes.md");
    }

    #[test]
    fn parse_args_command_and_flags() {
        let config = parse_args(&args(&["-j", "-v", "links", "notes.md"])).unwrap();
        assert!(matches!(config.command, Command::Links));
        assert!(matches!(config.format, OutputFormat::Json));
        assert!(config.verbose);
    }

    #[test]
    fn parse_args_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--bogus", "a.md"])).is_err());
        assert!(parse_args(&args(&["a.md", "b.md"])).is_err());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let input = "first line\n  continues here\n\n\n second\n";
        assert_eq!(
            split_paragraphs(input),
            vec!["first line continues here".to_string(), "second".to_string()]
        );
        assert!(split_paragraphs("\n \n").is_empty());
    }

    #[test]
    fn json_text_node_skips_missing_url() {
        let node = TextNode::plain("hi");
        let json = serde_json::to_string(&JsonTextNode::from(&node)).unwrap();
        assert_eq!(json, r#"{"text":"hi","type":"plain"}"#);
    }
}
