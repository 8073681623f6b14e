// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Lightbox CLI
//!
//! Renders an overlay into an HTML page and prints the resulting markup.

use std::env;
use std::io::Read;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use url::Url;

use lightbox::{parse_html_with_url, LoadOptions, Overlay, Window};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lightbox=info".parse().expect("static directive")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "render" => {
            if args.len() < 4 {
                eprintln!("Usage: lightbox render <page.html|-> <content-url> [OPTIONS]");
                return ExitCode::from(1);
            }
            match render(&args[2], &args[3], &args[4..]) {
                Ok(html) => {
                    println!("{}", html);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    ExitCode::from(1)
                }
            }
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("lightbox {}", lightbox::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Lightbox - modal overlay with an embedded content frame

USAGE:
    lightbox <COMMAND> [OPTIONS]

COMMANDS:
    render <page> <url>   Load an overlay for <url> into <page> and print the HTML
    help                  Show this help message
    version               Show version information

RENDER OPTIONS:
    --z-index <N>         Background z-index (default 100)
    --background <CSS>    Background CSS value (default rgba(0,0,0,0.5))
    --width <PX>          Content frame width (default 600)
    --height <PX>         Content frame height (default 400)
    --options <FILE>      JSON options file, applied before the flags above
    --base-url <URL>      URL of the page, used to resolve a relative <url>
    --prefix <PREFIX>     Element id prefix (default fxa)

Use '-' as <page> to read the page from stdin.

EXAMPLES:
    lightbox render index.html https://accounts.example.com/signin
    lightbox render - /signin --base-url https://relier.example.com/ --z-index 500
"#
    );
}

/// Flags accepted by `render`
#[derive(Debug, Default)]
struct RenderFlags {
    z_index: Option<i32>,
    background: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    options_file: Option<String>,
    base_url: Option<Url>,
    prefix: Option<String>,
}

fn parse_flags(args: &[String]) -> anyhow::Result<RenderFlags> {
    let mut flags = RenderFlags::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| anyhow!("missing value for {}", flag))?;
        match flag.as_str() {
            "--z-index" => flags.z_index = Some(value.parse::<i32>().context("--z-index")?),
            "--background" => flags.background = Some(value.clone()),
            "--width" => flags.width = Some(value.parse::<u32>().context("--width")?),
            "--height" => flags.height = Some(value.parse::<u32>().context("--height")?),
            "--options" => flags.options_file = Some(value.clone()),
            "--base-url" => flags.base_url = Some(Url::parse(value).context("--base-url")?),
            "--prefix" => flags.prefix = Some(value.clone()),
            other => bail!("unknown option {}", other),
        }
    }

    Ok(flags)
}

fn render(page: &str, content_url: &str, args: &[String]) -> anyhow::Result<String> {
    let flags = parse_flags(args)?;

    let html = if page == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading page from stdin")?;
        buf
    } else {
        std::fs::read_to_string(page).with_context(|| format!("reading {}", page))?
    };

    let mut options = match &flags.options_file {
        Some(path) => LoadOptions::from_file(path).with_context(|| format!("loading {}", path))?,
        None => LoadOptions::default(),
    };
    if let Some(z) = flags.z_index {
        options = options.z_index(z);
    }
    if let Some(bg) = flags.background {
        options = options.background(bg);
    }
    if flags.width.is_some() || flags.height.is_some() {
        let current = options.frame_size;
        options = options.frame_size(
            flags.width.unwrap_or(current.width),
            flags.height.unwrap_or(current.height),
        );
    }

    let document = parse_html_with_url(&html, flags.base_url)?;
    let window = Window::new(document);
    let mut overlay = match &flags.prefix {
        Some(prefix) => Overlay::with_id_prefix(&window, prefix)?,
        None => Overlay::new(&window)?,
    };
    overlay.load_with(content_url, &options)?;

    let src = overlay.content_url()?;
    tracing::info!(
        background = overlay.ids().background(),
        frame = overlay.ids().frame(),
        src = %src,
        "Rendered overlay"
    );

    let dom = window
        .dom()
        .ok_or_else(|| anyhow!("window lost its document"))?;
    Ok(dom.outer_html())
}
