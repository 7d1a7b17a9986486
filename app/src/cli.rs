use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use masthead::{
    nodes::{base, meta, title, Document, Node},
    render::{NodeRef, RenderDocument},
    Config,
};

use crate::{shell, shell::init_logger, App};

const CONFIG_FILE: &str = "masthead.toml";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli.config()?;
    let profile = cli.profile();
    let base = cli.base(&config)?;

    let app = App::new(config)?;
    let document = shell_document(app.config(), &base);
    app.boot(&document)
        .context("rendered shell has no mount container")?;

    let html = if cli.pretty {
        format!("{document:#}\n")
    } else {
        format!("{document}\n")
    };

    match &cli.out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("failed to write `{path}`"))?;
            shell().status("Rendered", format!("{path} ({profile})"));
        }
        None => print!("{html}"),
    }
    Ok(())
}

/// Render the application into a static HTML shell
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path to the masthead.toml file
    #[arg(short, long)]
    config: Option<Utf8PathBuf>,
    /// Render with the release profile
    #[arg(short, long)]
    release: bool,
    /// Render with the given profile
    #[arg(long, conflicts_with = "release")]
    profile: Option<String>,
    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    out: Option<Utf8PathBuf>,
    /// Indent nested elements
    #[arg(long)]
    pretty: bool,
    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn profile(&self) -> &str {
        if self.release {
            "release"
        } else if let Some(profile) = &self.profile {
            profile
        } else {
            "dev"
        }
    }

    /// An explicitly requested profile must exist; the default one falls back to `/`.
    fn base(&self, config: &Config) -> Result<String> {
        if self.release || self.profile.is_some() {
            Ok(config.profile(self.profile())?.base.clone())
        } else {
            Ok(config.base(self.profile()).to_string())
        }
    }

    fn config(&self) -> Result<Config> {
        if let Some(path) = &self.config {
            return Ok(Config::load(path)?);
        }

        let local = Utf8Path::new(CONFIG_FILE);
        if local.is_file() {
            Ok(Config::load(local)?)
        } else {
            log::debug!("no {CONFIG_FILE} found, using defaults");
            Ok(Config::default())
        }
    }
}

/// An empty page for `config`, served from `base`, with the mount container in its body.
pub fn shell_document(config: &Config, base: &str) -> RenderDocument {
    let document = RenderDocument::with_container(&config.container);

    if let Some(head) = document.head() {
        let charset: NodeRef = meta! { charset => "utf-8"; };
        let viewport: NodeRef = meta! {
            name => "viewport";
            content => "width=device-width, initial-scale=1.0";
        };
        let base_href: NodeRef = base! { href => base; };
        let title: NodeRef = title! { "masthead"; };

        for node in [charset, viewport, base_href, title] {
            head.insert(&node, None);
        }
    }

    document
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use masthead::Config;

    use super::{shell_document, Cli};
    use crate::App;

    #[test]
    fn profile_selection() {
        let cli = Cli::parse_from(["masthead-render"]);
        assert_eq!(cli.profile(), "dev");

        let cli = Cli::parse_from(["masthead-render", "--release"]);
        assert_eq!(cli.profile(), "release");

        let cli = Cli::parse_from(["masthead-render", "--profile", "staging"]);
        assert_eq!(cli.profile(), "staging");

        assert!(Cli::try_parse_from(["masthead-render", "-r", "--profile", "dev"]).is_err());
    }

    #[test]
    fn base_for_profile() {
        let config = Config::default();
        let cli = Cli::parse_from(["masthead-render", "--release"]);
        assert_eq!(cli.base(&config).unwrap(), "/testdeploy");

        let bare = Config {
            profiles: Default::default(),
            ..Config::default()
        };
        let cli = Cli::parse_from(["masthead-render"]);
        assert_eq!(cli.base(&bare).unwrap(), "/");

        let cli = Cli::parse_from(["masthead-render", "--profile", "dev"]);
        assert!(cli.base(&bare).is_err());
    }

    #[test]
    fn pretty_page_keeps_header_text() {
        let config = Config::default();
        let document = shell_document(&config, "./");
        App::new(config).unwrap().boot(&document).unwrap();

        let html = format!("{document:#}");
        assert!(html.contains("<div class=\"_heading_1k9m2_1 heading\">header</div>"));
        assert!(html.contains("<title>masthead</title>"));

        let body = &html[html.find("<body>").unwrap()..];
        assert!(body.lines().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn shell_head() {
        let document = shell_document(&Config::default(), "/testdeploy");

        assert_eq!(
            document.to_string(),
            "<!DOCTYPE html><html><head>\
             <meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
             <base href=\"/testdeploy\">\
             <title>masthead</title>\
             </head><body><div id=\"root\"></div></body></html>"
        );
    }

    #[test]
    fn renders_full_page() {
        let config = Config::default();
        let document = shell_document(&config, "./");
        let app = App::new(config).unwrap();

        app.boot(&document).unwrap();

        let html = document.to_string();
        assert!(html.contains("<base href=\"./\">"));
        assert!(html.contains("<style data-stylesheet=\"index\">"));
        assert!(html.ends_with(
            "<body><div id=\"root\"><div class=\"_heading_1k9m2_1 heading\">header</div></div></body></html>"
        ));
    }
}
