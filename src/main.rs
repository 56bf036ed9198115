use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use latest::config::{ENV_DISABLE, EnvConfig, SourceConfig};
use latest::version::checker::Checker;
use latest::version::semver::VersionFix;
use latest::version::source::Source;
use latest::version::sources::{GitHubTagSource, HtmlMetaSource, HtmlSource, JsonSource};

/// Exits with 0 when VERSION is the latest version on the source, 1 otherwise.
/// By default, tags of a GitHub repository are checked.
#[derive(Parser)]
#[command(name = "latest")]
#[command(version, about = "Check whether a version is the latest one")]
struct Cli {
    /// Version to check, a leading `v` is ignored
    #[arg(id = "target", value_name = "VERSION")]
    version: String,

    /// GitHub repository owner name
    #[arg(long, requires = "repo")]
    owner: Option<String>,

    /// GitHub repository name
    #[arg(long, requires = "owner")]
    repo: Option<String>,

    /// Read `{"version": "..."}` from URL
    #[arg(long, value_name = "URL", conflicts_with_all = ["owner", "html", "config"])]
    json: Option<String>,

    /// Read the version from the page at URL (the whole body, or a meta tag with --meta)
    #[arg(long, value_name = "URL", conflicts_with_all = ["owner", "config"])]
    html: Option<String>,

    /// Product name of the `go-latest` meta tag to read from --html
    #[arg(long, value_name = "NAME", requires = "html")]
    meta: Option<String>,

    /// Read the source from a JSON configuration file
    #[arg(long, value_name = "FILE", conflicts_with = "owner")]
    config: Option<PathBuf>,

    /// Succeed only when VERSION is greater than every published version
    #[arg(long)]
    new: bool,

    /// Print verbose (debug) output
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn source(&self) -> anyhow::Result<Box<dyn Source>> {
        if let Some(path) = &self.config {
            return Ok(SourceConfig::load(path)?.into_source());
        }

        if let Some(url) = &self.json {
            return Ok(Box::new(JsonSource::new(url)));
        }

        if let Some(url) = &self.html {
            return Ok(match &self.meta {
                Some(name) => Box::new(HtmlMetaSource::new(url, name)),
                None => Box::new(HtmlSource::new(url)),
            });
        }

        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok(Box::new(
                GitHubTagSource::new(owner, repo).with_fix(VersionFix::delete_leading_v()),
            )),
            _ => anyhow::bail!("--owner and --repo, --json, --html or --config must be set"),
        }
    }
}

async fn run(cli: Cli, env: EnvConfig) -> anyhow::Result<bool> {
    if env.disabled {
        debug!("check disabled by {}", ENV_DISABLE);
        return Ok(true);
    }

    let source = cli.source()?;
    let target = VersionFix::delete_leading_v().apply(&cli.version);

    let result = Checker::new()
        .with_target_fix(VersionFix::delete_leading_v())
        .check(&cli.version, source.as_ref())
        .await?;

    if !result.malformed.is_empty() {
        debug!("ignored malformed versions: {:?}", result.malformed);
    }

    if let Some(meta) = result.meta.as_ref().filter(|m| !m.is_empty()) {
        debug!("message: {:?}, url: {:?}", meta.message, meta.url);
    }

    let ok = result.is_up_to_date(cli.new);
    match (cli.new, ok) {
        (true, true) => debug!("{} is new", target),
        (true, false) => debug!("{} is not new", target),
        (false, true) => debug!("{} is latest", target),
        (false, false) => debug!("{} is not latest ({})", target, result.current),
    }

    Ok(ok)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let env = EnvConfig::from_env();

    latest::log::init(cli.debug || env.debug)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(run(cli, env)) {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(e) => {
            eprintln!("Failed to check version: {:#}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_succeeds_when_disabled_even_if_source_cannot_be_built() {
        let cli = Cli::parse_from(["latest", "--config", "/nonexistent/source.json", "1.0.0"]);
        let env = EnvConfig {
            disabled: true,
            debug: false,
        };

        assert!(run(cli, env).await.unwrap());
    }

    #[tokio::test]
    async fn run_fails_on_missing_config_when_enabled() {
        let cli = Cli::parse_from(["latest", "--config", "/nonexistent/source.json", "1.0.0"]);

        assert!(run(cli, EnvConfig::default()).await.is_err());
    }
}
