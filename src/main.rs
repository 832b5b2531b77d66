use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use vanity_pages::{config, generate, output};

#[derive(Parser)]
#[command(name = "vanity-pages")]
#[command(about = "Static site generator for Go vanity import paths")]
#[command(long_about = "\
Static site generator for Go vanity import paths

Writes one page per module with go-import and go-source meta tags, a root
page, a CNAME file and Netlify-style _redirects rules:

  www/
  ├── CNAME                # routerd.net
  ├── index.html           # → https://github.com/routerd
  ├── _redirects           # /<module>/* go-get=1 /<module>/index.html 200
  └── kube-ipam/
      └── index.html       # go-import / go-source, → godoc

The output directory is deleted and regenerated on every run.

Run without arguments to build with the defaults (overridden by vanity.toml
when present). Run 'vanity-pages gen-config' for a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (must exist). Without it, ./vanity.toml is used when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory (overrides output_dir from the config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the site (default)
    Build,
    /// Validate config and show the modules that would be published
    Check,
    /// Print a stock vanity.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_site_config(cli.config.as_deref(), cli.output)?;
            println!(
                "==> Generating {} modules → {}",
                site_config.modules.len(),
                site_config.output_dir.display()
            );
            let report = generate::generate(&site_config)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            let site_config = config::load_site_config(cli.config.as_deref(), cli.output)?;
            output::print_check_output(&site_config);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
