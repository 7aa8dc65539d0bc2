use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use nomad_stanza::{Job, Result, render, serialize};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nomad-stanza")]
#[command(about = "Validate job descriptions and render Nomad job files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Hcl,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON job description and render it.
    Render {
        #[arg(long)]
        job: String,

        /// Write here instead of stdout.
        #[arg(short = 'o', long)]
        out: Option<String>,

        #[arg(long, default_value_t = 2)]
        indent: usize,

        #[arg(long, value_enum, default_value_t = OutputFormat::Hcl)]
        format: OutputFormat,
    },
    /// Validate a JSON job description only.
    Check {
        #[arg(long)]
        job: String,
    },
}

fn load_job(path: &str) -> Result<Job> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read job file {}", path))?;
    Job::from_json_str(&text).with_context(|| format!("invalid job description {}", path))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            job,
            out,
            indent,
            format,
        } => {
            // 1) Parse + validate.
            let parsed = load_job(&job)?;

            // 2) Build the block tree.
            let tree = serialize(&parsed);

            // 3) Render.
            let text = match format {
                OutputFormat::Hcl => render::render_hcl(&tree, indent),
                OutputFormat::Json => render::render_json(&tree)?,
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, text).with_context(|| format!("write {}", path))?;
                    eprintln!("Wrote {}", path);
                }
                None => print!("{}", text),
            }
        }
        Commands::Check { job } => {
            let parsed = load_job(&job)?;
            println!("job {:?} is valid", parsed.id());
        }
    }

    Ok(())
}
