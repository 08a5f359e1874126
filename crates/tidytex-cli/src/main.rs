use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use encoding_rs::Encoding;
use tidytex_core::CleanOptions;

#[derive(Parser)]
#[command(name = "tidytex")]
#[command(version, about = "Tidy up LaTeX source files", long_about = None)]
struct Cli {
    /// Input LaTeX files
    #[arg(value_name = "FILE", required = true)]
    infiles: Vec<PathBuf>,

    /// Encoding to use for reading and writing files
    #[arg(short, long)]
    encoding: Option<String>,

    /// Modify all files in place
    #[arg(short, long)]
    in_place: bool,

    /// Keep comments
    #[arg(short = 'c', long)]
    keep_comments: bool,

    /// Keep inline math as $...$
    #[arg(short = 'd', long)]
    keep_dollar_math: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        // In-place mode reports "something changed" through the exit code.
        Ok(changed) => {
            if cli.in_place && changed.contains(&true) {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Cleans every input file and returns the per-file "did it change" status.
fn run(cli: &Cli) -> anyhow::Result<Vec<bool>> {
    let encoding = match cli.encoding.as_deref() {
        Some(label) => Some(
            Encoding::for_label(label.as_bytes())
                .ok_or_else(|| anyhow!("unknown encoding label `{label}`"))?,
        ),
        None => None,
    };
    let options = CleanOptions {
        keep_comments: cli.keep_comments,
        keep_dollar_math: cli.keep_dollar_math,
    };

    let mut changed = Vec::with_capacity(cli.infiles.len());
    let mut rendered = Vec::new();
    for path in &cli.infiles {
        let content = read_input(path, encoding)?;
        let out = tidytex_core::clean(&content, &options)
            .with_context(|| format!("failed to clean {}", path.display()))?;
        changed.push(out != content);
        if cli.in_place {
            if out != content {
                write_output(path, &out, encoding)?;
                log::info!("rewrote {}", path.display());
            }
        } else {
            rendered.push(out);
        }
    }
    if !cli.in_place {
        print!("{}", rendered.join("\n"));
    }
    Ok(changed)
}

fn read_input(path: &Path, encoding: Option<&'static Encoding>) -> anyhow::Result<String> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    match encoding {
        Some(encoding) => {
            let (text, _, had_errors) = encoding.decode(&raw);
            if had_errors {
                bail!("{} is not valid {}", path.display(), encoding.name());
            }
            Ok(text.into_owned())
        }
        None => String::from_utf8(raw).map_err(|_| {
            anyhow!(
                "{} is not valid UTF-8 (use --encoding to override)",
                path.display()
            )
        }),
    }
}

fn write_output(
    path: &Path,
    text: &str,
    encoding: Option<&'static Encoding>,
) -> anyhow::Result<()> {
    match encoding {
        Some(encoding) => {
            let (bytes, _, unmappable) = encoding.encode(text);
            if unmappable {
                bail!(
                    "output for {} contains characters not representable in {}",
                    path.display(),
                    encoding.name()
                );
            }
            fs::write(path, bytes)
        }
        None => fs::write(path, text),
    }
    .with_context(|| format!("failed to write {}", path.display()))
}
