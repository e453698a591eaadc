use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use tracing::info;

use stitchkit::{
    init_logging, load_attachments, load_segments, render_document, Assembly, PatternParams,
};

struct CliArgs {
    slices_dir: PathBuf,
    output: Option<PathBuf>,
    params: PatternParams,
}

const USAGE: &str = "\
Usage: stitchkit <slices-dir> [output-file] [options]

Turns a folder of slice JSON files into a crochet pattern document.

Options:
  --stitch-width <w>   target stitch length (default 0.15)
  --resample <w>       resample rings at arc-length spacing <w>
  --sort               re-order slice points by angle around the centroid
  --version            print version and exit
";

fn parse_args() -> anyhow::Result<Option<CliArgs>> {
    let mut params = PatternParams::default();
    let mut positional: Vec<PathBuf> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" => {
                println!("stitchkit {} ({})", stitchkit::VERSION, stitchkit::BUILD_DATE);
                return Ok(None);
            }
            "--help" | "-h" => {
                print!("{}", USAGE);
                return Ok(None);
            }
            "--sort" => params.sort_points = true,
            "--stitch-width" => {
                let value = args.next().context("--stitch-width needs a value")?;
                params.stitch_width = value.parse().context("invalid --stitch-width")?;
            }
            "--resample" => {
                let value = args.next().context("--resample needs a value")?;
                params.resample_spacing = Some(value.parse().context("invalid --resample")?);
            }
            other if other.starts_with("--") => {
                anyhow::bail!("unknown option '{}'\n{}", other, USAGE);
            }
            other => positional.push(PathBuf::from(other)),
        }
    }

    let mut positional = positional.into_iter();
    let slices_dir = positional
        .next()
        .with_context(|| format!("missing <slices-dir>\n{}", USAGE))?;
    let output = positional.next();

    Ok(Some(CliArgs {
        slices_dir,
        output,
        params,
    }))
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let started = Instant::now();
    args.params.validate()?;

    let segments = load_segments(&args.slices_dir)
        .with_context(|| format!("failed to load slices from {}", args.slices_dir.display()))?;
    anyhow::ensure!(
        !segments.is_empty(),
        "no segment files found in {}",
        args.slices_dir.display()
    );
    let attachments = load_attachments(&args.slices_dir)?;

    let assembly = Assembly::from_data(segments, attachments.as_ref());
    let patterns = assembly.run(&args.params)?;
    let document = render_document(&patterns);

    match &args.output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("pattern written to {}", path.display());
        }
        None => print!("{}", document),
    }

    info!(
        "patterned {} segments in {:.3}s",
        patterns.len(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }
    match parse_args() {
        Ok(Some(args)) => {
            if let Err(e) = run(args) {
                eprintln!("Error: {:#}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
