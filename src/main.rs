use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use wiki_cleaner::cleaner::PageCleaner;

#[derive(Parser)]
#[command(
    name = "wiki_cleaner",
    about = "Clean zh-Wikipedia extractor dumps into a Simplified-Chinese JSONL corpus"
)]
struct Cli {
    /// Input directory (WikiExtractor output tree, scanned recursively)
    #[arg(long = "input_dir", default_value = "extracted")]
    input_dir: PathBuf,

    /// Output JSONL file path
    #[arg(long = "output_file", default_value = "cleaned_wiki_1000.jsonl")]
    output_file: PathBuf,

    /// Max records to emit (<= 0 means all)
    #[arg(long = "max_docs", default_value_t = 1000)]
    max_docs: i64,

    /// Minimum character length of cleaned text to keep a record
    #[arg(long = "min_length", default_value_t = 100)]
    min_length: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let cleaner = PageCleaner::new(
        cli.input_dir,
        cli.output_file.clone(),
        cli.max_docs,
        cli.min_length,
    );
    let stats = cleaner.process()?;
    stats.report(&cli.output_file);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
