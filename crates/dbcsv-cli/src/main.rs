//! dbcsv CLI: validate, normalize, and dump CSV files against a YAML schema.

use clap::{Parser, Subcommand};
use dbcsv_core::config::{parse_delimiter, ReaderConfig, WriterConfig};
use dbcsv_core::schema::Schema;
use dbcsv_core::yaml::load_yaml_schema;
use dbcsv_io::{CsvConverter, CsvRecordReader, Error as IoError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dbcsv")]
#[command(about = "Typed CSV adapter: check and rewrite CSV files against a column schema", long_about = None)]
struct Cli {
    /// Field delimiter (overrides DBCSV_DELIMITER)
    #[arg(long, global = true)]
    delimiter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every record and report values that do not match their column type
    Validate {
        /// Path to the schema YAML file
        #[arg(short, long)]
        schema: PathBuf,

        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Rewrite a CSV file in schema column order with canonical value formatting
    Normalize {
        /// Path to the schema YAML file
        #[arg(short, long)]
        schema: PathBuf,

        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print each record as a JSON object per line
    Dump {
        /// Optional schema YAML file; without it every value is a string
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { schema, input } => {
            validate(&schema, &input, cli.delimiter.as_deref()).map(|failed| {
                if failed > 0 {
                    std::process::exit(1);
                }
            })
        }
        Commands::Normalize {
            schema,
            input,
            output,
        } => normalize(&schema, &input, &output, cli.delimiter.as_deref()),
        Commands::Dump { schema, input } => {
            dump(schema.as_ref(), &input, cli.delimiter.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn reader_config(
    schema: Option<Schema>,
    delimiter: Option<&str>,
) -> Result<ReaderConfig, Box<dyn std::error::Error>> {
    let mut cfg = ReaderConfig::from_env()?;
    if let Some(d) = delimiter {
        cfg.delimiter = parse_delimiter(d)?;
    }
    cfg.schema = schema;
    Ok(cfg)
}

/// Returns the number of records that failed coercion.
fn validate(
    schema_path: &PathBuf,
    input: &PathBuf,
    delimiter: Option<&str>,
) -> Result<u64, Box<dyn std::error::Error>> {
    let schema = load_yaml_schema(schema_path)?;
    let mut reader = CsvRecordReader::from_path(input, reader_config(Some(schema), delimiter)?)?;
    reader.read_header()?;

    let mut failed = 0u64;
    loop {
        match reader.read_record() {
            Ok(Some(_)) => {}
            Ok(None) => break,
            Err(e @ IoError::Coerce { .. }) => {
                failed += 1;
                match reader.last_line() {
                    Some(line) => eprintln!("line {}: {}", line, e),
                    None => eprintln!("{}", e),
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!(
        "{} records ok, {} failed",
        reader.records_read(),
        failed
    );
    Ok(failed)
}

fn normalize(
    schema_path: &PathBuf,
    input: &PathBuf,
    output: &PathBuf,
    delimiter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = load_yaml_schema(schema_path)?;
    let reader_cfg = reader_config(Some(schema.clone()), delimiter)?;
    let mut writer_cfg = WriterConfig::from_env()?;
    writer_cfg.delimiter = reader_cfg.delimiter;

    let mut conv = CsvConverter::new(
        File::open(input)?,
        reader_cfg,
        BufWriter::new(File::create(output)?),
        writer_cfg,
    );
    let n = conv.convert_all(&schema)?;
    tracing::info!(records = n, output = %output.display(), "normalized");
    println!("✓ Wrote {} records to {}", n, output.display());
    Ok(())
}

fn dump(
    schema_path: Option<&PathBuf>,
    input: &PathBuf,
    delimiter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = schema_path.map(load_yaml_schema).transpose()?;
    let mut reader = CsvRecordReader::from_path(input, reader_config(schema, delimiter)?)?;
    reader.read_header()?;
    let headers = reader.headers().map(<[String]>::to_vec).unwrap_or_default();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    while let Some(mut record) = reader.read_record()? {
        let mut obj = serde_json::Map::new();
        for name in &headers {
            if let Some(v) = record.remove(name) {
                obj.insert(name.clone(), serde_json::to_value(v)?);
            }
        }
        writeln!(out, "{}", serde_json::Value::Object(obj))?;
    }
    out.flush()?;
    Ok(())
}
