//! Extract command - run one document handler on a local file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde_json::Value;
use tracing::{debug, info};

use docsift_core::documents::{validate_pdf_content_type, PDF_CONTENT_TYPE};
use docsift_core::{DocumentKind, DocumentProcessor};

use super::load_config;
use crate::response::ApiResponse;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Kind of document
    #[arg(value_enum)]
    kind: DocumentArg,

    /// Input file (image, or PDF for `pdf`)
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DocumentArg {
    Invoice,
    Receipt,
    Product,
    Text,
    Barcode,
    Pdf,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::Invoice => DocumentKind::Invoice,
            DocumentArg::Receipt => DocumentKind::Receipt,
            DocumentArg::Product => DocumentKind::Product,
            DocumentArg::Text => DocumentKind::Text,
            DocumentArg::Barcode => DocumentKind::Barcode,
            DocumentArg::Pdf => DocumentKind::Pdf,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// The JSON response envelope
    Json,
    /// One `field: value` line per result field
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let kind = DocumentKind::from(args.kind);
    info!("Extracting {} from {}", kind, args.input.display());

    let data = fs::read(&args.input)?;
    let processor = DocumentProcessor::from_config(&config);
    let response = extract(&processor, kind, &args.input, &data);

    let output = format_response(&response, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Same contract as the upload routes: a local `.pdf` stands in for the
/// `application/pdf` content type.
fn extract(
    processor: &DocumentProcessor,
    kind: DocumentKind,
    path: &Path,
    data: &[u8],
) -> ApiResponse {
    if kind == DocumentKind::Pdf {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        let content_type = is_pdf.then_some(PDF_CONTENT_TYPE);

        if let Err(e) = validate_pdf_content_type(content_type) {
            return ApiResponse::failure(e.to_string());
        }
    }

    ApiResponse::from(processor.process(kind, data))
}

fn format_response(response: &ApiResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Text => Ok(format_text(response)),
    }
}

fn format_text(response: &ApiResponse) -> String {
    let mut output = String::new();

    if let Some(error) = &response.error {
        output.push_str(&format!("error: {}\n", error));
    }

    if let Some(Value::Object(fields)) = &response.data {
        for (name, value) in fields {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Null => "-".to_string(),
                other => other.to_string(),
            };
            output.push_str(&format!("{}: {}\n", name, rendered));
        }
    }

    output.trim_end().to_string()
}
