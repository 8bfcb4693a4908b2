use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::jobs::{JobSummary, RecordOutcome};

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(obj)) = (data, response.as_object_mut()) {
                obj.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// One status line per processed record
pub fn output_record(output_format: &OutputFormat, outcome: &RecordOutcome) {
    match output_format {
        OutputFormat::Json => match serde_json::to_string(outcome) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Error: {}", e),
        },
        OutputFormat::Text => match &outcome.error {
            None => println!("✓ {} '{}'", outcome.action, outcome.record),
            Some(error) => {
                println!("✗ failed to {} '{}'", outcome.action, outcome.record);
                println!("  {}", error);
            }
        },
    }
}

/// Closing line of a job run
pub fn output_summary(output_format: &OutputFormat, job: &str, summary: &JobSummary) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                "job": job,
                "summary": summary
            }))?);
        }
        OutputFormat::Text => {
            println!(
                "Done. {}: {} processed, {} succeeded, {} failed",
                job, summary.processed, summary.succeeded, summary.failed
            );
        }
    }
    Ok(())
}

/// Render a top-level error for stderr, including every cause in the chain.
///
/// `verbose` switches to the debug form with the full cause list.
pub fn error_message(error: &anyhow::Error, verbose: bool) -> String {
    if verbose {
        format!("Error: {error:?}")
    } else {
        format!("Error: {error:#}")
    }
}

/// Whether `CLI_VERBOSE` asks for detailed errors
pub fn verbose_errors() -> bool {
    matches!(std::env::var("CLI_VERBOSE").as_deref(), Ok("true") | Ok("1"))
}
