use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Import from organized modules
use ctx_metrics::constants::SENTINEL_LINE;
use ctx_metrics::{ClaudePaths, ContextMetrics, Result, compute_context_metrics};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the status line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let (line, code) = match run().await {
        Ok(Some(metrics)) => (metrics.to_string(), ExitCode::SUCCESS),
        Ok(None) => {
            tracing::debug!("no usage record in transcript");
            (SENTINEL_LINE.to_string(), ExitCode::SUCCESS)
        }
        Err(err) => {
            emit(&mut io::stderr().lock(), &format!("Error: {}", error_chain(&err)));
            (SENTINEL_LINE.to_string(), ExitCode::FAILURE)
        }
    };

    emit(&mut io::stdout().lock(), &line);
    code
}

// The reader may already be gone (closed pipe); the exit code still reports the outcome
fn emit(out: &mut impl Write, line: &str) {
    if let Err(err) = writeln!(out, "{}", line).and_then(|()| out.flush())
        && err.kind() != io::ErrorKind::BrokenPipe
    {
        tracing::warn!(error = %err, "failed to write output");
    }
}

async fn run() -> Result<Option<ContextMetrics>> {
    let paths = ClaudePaths::from_home()?;
    compute_context_metrics(&paths).await
}

// "outer: inner: innermost"
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
