//! Health check command

use super::{print_json, OutputFormat};
use anyhow::Result;
use matcha_api_client::endpoints::health::EndpointStatus;
use matcha_api_client::MatchaClient;
use matcha_cli::output::{format_duration, Status};

pub async fn run(detailed: bool, format: OutputFormat) -> Result<()> {
    let client = MatchaClient::new().map_err(matcha_core::Error::from)?;
    let report = client.health().check().await;

    if format == OutputFormat::Json {
        print_json(&report)?;
    } else {
        Status::header("Service Health");
        print_status("Spot store", &report.store, detailed);
        print_status("Geocoder", &report.geocoder, detailed);
    }

    if report.is_healthy() {
        Ok(())
    } else {
        Err(matcha_core::Error::network("One or more services are unreachable").into())
    }
}

fn print_status(label: &str, status: &EndpointStatus, detailed: bool) {
    let mut line = format!("{label}: {}", status.url);
    if status.status_code != 0 {
        line.push_str(&format!(" ({})", status.status_code));
    }
    if detailed {
        line.push_str(&format!(" in {}", format_duration(status.response_time)));
    }

    if status.is_healthy {
        Status::success(&line);
    } else {
        Status::error(&line);
        if let Some(error) = &status.error {
            eprintln!("    {error}");
        }
    }
}
