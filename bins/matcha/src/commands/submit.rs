//! Submit command: validate, geocode and insert a new spot

use super::{print_json, OutputFormat};
use anyhow::Result;
use matcha_api_client::MatchaClient;
use matcha_cli::output::Status;
use matcha_cli::progress;
use matcha_core::config::ConfigSchema;
use matcha_spots::{Notice, SubmissionForm, SubmitFailure, SubmitSettings};
use matcha_telemetry::{duration_ms, Event, Timer};
use serde_json::json;

pub async fn run(form: SubmissionForm, config: &ConfigSchema, format: OutputFormat) -> Result<()> {
    // Rejected forms never reach the network.
    if let Err(error) = form.validate() {
        let failure = SubmitFailure { form, error };
        if format == OutputFormat::Text {
            Status::notice(&failure.notice());
        }
        return Err(matcha_core::Error::from(failure.error).into());
    }

    let client = MatchaClient::new().map_err(matcha_core::Error::from)?;
    let settings = SubmitSettings::from_config(config);

    let timer = Timer::start("submit");
    let pb = progress::spinner("Submitting...");
    let result = matcha_spots::submit(&client.spots(), &client.geocoding(), form, &settings).await;
    let elapsed = timer.stop();

    match result {
        Ok(spot) => {
            progress::finish_success(&pb, &format!("Saved {}", spot.name));
            Event::new(
                "spot_submitted",
                json!({
                    "id": spot.id,
                    "type": spot.kind,
                    "geocoded": spot.coordinate().is_some(),
                    "duration_ms": duration_ms(elapsed),
                }),
            )
            .log();

            if format == OutputFormat::Json {
                return print_json(&spot);
            }

            Status::notice(&Notice::submitted());
            match spot.coordinate() {
                Some(coord) => Status::info(&format!("{} pinned at {}", spot.name, coord)),
                None => Status::warning(&format!(
                    "{} saved without map coordinates (address not found)",
                    spot.name
                )),
            }
            Ok(())
        }
        Err(failure) => {
            progress::finish_clear(&pb);
            if format == OutputFormat::Text {
                Status::notice(&failure.notice());
            }
            Err(matcha_core::Error::from(failure.error).into())
        }
    }
}
