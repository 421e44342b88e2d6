//! Subcommand handlers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};

use inspecta_client::ApiClient;
use inspecta_client::models::InspectionQuery;
use inspecta_core::balance_sheet::{FinancialTotalsCalculator, Ledger, LedgerField};
use inspecta_core::inspection::{InspectionForm, InspectionSession, InspectionStatus};
use inspecta_core::location::{
    LocationTrail, LocationTrailRecorder, PositionProvider, RecorderSettings, ReplayProvider, TrailEvent,
    TrailPayload,
};
use inspecta_shared::types::{InspectionId, PageRequest};
use inspecta_shared::{AppConfig, AuthContext, Role};

use crate::Credentials;

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn sign_in(config: &AppConfig, credentials: &Credentials) -> anyhow::Result<ApiClient> {
    let client = ApiClient::new(&config.backend, Arc::new(AuthContext::new()))?;
    client
        .login(&credentials.email, &credentials.password, credentials.role)
        .await
        .context("login failed")?;
    Ok(client)
}

fn replay_provider(path: &Path) -> anyhow::Result<ReplayProvider> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    ReplayProvider::from_json_lines(BufReader::new(file))
        .with_context(|| format!("invalid track in {}", path.display()))
}

fn replay_settings(config: &AppConfig, interval_secs: u64) -> RecorderSettings {
    RecorderSettings {
        interval: Duration::from_secs(interval_secs.max(1)),
        ..RecorderSettings::from(&config.tracking)
    }
}

/// Runs the recorder until `ticks` samples have resolved, then stops it.
async fn record_ticks<P: PositionProvider + 'static>(
    recorder: &LocationTrailRecorder<P>,
    ticks: usize,
) -> anyhow::Result<()> {
    let mut events = recorder.subscribe();
    recorder.start()?;

    let mut remaining = ticks;
    while remaining > 0 {
        match events.recv().await? {
            TrailEvent::PointRecorded(point) => {
                info!(
                    latitude = point.latitude,
                    longitude = point.longitude,
                    "Replayed position"
                );
                remaining -= 1;
            }
            TrailEvent::SampleFailed(err) => {
                warn!(error = %err, "Replayed sample failed");
                remaining -= 1;
            }
            TrailEvent::Started { .. } | TrailEvent::Stopped { .. } => {}
        }
    }

    recorder.stop();
    Ok(())
}

pub fn totals(ledger_path: Option<&Path>, overrides: Vec<(LedgerField, String)>) -> anyhow::Result<()> {
    let mut ledger = match ledger_path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            serde_json::from_reader::<_, Ledger>(BufReader::new(file))
                .with_context(|| format!("invalid ledger in {}", path.display()))?
        }
        None => Ledger::default(),
    };
    for (field, text) in overrides {
        ledger.set(field, text);
    }

    print_json(&FinancialTotalsCalculator::recompute(&ledger))
}

pub async fn login(config: &AppConfig, credentials: &Credentials) -> anyhow::Result<()> {
    let client = sign_in(config, credentials).await?;
    let user = client.current_user().await?;
    print_json(&user)
}

pub async fn list(
    config: &AppConfig,
    credentials: &Credentials,
    status: Option<InspectionStatus>,
    search: Option<String>,
    page: u32,
    page_size: u32,
) -> anyhow::Result<()> {
    let client = sign_in(config, credentials).await?;
    let query = InspectionQuery {
        status,
        search,
        branch_name: None,
        page: Some(PageRequest::new(page, page_size)),
    };
    let found = client.list_inspections(&query).await?;
    info!(total = found.total(), more = found.has_next(), "Fetched inspections");

    for record in found.into_items() {
        let trail = LocationTrail::from(record.trail);
        println!(
            "{}\t{}\t{}\t{}",
            record.id,
            record.form.status,
            record.form.client.client_name,
            trail.summary()
        );
    }
    Ok(())
}

pub async fn stats(config: &AppConfig, credentials: &Credentials) -> anyhow::Result<()> {
    let client = sign_in(config, credentials).await?;
    match credentials.role {
        Role::Inspector => print_json(&client.inspector_stats().await?),
        Role::BranchAdmin => print_json(&client.branch_stats(None).await?),
        Role::Admin => print_json(&client.dashboard_stats().await?),
    }
}

pub async fn track(config: &AppConfig, replay: &Path, interval_secs: u64) -> anyhow::Result<()> {
    let provider = replay_provider(replay)?;
    let ticks = provider.remaining();
    let recorder = LocationTrailRecorder::new(provider, replay_settings(config, interval_secs));

    record_ticks(&recorder, ticks).await?;

    let trail = recorder.snapshot();
    info!(summary = %trail.summary(), "Trail recorded");
    print_json(&TrailPayload::from(trail))
}

pub async fn submit(
    config: &AppConfig,
    credentials: &Credentials,
    form_path: &Path,
    replay: Option<&Path>,
    interval_secs: u64,
    update: Option<InspectionId>,
) -> anyhow::Result<()> {
    let file = File::open(form_path).with_context(|| format!("cannot open {}", form_path.display()))?;
    let form: InspectionForm = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid form in {}", form_path.display()))?;

    let client = sign_in(config, credentials).await?;

    let (provider, ticks) = match replay {
        Some(path) => {
            let provider = replay_provider(path)?;
            let ticks = provider.remaining();
            (provider, ticks)
        }
        None => (ReplayProvider::new(Vec::new()), 0),
    };
    let mut session = InspectionSession::new(provider, replay_settings(config, interval_secs));
    session.edit_form(|draft| *draft = form);

    if ticks > 0 {
        record_ticks(session.recorder(), ticks).await?;
    }

    let submission = session.submit(client.auth())?;
    let record = match update {
        Some(id) => client.update_inspection(id, &submission).await?,
        None => client.create_inspection(&submission).await?,
    };

    print_json(&serde_json::json!({
        "id": record.id,
        "status": record.form.status,
        "total_location_points": submission.trail.total_location_points,
        "net_worth": submission.totals.net_worth.to_string(),
    }))
}
