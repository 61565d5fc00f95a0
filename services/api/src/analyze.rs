use crate::infra::upload_from_file;
use chrono::{Local, NaiveDate};
use clap::Args;
use design_lens::config::{AppConfig, ScanTiming};
use design_lens::critique::{
    AnalysisResult, CritiqueEngine, CritiqueReport, Principle, ScoringError,
};
use design_lens::error::AppError;
use design_lens::session::{AnalysisRunner, DesignSession, RequestId, ScanEvent};
use design_lens::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Design image to critique
    pub(crate) image: PathBuf,
    /// Principle to evaluate (label or snake_case key); repeat for several
    #[arg(long = "principle", short = 'p', value_parser = crate::infra::parse_principle)]
    pub(crate) principles: Vec<Principle>,
    /// Media type of the image. Sniffed from the file when omitted.
    #[arg(long)]
    pub(crate) media_type: Option<String>,
    /// Skip the scan animation delays
    #[arg(long)]
    pub(crate) instant: bool,
    /// Date printed on the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        image,
        principles,
        media_type,
        instant,
        today,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let timing = if instant {
        ScanTiming::instant()
    } else {
        config.scan
    };
    let bytes = tokio::fs::read(&image).await?;
    let upload = upload_from_file(&image, bytes, media_type);

    let mut session = DesignSession::new();
    session.start()?;
    for principle in principles {
        session.toggle_principle(principle)?;
    }
    let ticket = session.accept_upload(upload)?;
    info!(
        image = %image.display(),
        principles = ticket.request.selection.len(),
        expected_ms = timing.total_for(ticket.request.selection.len()).as_millis() as u64,
        "analyzing design"
    );

    let runner = AnalysisRunner::new(Arc::new(CritiqueEngine::default()), timing);
    let outcome = runner
        .run(&ticket, |event| match event {
            ScanEvent::Scanning(progress) => {
                info!(
                    step = progress.index + 1,
                    total = progress.total,
                    "{} {}",
                    progress.copy.icon,
                    progress.copy.message
                );
                if let Err(err) = session.mark_scanning(ticket.request_id, progress) {
                    warn!(error = %err, "scan update rejected");
                }
            }
            ScanEvent::Finished => info!("finalizing results"),
        })
        .await;

    land_outcome(&mut session, ticket.request_id, outcome)?;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = session.report(today)?;
    print_report(&report, json);
    Ok(())
}

/// Lands the outcome on the session; a scoring failure becomes the command's error.
fn land_outcome(
    session: &mut DesignSession,
    request_id: RequestId,
    outcome: Result<AnalysisResult, ScoringError>,
) -> Result<(), AppError> {
    let failure = outcome.as_ref().err().copied();
    let page = session.complete(request_id, outcome)?;
    match failure {
        Some(err) => {
            warn!(page = %page, error = %err, "analysis did not produce a result");
            Err(err.into())
        }
        None => Ok(()),
    }
}

fn print_report(report: &CritiqueReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(body) => {
                println!("{body}");
                return;
            }
            Err(err) => warn!(error = %err, "failed to serialize report; printing text"),
        }
    }
    print!("{}", report.render_text());
}
