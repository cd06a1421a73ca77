use crate::{AppState, error::AppError};
use analytics::{Advisory, SalesReport};
use axum::{Json, extract::State};
use core_types::{DealInputs, DealInputsDraft};
use events::{Notification, NotificationKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Result of a per-edit revalidation. A single boolean by contract: the
/// client uses it to enable or disable the calculate action.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

/// The advisory texts as the client renders them, tier plus message per axis.
#[derive(Debug, Serialize)]
pub struct AdvisoryPayload {
    pub win_rate_tier: analytics::WinRateTier,
    pub win_rate_message: &'static str,
    pub opportunity_risk: analytics::OpportunityRisk,
    pub opportunity_message: &'static str,
}

impl AdvisoryPayload {
    fn from_advisory(advisory: &Advisory) -> Self {
        Self {
            win_rate_tier: advisory.win_rate_tier,
            win_rate_message: advisory.win_rate_message(),
            opportunity_risk: advisory.opportunity_risk,
            opportunity_message: advisory.opportunity_message(),
        }
    }
}

/// Data for the proportion view: win vs. loss share of closed deals.
#[derive(Debug, Serialize)]
pub struct WinLossSplit {
    pub win_pct: Decimal,
    pub loss_pct: Decimal,
}

/// Data for the count view: won vs. lost deal volume.
#[derive(Debug, Serialize)]
pub struct DealCounts {
    pub won: u64,
    pub lost: u64,
}

/// The two chart payloads the on-screen renderer expects.
#[derive(Debug, Serialize)]
pub struct Charts {
    pub win_loss_split: WinLossSplit,
    pub deal_counts: DealCounts,
}

impl Charts {
    fn build(inputs: &DealInputs, report: &SalesReport) -> Self {
        Self {
            win_loss_split: WinLossSplit {
                win_pct: report.win_rate_pct,
                loss_pct: Decimal::from(100) - report.win_rate_pct,
            },
            deal_counts: DealCounts {
                won: inputs.deals_won(),
                lost: inputs.deals_lost(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub report: SalesReport,
    pub advisory: AdvisoryPayload,
    pub charts: Charts,
    pub notice: Notification,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub path: PathBuf,
    pub notice: Notification,
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub recipient: String,
    pub inputs: DealInputsDraft,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub recipient: String,
    pub notice: Notification,
}

/// # POST /api/validate
/// Cheap revalidation of the current draft, invoked on every field edit.
/// Emits no notification: only user-triggered actions do.
pub async fn validate(Json(draft): Json<DealInputsDraft>) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        valid: draft.is_valid(),
    })
}

/// # POST /api/calculate
/// Validates the draft and derives a fresh metrics snapshot. The snapshot
/// wholly supersedes any previous one; nothing is retained server-side.
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<DealInputsDraft>,
) -> Result<Json<CalculateResponse>, AppError> {
    let inputs = validate_or_notify(&state, &draft)?;

    let report = state.engine.calculate(&inputs);
    let advisory = Advisory::for_report(&report);

    let notice = Notification::info(
        NotificationKind::CalculationComplete,
        "Calculation complete",
        "Your sales win rate metrics have been calculated.",
    );
    state.notify(&notice);

    Ok(Json(CalculateResponse {
        report,
        advisory: AdvisoryPayload::from_advisory(&advisory),
        charts: Charts::build(&inputs, &report),
        notice,
    }))
}

/// # POST /api/export
/// Recomputes the snapshot from the submitted draft and writes the report
/// document. An export failure never invalidates the calculation: the caller
/// may retry the export as-is.
pub async fn export(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<DealInputsDraft>,
) -> Result<Json<ExportResponse>, AppError> {
    let inputs = validate_or_notify(&state, &draft)?;

    let report = state.engine.calculate(&inputs);
    let advisory = Advisory::for_report(&report);

    let path = match state.exporter.export(&inputs, &report, &advisory) {
        Ok(path) => path,
        Err(e) => {
            state.notify(&Notification::error(
                NotificationKind::ExportFailed,
                "Export failed",
                e.to_string(),
            ));
            return Err(e.into());
        }
    };

    let notice = Notification::info(
        NotificationKind::ExportComplete,
        "Report exported",
        format!("Your report document was written to {}.", path.display()),
    );
    state.notify(&notice);

    Ok(Json(ExportResponse { path, notice }))
}

/// # POST /api/send
/// Generates the report document and hands it to the mail transport (a stub:
/// no real delivery happens). The recipient address is format-checked first.
pub async fn send(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendResponse>, AppError> {
    if !notifier::is_plausible_email(&request.recipient) {
        state.notify(&Notification::warning(
            NotificationKind::EmailRejected,
            "Invalid email",
            "Please enter a valid email address.",
        ));
        return Err(AppError::InvalidEmail(request.recipient));
    }

    let inputs = validate_or_notify(&state, &request.inputs)?;
    let report = state.engine.calculate(&inputs);
    let advisory = Advisory::for_report(&report);

    let path = match state.exporter.export(&inputs, &report, &advisory) {
        Ok(path) => path,
        Err(e) => {
            state.notify(&Notification::error(
                NotificationKind::ExportFailed,
                "Export failed",
                e.to_string(),
            ));
            return Err(e.into());
        }
    };

    if let Err(e) = state.mailer.send_report(&request.recipient, &path) {
        state.notify(&Notification::error(
            NotificationKind::EmailFailed,
            "Email failed",
            "There was an error sending your report. Please try again.",
        ));
        return Err(e.into());
    }

    let notice = Notification::info(
        NotificationKind::EmailSent,
        "Email sent",
        format!("Your report has been sent to {}.", request.recipient),
    );
    state.notify(&notice);

    Ok(Json(SendResponse {
        recipient: request.recipient,
        notice,
    }))
}

/// Gate shared by every action that needs validated inputs: an invalid draft
/// produces exactly one warning notification and a 422, and the derivation is
/// never invoked.
fn validate_or_notify(
    state: &AppState,
    draft: &DealInputsDraft,
) -> Result<DealInputs, AppError> {
    match draft.validate() {
        Ok(inputs) => Ok(inputs),
        Err(e) => {
            state.notify(&Notification::warning(
                NotificationKind::InvalidInput,
                "Invalid input",
                e.to_string(),
            ));
            Err(e.into())
        }
    }
}
