//! PNR status processing
//!
//! Turns a raw reservation record into a report: formatted PNR, a one-line
//! train summary, per-passenger status labels and aggregate counts.

use crate::errors::{CoreError, Result};
use crate::types::{is_ascii_digits, TextOrNumber};
use serde::{Deserialize, Serialize};

const PNR_LEN: usize = 10;
const NAME_WIDTH: usize = 20;

/// Train details as printed on the ticket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainDetails {
    /// Printed as given; tickets carry it as text, some feeds as a number
    #[serde(default)]
    pub number: TextOrNumber,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

/// One passenger row from the reservation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: TextOrNumber,
    #[serde(default)]
    pub gender: String,
    /// Status at booking time, e.g. `WL/12`
    #[serde(default)]
    pub booking: String,
    /// Current status, e.g. `B2/45`, `RAC 3`, `CAN`
    #[serde(default)]
    pub current: String,
}

/// Reservation record as fetched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrRecord {
    #[serde(default)]
    pub pnr: Option<String>,
    #[serde(default)]
    pub train: Option<TrainDetails>,
    #[serde(default)]
    pub class_booked: String,
    #[serde(default)]
    pub passengers: Vec<PassengerInput>,
}

/// Passenger status derived from the current-status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLabel {
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "WAITING")]
    Waiting,
    #[serde(rename = "CANCELLED")]
    Cancelled,
    #[serde(rename = "RAC")]
    Rac,
    /// Code matched no known prefix; rendered as an empty label
    #[serde(rename = "")]
    Unclassified,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Confirmed => "CONFIRMED",
            StatusLabel::Waiting => "WAITING",
            StatusLabel::Cancelled => "CANCELLED",
            StatusLabel::Rac => "RAC",
            StatusLabel::Unclassified => "",
        }
    }

    /// Confirmed and cancelled seats no longer block chart preparation
    pub fn is_settled(&self) -> bool {
        matches!(self, StatusLabel::Confirmed | StatusLabel::Cancelled)
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a current-status code. Rules apply in order:
/// `B*`/`S*` confirmed, `WL*` waiting, exactly `CAN` cancelled, `RAC*` RAC.
pub fn classify_status(current: &str) -> StatusLabel {
    if current.starts_with('B') || current.starts_with('S') {
        StatusLabel::Confirmed
    } else if current.starts_with("WL") {
        StatusLabel::Waiting
    } else if current == "CAN" {
        StatusLabel::Cancelled
    } else if current.starts_with("RAC") {
        StatusLabel::Rac
    } else {
        StatusLabel::Unclassified
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedPassenger {
    pub formatted_name: String,
    pub booking_status: String,
    pub current_status: String,
    pub status_label: StatusLabel,
    pub is_confirmed: bool,
}

impl ProcessedPassenger {
    fn from_input(input: &PassengerInput) -> Self {
        let status_label = classify_status(&input.current);
        Self {
            formatted_name: format!(
                "{:<width$}({}/{})",
                input.name,
                input.age,
                input.gender,
                width = NAME_WIDTH
            ),
            booking_status: input.booking.clone(),
            current_status: input.current.clone(),
            status_label,
            is_confirmed: status_label == StatusLabel::Confirmed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrSummary {
    pub total_passengers: usize,
    pub confirmed: usize,
    pub waiting: usize,
    pub cancelled: usize,
    pub rac: usize,
    /// Every passenger is confirmed or cancelled
    pub all_confirmed: bool,
    pub any_waiting: bool,
}

impl PnrSummary {
    fn from_passengers(passengers: &[ProcessedPassenger]) -> Self {
        let mut summary = PnrSummary {
            total_passengers: passengers.len(),
            ..Default::default()
        };
        for p in passengers {
            match p.status_label {
                StatusLabel::Confirmed => summary.confirmed += 1,
                StatusLabel::Waiting => summary.waiting += 1,
                StatusLabel::Cancelled => summary.cancelled += 1,
                StatusLabel::Rac => summary.rac += 1,
                StatusLabel::Unclassified => {}
            }
        }
        summary.all_confirmed = passengers.iter().all(|p| p.status_label.is_settled());
        summary.any_waiting = summary.waiting > 0;
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnrReport {
    pub pnr_formatted: String,
    pub train_info: String,
    pub passengers: Vec<ProcessedPassenger>,
    pub summary: PnrSummary,
    pub chart_prepared: bool,
}

/// `1234567890` -> `123-456-7890`; `None` unless exactly ten ASCII digits
pub fn format_pnr(pnr: &str) -> Option<String> {
    if pnr.len() != PNR_LEN || !is_ascii_digits(pnr) {
        return None;
    }
    Some(format!("{}-{}-{}", &pnr[..3], &pnr[3..6], &pnr[6..]))
}

fn train_info(train: &TrainDetails, class_booked: &str) -> String {
    format!(
        "{} {} | {} → {} | Class: {}",
        train.number, train.name, train.from, train.to, class_booked
    )
}

/// Process a reservation record, naming the first failed precondition
pub fn try_process_pnr(record: &PnrRecord) -> Result<PnrReport> {
    let pnr = record.pnr.as_deref().unwrap_or_default();
    let pnr_formatted =
        format_pnr(pnr).ok_or_else(|| CoreError::InvalidPnr(pnr.to_string()))?;
    let train = record.train.as_ref().ok_or(CoreError::MissingTrain)?;
    if record.passengers.is_empty() {
        return Err(CoreError::NoPassengers);
    }

    let passengers: Vec<ProcessedPassenger> = record
        .passengers
        .iter()
        .map(ProcessedPassenger::from_input)
        .collect();
    for p in passengers.iter().filter(|p| p.status_label == StatusLabel::Unclassified) {
        tracing::warn!(status = %p.current_status, "unrecognised passenger status");
    }

    let summary = PnrSummary::from_passengers(&passengers);
    let chart_prepared = summary.all_confirmed;

    Ok(PnrReport {
        pnr_formatted,
        train_info: train_info(train, &record.class_booked),
        passengers,
        summary,
        chart_prepared,
    })
}

/// Process a reservation record; `None` when it is missing or malformed
pub fn process_pnr(record: Option<&PnrRecord>) -> Option<PnrReport> {
    match try_process_pnr(record?) {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::debug!(error = %e, "rejecting PNR record");
            None
        }
    }
}
