//! # Summary Commands
//!
//! Read-only views of the session: the split itself and the two picker
//! listings.

use crate::error::{AppError, ErrorCode};
use crate::state::BillSession;

/// `show`
pub fn show(session: &BillSession) -> String {
    let summary = session.summary();
    format!(
        "Amount:      {}\n\
         Tip:         {}%\n\
         People:      {}\n\
         Tip value:   {}\n\
         Grand total: {}\n\
         Per person:  {}",
        summary.amount,
        summary.tip_percentage,
        summary.people,
        summary.tip_value,
        summary.grand_total,
        summary.per_person,
    )
}

/// `json`
pub fn json(session: &BillSession) -> Result<String, AppError> {
    serde_json::to_string_pretty(&session.summary())
        .map_err(|e| AppError::new(ErrorCode::Internal, format!("Failed to encode summary: {e}")))
}

/// `tip` with no argument: the offered percentages, current one bracketed.
pub fn tip_list(session: &BillSession) -> String {
    session
        .tip_options()
        .iter()
        .map(|option| {
            if option.is_selected {
                format!("[{}%]", option.value)
            } else {
                format!(" {}% ", option.value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `people` with no argument: every choice, one per line, current one marked.
pub fn people_list(session: &BillSession) -> String {
    session
        .people_options()
        .iter()
        .map(|option| {
            let marker = if option.is_selected { '>' } else { ' ' };
            format!("{marker} {} people", option.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
