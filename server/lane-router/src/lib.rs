//! Deployment Lane Router: reacts to assessment responses.
//!
//! Loads responses, maps each lane to its pipeline triggers, renders a report,
//! and appends an outcome record to a JSONL log.

pub mod error;
pub mod load;
pub mod outcome;
pub mod report;
pub mod triggers;

use risk_engine::AssessmentResponse;

pub use error::RouterError;
pub use load::{load_responses, parse_response};
pub use outcome::{OutcomeEntry, OutcomeLogger};
pub use report::render;
pub use triggers::triggers_for;

/// Route one response: render its report and log the outcome. Returns the report text.
pub fn route(response: &AssessmentResponse, logger: &OutcomeLogger) -> Result<String, RouterError> {
  let triggers = triggers_for(response.assigned_lane);
  let text = render(response, triggers);
  logger.log(response, triggers)?;
  Ok(text)
}
