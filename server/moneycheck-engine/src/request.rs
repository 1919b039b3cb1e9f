//! Request handling for the subprocess contract: parse, validate, gate the
//! detailed tier, score, and wrap the result.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::engine::Engine;
use crate::entitlement;
use crate::error::EngineError;
use crate::fingerprint;
use crate::share;
use crate::types::*;
use crate::validate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct RespondOptions {
  pub detailed: bool,
  pub share: bool,
}

/// Accepts either `{"data": {...}, "entitlement": {...}}` or a bare answers
/// object. Only an object-valued `data` selects the wrapped form; any other
/// `data` key on a bare object is ignored like every unknown field.
pub fn parse_request(raw: &str) -> Result<Request, EngineError> {
  let value: serde_json::Value = serde_json::from_str(raw)?;
  if value.get("data").is_some_and(|d| d.is_object()) {
    Ok(serde_json::from_value(value)?)
  } else {
    Ok(Request {
      data: serde_json::from_value(value)?,
      entitlement: None,
    })
  }
}

pub fn respond(
  engine: &Engine,
  request: &Request,
  options: RespondOptions,
  now: DateTime<Utc>,
) -> Result<Response, EngineError> {
  validate(&request.data)?;

  let id = fingerprint::compute(&request.data);
  let (plan, result) = if options.detailed {
    if let Err(e) = entitlement::require(request.entitlement.as_ref(), now) {
      warn!(%id, error = %e, "detailed result refused");
      return Err(e);
    }
    (
      Plan::Detailed,
      Outcome::Detailed(Box::new(engine.evaluate_detailed(&request.data))),
    )
  } else {
    (Plan::Free, Outcome::Free(engine.evaluate(&request.data)))
  };

  let share_text = options
    .share
    .then(|| share::share_text(result.summary(), options.detailed, engine.config().locale));

  info!(%id, ?plan, total_score = result.summary().total_score, "request scored");

  Ok(Response {
    id,
    plan,
    result,
    share_text,
  })
}

pub fn error_output(err: &EngineError) -> ErrorOutput {
  let out = ErrorOutput::new(err.to_string());
  match err.field() {
    Some(field) => out.with_field(field),
    None => out,
  }
}
