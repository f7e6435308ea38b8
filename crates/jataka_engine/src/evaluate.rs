//! Runs every rule against one chart with per-rule failure isolation.
//!
//! A rule that returns a [`RuleError`] or panics becomes a
//! [`RuleDiagnostic`]; the remaining rules still run. Results come back in
//! catalog order whether or not the rayon pool is used.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{debug, warn};

use jataka_yoga::{EvalContext, RawMatch, RuleError, YogaRule, cancellation_reasons, evaluate_rule};

use crate::error::EngineError;
use crate::report::RuleDiagnostic;

/// A rule that fired, with the cancellation conditions that hold for it.
#[derive(Debug, Clone)]
pub(crate) struct Hit<'r> {
    pub rule: &'r YogaRule,
    pub raw: RawMatch,
    pub cancellations: Vec<&'static str>,
}

type RuleOutcome<'r> = Result<Vec<Hit<'r>>, RuleDiagnostic>;

/// Evaluate `rules` in order. `abort` is polled before each rule.
pub(crate) fn evaluate_rules<'r>(
    rules: &[&'r YogaRule],
    ctx: &EvalContext<'_>,
    parallel: bool,
    abort: Option<&AtomicBool>,
) -> Result<(Vec<Hit<'r>>, Vec<RuleDiagnostic>), EngineError> {
    let aborted = || abort.is_some_and(|flag| flag.load(Ordering::Relaxed));

    let outcomes: Vec<Option<RuleOutcome<'r>>> = if parallel {
        rules
            .par_iter()
            .map(|&rule| (!aborted()).then(|| run_rule(rule, ctx)))
            .collect()
    } else {
        let mut out = Vec::with_capacity(rules.len());
        for &rule in rules {
            if aborted() {
                return Err(EngineError::Aborted);
            }
            out.push(Some(run_rule(rule, ctx)));
        }
        out
    };

    if aborted() || outcomes.iter().any(Option::is_none) {
        return Err(EngineError::Aborted);
    }

    let mut hits = Vec::new();
    let mut diagnostics = Vec::new();
    for outcome in outcomes.into_iter().flatten() {
        match outcome {
            Ok(found) => hits.extend(found),
            Err(diag) => {
                warn!(rule_id = diag.rule_id, message = %diag.message, "rule skipped");
                diagnostics.push(diag);
            }
        }
    }
    debug!(
        rules = rules.len(),
        hits = hits.len(),
        diagnostics = diagnostics.len(),
        "rules evaluated"
    );
    Ok((hits, diagnostics))
}

fn run_rule<'r>(rule: &'r YogaRule, ctx: &EvalContext<'_>) -> RuleOutcome<'r> {
    isolate(rule.id, || {
        let mut hits = Vec::new();
        for raw in evaluate_rule(rule, ctx)? {
            let cancellations = cancellation_reasons(rule, ctx, &raw)?;
            hits.push(Hit {
                rule,
                raw,
                cancellations,
            });
        }
        Ok(hits)
    })
}

/// Run `f`, turning a returned error or a panic into a diagnostic.
pub(crate) fn isolate<T>(
    rule_id: &'static str,
    f: impl FnOnce() -> Result<T, RuleError>,
) -> Result<T, RuleDiagnostic> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(RuleDiagnostic {
            rule_id,
            message: e.to_string(),
        }),
        Err(payload) => Err(RuleDiagnostic {
            rule_id,
            message: format!("panicked: {}", panic_message(payload.as_ref())),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
