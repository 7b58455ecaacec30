//! Evaluate command implementation.

use crate::cli::EvaluateArgs;
use crate::commands::read_cookie;
use crate::document::RuleActionDocument;
use crate::Result;
use cookiemonster_domain::Registry;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Evaluation {
    identifier: String,
    eligible_loaders: Vec<String>,
    actions: Vec<RuleActionDocument>,
}

/// Report eligible loaders and rule actions for a cookie as JSON
pub fn execute_evaluate(args: EvaluateArgs, registry: &Registry, out: &mut impl Write) -> Result<()> {
    let cookie = read_cookie(&args.cookie)?;

    let evaluation = Evaluation {
        identifier: cookie.identifier.clone(),
        eligible_loaders: registry
            .eligible_loaders(&cookie)
            .iter()
            .map(|l| l.name().to_string())
            .collect(),
        actions: registry
            .evaluate(&cookie)
            .iter()
            .map(RuleActionDocument::from)
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &evaluation)?;
    writeln!(out)?;
    Ok(())
}
