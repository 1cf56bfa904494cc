//! Resolve and plan commands

use colored::Colorize;
use commit_core::{
    CommitPlan, ConfigValidator, Diagnostic, InputKey, Inputs, ResolutionReport, ResolvedConfig,
    RunnerContext,
};
use commit_github::GithubUserLookup;
use serde::Serialize;

use super::outputs::declare_outputs;
use crate::error::Result;

#[derive(Serialize)]
struct ResolveOutput<'a> {
    config: &'a ResolvedConfig,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    config: &'a ResolvedConfig,
    plan: &'a CommitPlan,
}

async fn resolve(
    inputs: &mut Inputs,
    context: &RunnerContext,
    json: bool,
) -> Result<(ResolvedConfig, ResolutionReport)> {
    declare_outputs(context, json)?;

    let lookup = GithubUserLookup::from_context(context, inputs.get_opt(InputKey::GithubToken))?;
    let validator = ConfigValidator::new(context, &lookup);
    Ok(validator.validate(inputs).await?)
}

pub async fn run_resolve(mut inputs: Inputs, context: &RunnerContext, json: bool) -> Result<()> {
    let (config, report) = resolve(&mut inputs, context, json).await?;

    if json {
        let output = ResolveOutput {
            config: &config,
            diagnostics: &report.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Resolved inputs".bold());
    print_config(&config);

    let problems = report.problems().count();
    if problems > 0 {
        println!();
        println!("{} {problems} warning(s), see log above", "!".yellow().bold());
    }
    Ok(())
}

pub async fn run_plan(mut inputs: Inputs, context: &RunnerContext, json: bool) -> Result<()> {
    let (config, _report) = resolve(&mut inputs, context, json).await?;
    let plan = CommitPlan::from_config(&config);

    if json {
        let output = PlanOutput {
            config: &config,
            plan: &plan,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} ({} steps)", "Commit plan".bold(), plan.len());
    for step in &plan.steps {
        println!("  {step}");
    }
    Ok(())
}

fn print_config(config: &ResolvedConfig) {
    let or_none = |value: Option<String>| value.unwrap_or_else(|| "-".dimmed().to_string());
    let list = |items: &[String]| {
        if items.is_empty() {
            "-".dimmed().to_string()
        } else {
            items.join(", ")
        }
    };

    let rows = [
        ("add", list(&config.add)),
        ("remove", list(&config.remove)),
        ("author", config.author.to_string()),
        ("committer", config.committer.to_string()),
        ("message", config.message.clone()),
        ("default_author", config.default_author.to_string()),
        (
            "pathspec_error_handling",
            config.pathspec_error_handling.to_string(),
        ),
        ("fetch", or_none(config.fetch.as_ref().map(ToString::to_string))),
        ("push", or_none(config.push.as_ref().map(ToString::to_string))),
        ("pull", or_none(config.pull.clone())),
        ("commit", or_none(config.commit.clone())),
        ("new_branch", or_none(config.new_branch.clone())),
        ("tag", or_none(config.tag.clone())),
        ("tag_push", or_none(config.tag_push.clone())),
        ("cwd", config.cwd.clone()),
        ("target_ref", or_none(config.target_ref.clone())),
        (
            "github_token",
            if config.has_token { "set" } else { "not set" }.to_string(),
        ),
    ];

    for (label, value) in rows {
        println!("  {} {value}", format!("{label:<24}").cyan());
    }
}
