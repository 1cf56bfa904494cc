//! Defaulting and advisory stages.

use std::path::Path;

use crate::config::GitArg;
use crate::context::RunnerContext;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::key::InputKey;
use crate::list::parse_list;
use crate::refs::current_branch;
use crate::store::{Inputs, KeyValueStore};

use super::{Fact, StageOutcome};

/// Legacy `pull` value that used to mean "do not pull".
pub const LEGACY_NO_PULL: &str = "NO-PULL";

/// Stage 2: report how `add` and `remove` parse. An empty list is an
/// error-level diagnostic but does not stop resolution.
pub fn check_list_shape<S: KeyValueStore>(inputs: &Inputs<S>) -> StageOutcome {
    let mut outcome = StageOutcome::new();
    for (key, label, command) in [
        (InputKey::Add, "Add", "git add"),
        (InputKey::Remove, "Remove", "git rm"),
    ] {
        let Some(raw) = inputs.get_opt(key) else {
            continue;
        };
        let diagnostic = match parse_list(&raw).len() {
            0 => Diagnostic::error(
                DiagnosticKind::EmptyList,
                format!("{label} input: array length < 1"),
            ),
            1 => Diagnostic::info(format!(
                "{label} input parsed as single string, running 1 {command} command."
            )),
            n => Diagnostic::info(format!(
                "{label} input parsed as string array, running {n} {command} commands."
            )),
        };
        outcome = outcome.diagnostic(diagnostic);
    }
    outcome
}

/// Stage 4: decide once whether `fetch` and `push` are switches or argument
/// strings.
pub fn probe_fetch_push<S: KeyValueStore>(inputs: &Inputs<S>) -> StageOutcome {
    let mut outcome = StageOutcome::new();
    for key in [InputKey::Fetch, InputKey::Push] {
        if let Some(arg) = GitArg::probe(inputs, key) {
            outcome = outcome
                .diagnostic(Diagnostic::debug(format!(
                    "Currently using the following value for the {key} input: {arg}"
                )))
                .fact(Fact::GitArg(key, arg));
        }
    }
    outcome
}

/// Stage 6: the committer defaults to the author.
///
/// When the user set either committer field, say which combination is in
/// effect and which half was borrowed from the author.
pub fn default_committer<S: KeyValueStore>(inputs: &Inputs<S>) -> StageOutcome {
    let mut outcome = StageOutcome::new();
    let author_name = inputs.get(InputKey::AuthorName);
    let author_email = inputs.get(InputKey::AuthorEmail);

    let committer_name = inputs.get_opt(InputKey::CommitterName);
    let committer_email = inputs.get_opt(InputKey::CommitterEmail);
    if committer_name.is_some() || committer_email.is_some() {
        let name = committer_name
            .clone()
            .unwrap_or_else(|| format!("{author_name} [from author info]"));
        let email = committer_email
            .clone()
            .unwrap_or_else(|| format!("{author_email} [from author info]"));
        outcome = outcome.diagnostic(Diagnostic::info(format!(
            "> Using custom committer info: {name} <{email}>"
        )));
    }

    let name = committer_name.unwrap_or_else(|| author_name.clone());
    let email = committer_email.unwrap_or_else(|| author_email.clone());
    outcome
        .default_value(InputKey::CommitterName, author_name)
        .default_value(InputKey::CommitterEmail, author_email)
        .diagnostic(Diagnostic::debug(format!("Committer: {name} <{email}>")))
}

/// Stage 7: default commit message naming the workflow.
pub fn default_message<S: KeyValueStore>(
    inputs: &Inputs<S>,
    context: &RunnerContext,
) -> StageOutcome {
    let fallback = match &context.workflow {
        Some(workflow) => format!("Commit from GitHub Actions ({workflow})"),
        None => "Commit from GitHub Actions".to_string(),
    };
    let message = inputs.get_opt(InputKey::Message).unwrap_or_else(|| fallback.clone());
    StageOutcome::new()
        .default_value(InputKey::Message, fallback)
        .diagnostic(Diagnostic::info(format!(
            "> Using \"{message}\" as commit message."
        )))
}

/// Stage 9: a missing token is only a warning; not every run needs the API.
pub fn check_credential<S: KeyValueStore>(inputs: &Inputs<S>) -> StageOutcome {
    if inputs.is_set(InputKey::GithubToken) {
        return StageOutcome::new();
    }
    StageOutcome::new().diagnostic(Diagnostic::warning(
        DiagnosticKind::MissingCredential,
        "No github_token has been detected, the action may fail if it needs to use the API",
    ))
}

/// Stage 10: drop the legacy `NO-PULL` sentinel.
pub fn drop_legacy_pull<S: KeyValueStore>(inputs: &Inputs<S>) -> StageOutcome {
    if inputs.get(InputKey::Pull) != LEGACY_NO_PULL {
        return StageOutcome::new();
    }
    StageOutcome::new()
        .remove(InputKey::Pull)
        .diagnostic(Diagnostic::warning(
            DiagnosticKind::Deprecated,
            "pull: NO-PULL is deprecated, leave the input empty to skip pulling",
        ))
}

/// Stage 11: find the branch the downstream process will push.
///
/// `new_branch` wins; otherwise the runner's ref, otherwise whatever the
/// repository at `cwd` has checked out.
pub fn resolve_target_ref<S: KeyValueStore>(
    inputs: &Inputs<S>,
    context: &RunnerContext,
) -> StageOutcome {
    let mut outcome = StageOutcome::new();

    if let Some(new_branch) = inputs.get_opt(InputKey::NewBranch) {
        let fetch_enabled = GitArg::probe(inputs, InputKey::Fetch).is_some_and(|f| f.enabled());
        if !fetch_enabled {
            outcome = outcome.diagnostic(Diagnostic::warning(
                DiagnosticKind::RiskyCombination,
                "Creating a new branch without fetching the repo first could result in an error when pushing to GitHub.",
            ));
        }
        return outcome.fact(Fact::TargetRef(new_branch));
    }

    let cwd = inputs.get_opt(InputKey::Cwd).unwrap_or_else(|| ".".to_string());
    match context.branch().or_else(|| current_branch(Path::new(&cwd))) {
        Some(branch) => outcome
            .diagnostic(Diagnostic::debug(format!("Target ref: {branch}")))
            .fact(Fact::TargetRef(branch)),
        None => outcome.diagnostic(Diagnostic::debug(
            "Target ref unknown, git will use the current upstream",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn messages(outcome: &StageOutcome) -> Vec<&str> {
        outcome.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn list_shape_reports_counts() {
        let inputs = Inputs::from_pairs([(InputKey::Add, r#"["a", "b"]"#), (InputKey::Remove, "old.txt")]);
        assert_eq!(
            messages(&check_list_shape(&inputs)),
            vec![
                "Add input parsed as string array, running 2 git add commands.",
                "Remove input parsed as single string, running 1 git rm command.",
            ]
        );
    }

    #[test]
    fn empty_list_is_an_error_diagnostic() {
        let inputs = Inputs::from_pairs([(InputKey::Add, "[]")]);
        let outcome = check_list_shape(&inputs);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].kind, Some(DiagnosticKind::EmptyList));
        assert!(outcome.defaults.is_empty());
    }

    #[test]
    fn probe_records_interpretations() {
        let inputs = Inputs::from_pairs([(InputKey::Fetch, "--depth=1"), (InputKey::Push, "true")]);
        let outcome = probe_fetch_push(&inputs);
        assert_eq!(
            outcome.facts,
            vec![
                Fact::GitArg(InputKey::Fetch, GitArg::Args("--depth=1".to_string())),
                Fact::GitArg(InputKey::Push, GitArg::Flag(true)),
            ]
        );
    }

    #[test]
    fn committer_defaults_to_author_silently() {
        let inputs = Inputs::from_pairs([
            (InputKey::AuthorName, "Mona"),
            (InputKey::AuthorEmail, "mona@example.com"),
        ]);
        let outcome = default_committer(&inputs);
        assert_eq!(
            outcome.defaults,
            vec![
                (InputKey::CommitterName, "Mona".to_string()),
                (InputKey::CommitterEmail, "mona@example.com".to_string()),
            ]
        );
        assert!(outcome.diagnostics.iter().all(|d| d.level == crate::Level::Debug));
    }

    #[test]
    fn custom_committer_is_announced() {
        let inputs = Inputs::from_pairs([
            (InputKey::AuthorName, "Mona"),
            (InputKey::AuthorEmail, "mona@example.com"),
            (InputKey::CommitterName, "Bot"),
        ]);
        let outcome = default_committer(&inputs);
        assert_eq!(
            messages(&outcome)[0],
            "> Using custom committer info: Bot <mona@example.com [from author info]>"
        );
    }

    #[test]
    fn committer_stage_twice_keeps_explicit_name() {
        let mut inputs = Inputs::from_pairs([
            (InputKey::AuthorName, "Mona"),
            (InputKey::AuthorEmail, "mona@example.com"),
            (InputKey::CommitterName, "Bot"),
        ]);
        default_committer(&inputs).apply_to(&mut inputs);
        default_committer(&inputs).apply_to(&mut inputs);
        assert_eq!(inputs.get(InputKey::CommitterName), "Bot");
        assert_eq!(inputs.get(InputKey::CommitterEmail), "mona@example.com");
    }

    #[test]
    fn message_without_workflow() {
        let inputs = Inputs::from_pairs([(InputKey::Add, ".")]);
        let outcome = default_message(&inputs, &RunnerContext::default());
        assert_eq!(
            outcome.defaults,
            vec![(InputKey::Message, "Commit from GitHub Actions".to_string())]
        );
    }

    #[test]
    fn explicit_message_is_announced() {
        let inputs = Inputs::from_pairs([(InputKey::Message, "chore: bump")]);
        let outcome = default_message(&inputs, &RunnerContext::default().with_workflow("CI"));
        assert_eq!(messages(&outcome), vec!["> Using \"chore: bump\" as commit message."]);
    }

    #[test]
    fn missing_token_warns() {
        let inputs = Inputs::from_pairs([(InputKey::Add, ".")]);
        let outcome = check_credential(&inputs);
        assert_eq!(outcome.diagnostics[0].kind, Some(DiagnosticKind::MissingCredential));

        let inputs = Inputs::from_pairs([(InputKey::GithubToken, "ghs_x")]);
        assert!(check_credential(&inputs).diagnostics.is_empty());
    }

    #[test]
    fn legacy_pull_is_removed() {
        let inputs = Inputs::from_pairs([(InputKey::Pull, "NO-PULL")]);
        let outcome = drop_legacy_pull(&inputs);
        assert_eq!(outcome.removals, vec![InputKey::Pull]);

        let inputs = Inputs::from_pairs([(InputKey::Pull, "--rebase")]);
        assert_eq!(drop_legacy_pull(&inputs), StageOutcome::new());
    }

    #[test]
    fn new_branch_without_fetch_warns() {
        let inputs = Inputs::from_pairs([(InputKey::NewBranch, "bot/update")]);
        let outcome = resolve_target_ref(&inputs, &RunnerContext::default());
        assert_eq!(outcome.facts, vec![Fact::TargetRef("bot/update".to_string())]);
        assert_eq!(outcome.diagnostics[0].kind, Some(DiagnosticKind::RiskyCombination));

        let inputs = Inputs::from_pairs([(InputKey::NewBranch, "bot/update"), (InputKey::Fetch, "true")]);
        assert!(resolve_target_ref(&inputs, &RunnerContext::default()).diagnostics.is_empty());
    }

    #[test]
    fn target_ref_from_runner() {
        let inputs = Inputs::from_pairs([(InputKey::Add, ".")]);
        let ctx = RunnerContext::from_vars([("GITHUB_REF", "refs/heads/main")]);
        let outcome = resolve_target_ref(&inputs, &ctx);
        assert_eq!(outcome.facts, vec![Fact::TargetRef("main".to_string())]);
    }
}
