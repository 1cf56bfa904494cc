//! End-to-end flow across the crates
//!
//! runner environment -> input store -> resolution with the real GitHub
//! lookup (against a local stub) -> outputs file -> commit plan.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use commit_core::{
    CommitPlan, ConfigValidator, DiagnosticKind, InputKey, Inputs, MemoryStore, OutputKey,
    Outputs, RunnerContext,
};
use commit_github::{GithubOutputFile, GithubUserLookup};
use commit_test_utils::env::RunnerEnv;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Answer one request to `/users/<name>` with `body`.
fn stub_users_api(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    base
}

fn load(env: &RunnerEnv) -> (Inputs, RunnerContext) {
    let mut inputs = Inputs::new(MemoryStore::from_vars(env.vars()));
    inputs.apply_manifest_defaults();
    (inputs, RunnerContext::from_vars(env.vars()))
}

fn lookup_for(context: &RunnerContext) -> GithubUserLookup {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    GithubUserLookup::with_client(client, context.api_url.as_deref(), None)
}

#[tokio::test]
async fn test_user_info_run_end_to_end() {
    let temp = TempDir::new().unwrap();
    let output_path = temp.path().join("github_output");
    let api_url = stub_users_api(r#"{"login":"octocat","name":"The Octocat","email":null}"#);

    let env = RunnerEnv::new()
        .input("add", "src\ndocs")
        .input("default_author", "user_info")
        .input("github_token", "ghs_test")
        .actor("octocat")
        .workflow("Nightly")
        .var("GITHUB_REF", "refs/heads/main")
        .var("GITHUB_API_URL", &api_url)
        .var("GITHUB_OUTPUT", output_path.to_str().unwrap());
    let (mut inputs, context) = load(&env);

    // Outputs are declared before anything can fail.
    let sink = GithubOutputFile::new(context.output_file.clone().unwrap());
    let mut outputs = Outputs::declare(sink).unwrap();

    let lookup = lookup_for(&context);
    let (config, report) = ConfigValidator::new(&context, &lookup)
        .validate(&mut inputs)
        .await
        .unwrap();

    assert_eq!(config.author.name, "The Octocat");
    assert_eq!(config.author.email, "octocat@users.noreply.github.com");
    assert_eq!(config.committer, config.author);
    assert_eq!(config.message, "Commit from GitHub Actions (Nightly)");
    assert_eq!(report.of_kind(DiagnosticKind::MissingIdentityField).count(), 1);

    // Bare lines are not a list; they stay one add entry.
    assert_eq!(config.add, vec!["src\ndocs"]);

    outputs.set_flag(OutputKey::Committed, true).unwrap();
    outputs.set(OutputKey::CommitSha, Some("1a2b3c4")).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let committed: Vec<&str> = written
        .lines()
        .zip(written.lines().skip(1))
        .filter(|(header, _)| header.starts_with("committed<<"))
        .map(|(_, value)| value)
        .collect();
    assert_eq!(committed, vec!["false", "true"]);
    assert!(written.contains("\n1a2b3c4\n"));

    let plan = CommitPlan::from_config(&config);
    assert_eq!(
        plan.steps.last().unwrap().args,
        vec!["push", "origin", "main", "--set-upstream"]
    );
}

#[tokio::test]
async fn test_resolution_is_stable_when_repeated() {
    let env = RunnerEnv::new()
        .input("add", r#"["a.txt", "b.txt"]"#)
        .input("remove", "- old.txt\n- older.txt\n")
        .input("committer_name", "Hubot")
        .input("push", "FALSE")
        .actor("octocat")
        .workflow("Docs");
    let (mut inputs, context) = load(&env);
    let lookup = lookup_for(&context);
    let validator = ConfigValidator::new(&context, &lookup);

    let (first, _) = validator.validate(&mut inputs).await.unwrap();
    let snapshot = inputs.store().clone();
    let (second, _) = validator.validate(&mut inputs).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(inputs.store(), &snapshot);
    assert_eq!(first.remove, vec!["old.txt", "older.txt"]);
    assert_eq!(first.committer.name, "Hubot");
    assert_eq!(first.committer.email, "octocat@users.noreply.github.com");
    assert_eq!(inputs.get(InputKey::Push), "FALSE");
}

#[tokio::test]
async fn test_failed_run_keeps_safe_outputs() {
    let temp = TempDir::new().unwrap();
    let output_path = temp.path().join("github_output");
    let env = RunnerEnv::new()
        .actor("octocat")
        .var("GITHUB_OUTPUT", output_path.to_str().unwrap());
    let (mut inputs, context) = load(&env);

    Outputs::declare(GithubOutputFile::new(&output_path)).unwrap();
    let lookup = lookup_for(&context);
    let result = ConfigValidator::new(&context, &lookup)
        .validate(&mut inputs)
        .await;

    assert!(result.is_err());
    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written.matches("<<ghadelimiter_").count(), 6);
    assert!(!written.contains("true"));
}
