use assert_cmd::cargo; // handy crate for testing CLIs

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn lists_every_registry_entry_without_a_diff() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--list-models")
        .assert()
        .success()
        .stdout(predicates::str::contains("gemma-3-270m-it-6bit"))
        .stdout(predicates::str::contains(
            "hf.co/unsloth/gemma-3-270m-it-GGUF:Q6_K",
        ))
        .stdout(predicates::str::contains("gemma-2b-it"))
        .stdout(predicates::str::contains("gemma:2b-instruct"))
        .stdout(predicates::str::contains("mistral-7b-instruct-v0.3-4bit"))
        .stdout(predicates::str::contains("mistral:7b-instruct-v0.3-q4_0"))
        .stdout(predicates::str::contains("llama-3-8b-instruct-4bit"))
        .stdout(predicates::str::contains("llama3:8b-instruct-q4_0"))
        .stdout(predicates::str::contains("phi-3-mini-4k-instruct-4bit"))
        .stdout(predicates::str::contains("phi3:3.8b-mini-4k-instruct-q4_0"));
}

#[test]
fn unknown_model_reports_alternatives() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["--diff", "+print('hi')", "--model", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("does-not-exist"))
        .stderr(predicates::str::contains("gemma-3-270m-it-6bit"))
        .stderr(predicates::str::contains("gemma-2b-it"))
        .stderr(predicates::str::contains("mistral-7b-instruct-v0.3-4bit"))
        .stderr(predicates::str::contains("llama-3-8b-instruct-4bit"))
        .stderr(predicates::str::contains("phi-3-mini-4k-instruct-4bit"));
}

#[test]
fn missing_diff_is_a_usage_error() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("--diff"));
}

#[test]
fn unreachable_runtime_is_fatal() {
    let mut cmd = cargo::cargo_bin_cmd!();

    // Port 1 is never an Ollama runtime; the load phase must fail fast.
    cmd.args(["--diff", "+print('hi')", "--host", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("model runtime"));
}
