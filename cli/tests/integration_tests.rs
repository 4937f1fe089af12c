#[cfg(test)]
mod cli_integration_tests {
    use std::fs;

    use assert_cmd::Command;
    use predicates::prelude::*;
    use pretty_assertions::assert_eq;

    fn stencil() -> Command {
        Command::cargo_bin("stencil").unwrap()
    }

    /// Phase banner as it appears on a piped stdout, trailing blank line
    /// included.
    fn banner(text: &str) -> String {
        let padded = format!("{text:^width$}", width = text.len() + 20);
        let rule = "-".repeat(padded.len());

        format!("\n{rule}\n{padded}\n{rule}\n\n")
    }

    fn write_inputs(dir: &tempfile::TempDir) {
        fs::write(
            dir.path().join("template.txt"),
            "Hello, {{ name }}! You are {{age}}.",
        )
        .unwrap();
        fs::write(
            dir.path().join("fields.json"),
            r#"{"name": "Ada", "age": "30", "note": 7}"#,
        )
        .unwrap();
    }

    #[test]
    fn prints_version() {
        stencil().arg("--version").assert().success().stdout("stencil 0.1.0\n");
    }

    #[test]
    fn once_processes_and_dumps() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(&dir);

        let assert = stencil()
            .current_dir(dir.path())
            .args([
                "--once",
                "--template",
                "template.txt",
                "--fields",
                "fields.json",
                "--output",
                "out.txt",
            ])
            .assert();

        let expected_stdout = format!(
            concat!(
                "{}",
                "Fields will be highlighted in green: \n",
                "Hello, {{{{ name }}}}! You are {{{{age}}}}.\n",
                "{}",
                "Remember only fields with string values will be picked up!\n",
                "{{\n",
                "  \"name\": \"Ada\",\n",
                "  \"age\": \"30\"\n",
                "}}\n",
                "{}",
                "Replaced values will be highlighted in green: \n",
                "Hello, Ada! You are 30.\n",
                "{}",
                "Template dumped to {}\n",
            ),
            banner("Template Debugging"),
            banner("Loading Fields"),
            banner("Processed Template"),
            banner("Dumping Template"),
            // The child resolves against its canonical working directory
            dir.path().canonicalize().unwrap().join("out.txt").display(),
        );

        assert.success().stdout(expected_stdout).stderr("");

        assert_eq!(
            "Hello, Ada! You are 30.",
            fs::read_to_string(dir.path().join("out.txt")).unwrap()
        );
    }

    #[test]
    fn once_with_missing_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(&dir);

        stencil()
            .current_dir(dir.path())
            .args(["--once", "-t", "nope.txt", "-f", "fields.json"])
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr("Template file does not exist!\n");
    }

    #[test]
    fn once_with_blank_template_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(&dir);

        stencil()
            .current_dir(dir.path())
            .args(["--once", "--template", "", "--fields", "fields.json"])
            .assert()
            .failure()
            .code(1)
            .stderr("Template file name is empty!\n");
    }

    #[test]
    fn once_with_malformed_fields_fails() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(&dir);
        fs::write(dir.path().join("bad.json"), "{oops").unwrap();

        stencil()
            .current_dir(dir.path())
            .args(["--once", "-t", "template.txt", "-f", "bad.json"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Loading Fields"))
            .stderr(predicate::str::starts_with("JSON file is malformed: "));
    }

    #[test]
    fn interactive_cycle_over_piped_stdin() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(&dir);

        let assert = stencil()
            .current_dir(dir.path())
            .write_stdin("template.txt\nfields.json\ny\nout.txt\nn\n")
            .assert();

        assert
            .success()
            .stdout(predicate::str::contains(
                "          Stencil Template Processor          ",
            ))
            .stdout(predicate::str::contains("Template file name: "))
            .stdout(predicate::str::contains("JSON file name: "))
            .stdout(predicate::str::contains("Dump template to file? [y/N]: "))
            .stdout(predicate::str::contains("Output file name: "))
            .stdout(predicate::str::contains("Continue? [Y/n]: "))
            .stdout(predicate::str::contains("Template dumped to "));

        assert_eq!(
            "Hello, Ada! You are 30.",
            fs::read_to_string(dir.path().join("out.txt")).unwrap()
        );
    }

    #[test]
    fn an_error_returns_to_the_continue_prompt() {
        let dir = tempfile::tempdir().unwrap();

        stencil()
            .current_dir(dir.path())
            .write_stdin("missing.txt\nn\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Continue? [Y/n]: "))
            .stderr(predicate::str::contains("Template file does not exist!"));
    }

    #[test]
    fn closed_stdin_exits_cleanly() {
        stencil()
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("Stencil Template Processor"))
            .stdout(predicate::str::contains("Template file name: "));
    }

    #[test]
    fn unknown_tokens_pass_through_to_the_output() {
        let dir = tempfile::tempdir().unwrap();

        let template = textwrap::dedent(
            "
            To: {{ who }}
            From: {{ sender }}

            {{ body }}
            ",
        );
        fs::write(dir.path().join("letter.txt"), &template).unwrap();
        fs::write(dir.path().join("fields.json"), "{}").unwrap();

        stencil()
            .current_dir(dir.path())
            .args([
                "--once",
                "-t",
                "letter.txt",
                "-f",
                "fields.json",
                "-o",
                "out.txt",
            ])
            .assert()
            .success();

        assert_eq!(
            template,
            fs::read_to_string(dir.path().join("out.txt")).unwrap()
        );
    }
}
