mod common;
use common::{challenge_dir, has_bash, has_node, TestRun};

#[test]
fn all_fixtures_pass() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("sum"), &[])
        .run()
        .success()
        .stdout_is(
            "# input/input01.txt √\n# input/input02.txt √\n# input/input03.txt √\n",
        );
}

#[test]
fn success_is_idempotent() {
    if !has_bash() {
        return;
    }
    for _ in 0..3 {
        TestRun::test(challenge_dir("sum"), &[]).run().success();
    }
}

#[test]
fn wrong_output_stops_the_run() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("wrong"), &[])
        .run()
        .exit_code(1)
        .stdout_is(
            "# input/input01.txt [WRONG]\ninput:\n5\n3\noutput:\n8\n -- should be --\n9\n\n",
        )
        .stdout_not_contains("input02");
}

#[test]
fn child_failure_propagates_the_status() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("child_fail"), &[])
        .run()
        .exit_code(2)
        .stdout_contains("Child process exited (2): boom")
        .stdout_not_contains("[WRONG]")
        .stdout_not_contains("√");
}

#[test]
fn no_fixtures_runs_once() {
    if !has_bash() {
        return;
    }
    let run = TestRun::test(challenge_dir("no_fixtures"), &[]);
    let marker = run.scratch().join("marker");
    let run = run.env("CHALLENGE_MARKER", marker.to_string_lossy());
    let _run = run.run().success().stdout_is("");
    assert_eq!(std::fs::read_to_string(&marker).unwrap(), "called\n");
}

#[test]
fn stderr_is_a_warning() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("warning"), &[])
        .run()
        .success()
        .stdout_contains("## stderr: careful")
        .stdout_contains("√");
}

#[test]
fn select_input_fixture() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("wrong").join("input/input02.txt"), &[])
        .run()
        .success()
        .stdout_is("# input/input02.txt √\n");
}

#[test]
fn select_output_fixture() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("sum").join("output/output03.txt"), &[])
        .run()
        .success()
        .stdout_is("# input/input03.txt √\n");
}

#[test]
fn test_from_the_solution() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("sum").join("main.sh"), &[])
        .run()
        .success()
        .stdout_contains("input03");
}

#[test]
fn approximate_comparison() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("approx"), &[])
        .run()
        .exit_code(1)
        .stdout_contains("[WRONG]");
    TestRun::test(challenge_dir("approx"), &["--epsilon", "0.01"])
        .run()
        .success();
    TestRun::test(challenge_dir("approx"), &["--epsilon", "0.0001"])
        .run()
        .exit_code(1);
}

#[test]
fn trim_expected_output() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("trailing_newline"), &[])
        .run()
        .exit_code(1);
    TestRun::test(challenge_dir("trailing_newline"), &["--trim-expected"])
        .run()
        .success();
}

#[test]
fn silent_ui() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("wrong"), &["--ui", "silent"])
        .run()
        .exit_code(1)
        .stdout_is("");
}

#[test]
fn not_a_challenge() {
    let run = TestRun::new(&["test", "."]);
    let dir = run.scratch().to_path_buf();
    run.cwd(dir)
        .run()
        .exit_code(1)
        .stderr_contains("Error: No challenge found at");
}

#[test]
fn missing_output_fixture() {
    if !has_bash() {
        return;
    }
    let run = TestRun::new(&["test"]);
    let dir = run.scratch().join("ch");
    std::fs::create_dir_all(dir.join("input")).unwrap();
    std::fs::copy(challenge_dir("sum").join("main.sh"), dir.join("main.sh")).unwrap();
    std::fs::write(dir.join("input/input1"), "1\n2\n").unwrap();
    run.cwd(&dir)
        .run()
        .exit_code(1)
        .stderr_contains("Failed to read expected output file");
}

#[test]
fn misnamed_fixtures_are_an_error() {
    if !has_bash() {
        return;
    }
    TestRun::test(challenge_dir("misnamed"), &[])
        .run()
        .exit_code(1)
        .stdout_is("")
        .stderr_contains("test01.txt");
}

#[test]
fn javascript_exported_function() {
    if !has_node() {
        return;
    }
    TestRun::test(challenge_dir("js_export"), &[])
        .run()
        .success()
        .stdout_is("# input/input01.txt √\n# input/input02.txt √\n");
}

#[test]
fn javascript_plain_script() {
    if !has_node() {
        return;
    }
    TestRun::test(challenge_dir("js_script"), &[])
        .run()
        .success()
        .stdout_is("# input/input01.txt √\n");
}

#[test]
fn fixture_outside_the_working_directory() {
    if !has_bash() {
        return;
    }
    let sum = challenge_dir("sum");
    TestRun::test(sum.join("input/input01.txt"), &[])
        .cwd(sum.join("output"))
        .run()
        .success()
        .stdout_is("# ../input/input01.txt √\n");
}
