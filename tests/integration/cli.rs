use crate::helpers::prelude::*;

#[test]
fn help_lists_the_options() {
    binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("--name")
                .and(predicates::str::contains("--author"))
                .and(predicates::str::contains("--abort-if-exists"))
                .and(predicates::str::contains("--skip-install"))
                .from_utf8(),
        );
}

#[test]
fn unknown_flags_are_rejected() {
    let dir = tempdir().build();

    binary()
        .arg("--frobnicate")
        .current_dir(dir.path())
        .assert()
        .failure();

    assert!(dir.entries().is_empty());
}
