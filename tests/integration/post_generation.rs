use crate::helpers::prelude::*;

#[test]
fn failed_install_keeps_the_project_and_is_reported() {
    let dir = tempdir().build();
    // nothing can be found on an empty PATH: no package manager, no git
    let empty_path = tempdir().build();

    binary()
        .arg_name("demo")
        .arg_author("Ada")
        .env("PATH", empty_path.path())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(
            predicates::str::contains("install")
                .and(predicates::str::contains("was not found"))
                .from_utf8(),
        )
        .stderr(predicates::str::contains("1 step(s) failed").from_utf8());

    for file in GENERATED_FILES {
        assert!(dir.exists(&format!("demo/{file}")), "demo/{file} is missing");
    }
    assert!(dir.target_path("demo").join(".git").is_dir());
}

#[test]
fn failed_install_with_another_package_manager() {
    let dir = tempdir().build();
    let empty_path = tempdir().build();

    binary()
        .arg_name("demo")
        .arg_author("Ada")
        .arg("--package-manager")
        .arg("pnpm")
        .skip_git()
        .env("PATH", empty_path.path())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicates::str::contains("pnpm").from_utf8());

    assert!(dir.exists("demo/package.json"));
}

#[test]
fn git_repository_is_created_in_the_project() {
    let dir = tempdir().build();

    binary()
        .arg_name("demo")
        .arg_author("Ada")
        .skip_install()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Initializing git repository").from_utf8());

    assert!(dir.target_path("demo").join(".git").is_dir());
    assert!(!dir.exists(".git"));
}

#[test]
fn skip_git_leaves_no_repository() {
    let dir = tempdir().build();

    binary()
        .arg_name("demo")
        .arg_author("Ada")
        .files_only()
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(!dir.target_path("demo").join(".git").exists());
}
