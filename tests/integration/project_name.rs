use crate::helpers::prelude::*;

#[test]
fn it_asks_for_the_project_name_and_falls_back_to_the_default() {
    let dir = tempdir().build();

    binary()
        .arg_author("Ada")
        .files_only()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(
            predicates::str::contains("not a terminal")
                .from_utf8()
                .and(predicates::str::contains("project-temp-").from_utf8()),
        );

    let entries = dir.entries();
    assert_eq!(entries.len(), 1, "{entries:?}");
    assert!(entries[0].starts_with("project-temp-"));
    assert!(dir
        .read(&format!("{}/package.json", entries[0]))
        .contains(&format!(r#""name": "{}""#, entries[0])));
}

#[test]
fn it_can_fill_projectname() {
    let dir = tempdir().build();

    binary()
        .arg_name("foobar-project")
        .arg_author("Ada")
        .files_only()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done!").from_utf8());

    assert!(dir
        .read("foobar-project/package.json")
        .contains(r#""name": "foobar-project""#));
}

#[test]
fn it_keeps_the_projectname_verbatim() {
    let dir = tempdir().build();

    binary()
        .arg_name("FoobarProject_v2")
        .arg_author("Ada")
        .files_only()
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("FoobarProject_v2/package.json"));
    assert!(dir
        .read("FoobarProject_v2/README.md")
        .starts_with("# FoobarProject_v2\n"));
}

#[test]
fn silent_mode_uses_the_default_name_without_asking() {
    let dir = tempdir().build();

    binary()
        .arg("--silent")
        .files_only()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("not a terminal").not().from_utf8());

    let entries = dir.entries();
    assert_eq!(entries.len(), 1, "{entries:?}");
    let rest = entries[0].strip_prefix("project-temp-").unwrap();
    let (hour, second) = rest.split_once('-').unwrap();
    assert!(hour.parse::<u32>().unwrap() < 24);
    assert!(second.parse::<u32>().unwrap() < 61);
    assert!(dir
        .read(&format!("{}/package.json", entries[0]))
        .contains("Your Name <you@example.com>"));
}
