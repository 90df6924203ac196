// gil-rs: Git Links - Repository Graph Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::error::{GilError, GilResult, LinkError};
use crate::git::{CommandStatus, VersionControl};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MANIFEST: &str = ".gitlinks";

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn root_of(temp: &TempDir) -> PathBuf {
    std::fs::canonicalize(temp.path()).unwrap()
}

fn write_manifest(dir: &Path, content: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(MANIFEST), content).unwrap();
}

fn populate(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("README"), "clone\n").unwrap();
}

fn link_error(err: GilError) -> LinkError {
    match err {
        GilError::Link(e) => *e,
        other => panic!("expected a link error, got {other:?}"),
    }
}

fn names(records: &RecordSet) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

// --- Tokenizer ---

#[test]
fn test_plain_tokens() {
    assert_eq!(
        tokenize::split("libA ./vendor/a  https://x/a.git\tmain"),
        ["libA", "./vendor/a", "https://x/a.git", "main"]
    );
}

#[test]
fn test_double_quoted_token() {
    assert_eq!(tokenize::split(r#"a "b c" d"#), ["a", "b c", "d"]);
}

#[test]
fn test_single_quoted_with_escapes() {
    assert_eq!(tokenize::split(r"x 'y \'z\'' w"), ["x", "y 'z'", "w"]);
}

#[test]
fn test_escaped_double_quote_inside_double_quotes() {
    assert_eq!(tokenize::split(r#""say \"hi\"" end"#), [r#"say "hi""#, "end"]);
}

#[test]
fn test_empty_quoted_token() {
    assert_eq!(tokenize::split(r#"a "" b"#), ["a", "", "b"]);
}

#[test]
fn test_unterminated_quote_is_tolerated() {
    assert_eq!(tokenize::split(r#"a "b c"#), ["a", "\"b", "c"]);
}

#[test]
fn test_blank_line() {
    assert!(tokenize::split("   \t ").is_empty());
}

// --- Record set ---

#[test]
fn test_identity_ignores_path() {
    let mut set = RecordSet::new();
    let first = set.insert(Record::new("libA", "/w/a", "https://x/a.git", "main"));
    let second = set.insert(Record::new("libA", "/w/app/vendor/a", "https://x/a.git", "main"));

    assert!(first.is_new());
    assert_eq!(second, Insertion::Known(first.id()));
    assert_eq!(set.len(), 1);
    assert_eq!(set.record(first.id()).path, PathBuf::from("/w/a"));
}

#[test]
fn test_identity_includes_branch_and_repo() {
    let mut set = RecordSet::new();
    set.insert(Record::new("libA", "/w/a", "https://x/a.git", "main"));
    set.insert(Record::new("libA", "/w/a-dev", "https://x/a.git", "dev"));
    set.insert(Record::new("libA", "/w/a-fork", "https://y/a.git", "main"));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_conflicting_links_keep_first() {
    let mut set = RecordSet::new();
    let id = set
        .insert(Record::new("libA", "/w/a", "r", "main").with_link("include", "inc/a"))
        .id();
    set.insert(Record::new("libA", "/w/b/a", "r", "main").with_link("src", "src/a"));

    let key = Record::new("libA", "/elsewhere", "r", "main").key();
    assert!(set.contains(&key));
    assert_eq!(
        set.get(&key).unwrap().links,
        vec![("include".to_string(), "inc/a".to_string())]
    );
    assert_eq!(set.record(id).path, PathBuf::from("/w/a"));
}

#[test]
fn test_repeated_link_source_replaces_target() {
    let record = Record::new("libA", "/w/a", "r", "main")
        .with_link("include", "one")
        .with_link("docs", "two")
        .with_link("include", "three");
    assert_eq!(
        record.links,
        vec![
            ("include".to_string(), "three".to_string()),
            ("docs".to_string(), "two".to_string()),
        ]
    );
}

#[test]
fn test_mark_active_is_component_wise() {
    let mut set = RecordSet::new();
    set.insert(Record::new("lib", "/work/lib", "r1", "main"));
    set.insert(Record::new("nested", "/work/lib/vendor/x", "r2", "main"));
    set.insert(Record::new("library", "/work/library", "r3", "main"));

    set.mark_active(Path::new("/work/lib"));
    let active: Vec<_> = set.active().map(|r| r.name.as_str()).collect();
    assert_eq!(active, ["lib", "nested"]);
}

#[test]
fn test_record_display() {
    let record = Record::new("libA", "/w/vendor/a", "https://x/a.git", "main");
    insta::assert_snapshot!(record.to_string(), @"libA /w/vendor/a https://x/a.git main");
}

// --- Manifest parser ---

#[cfg(unix)]
#[test]
fn test_parse_manifest_lines() {
    let content = "\
# dependencies
libA ./vendor/a https://x/a.git main

   # indented comment
libB \"../shared/my lib\" https://x/b.git dev include ./include/b docs ./docs/b
";
    let manifest = Manifest::parse(Path::new("/work/app"), "/work/app/.gitlinks", content).unwrap();
    let entries = manifest.entries();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].line, 1);
    assert_eq!(entries[0].record.path, PathBuf::from("/work/app/vendor/a"));
    assert_eq!(entries[0].record.branch, "main");
    assert!(entries[0].record.links.is_empty());

    assert_eq!(entries[1].line, 4);
    assert_eq!(entries[1].record.path, PathBuf::from("/work/shared/my lib"));
    assert_eq!(
        entries[1].record.links,
        vec![
            ("include".to_string(), "./include/b".to_string()),
            ("docs".to_string(), "./docs/b".to_string()),
        ]
    );
}

#[test]
fn test_format_error_three_tokens() {
    let err = Manifest::parse(
        Path::new("/work"),
        "/work/.gitlinks",
        "# header\n\nlibA ./a https://x/a.git\n",
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"/work/.gitlinks:2: invalid link format, expected 'name path repo branch [source target]...'"
    );
}

#[test]
fn test_format_error_odd_extra_tokens() {
    let err = Manifest::parse(
        Path::new("/work"),
        "/work/.gitlinks",
        "libA ./a https://x/a.git main include\n",
    )
    .unwrap_err();
    assert!(matches!(
        link_error(err),
        LinkError::Format { line: 0, .. }
    ));
}

#[test]
fn test_six_tokens_parse() {
    let manifest = Manifest::parse(
        Path::new("/work"),
        "/work/.gitlinks",
        "libA ./a https://x/a.git main include ./inc\n",
    )
    .unwrap();
    assert_eq!(manifest.entries()[0].record.links.len(), 1);
}

#[test]
fn test_read_missing_manifest() {
    let temp = temp_dir();
    assert!(Manifest::read(temp.path(), MANIFEST).unwrap().is_none());
}

// --- Discovery ---

#[test]
fn test_find_root_picks_highest_manifest() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "");
    write_manifest(&root.join("a"), "");
    let start = root.join("a").join("b");
    std::fs::create_dir_all(&start).unwrap();

    assert_eq!(find_root(&start, MANIFEST), root);
}

#[test]
fn test_find_root_without_ancestors() {
    let temp = temp_dir();
    let start = root_of(&temp).join("lonely");
    write_manifest(&start, "");
    assert_eq!(find_root(&start, MANIFEST), start);
}

#[test]
fn test_discovery_dedups_cross_references() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\napp ./app rapp main\n");
    write_manifest(&root.join("app"), "libA ./vendor/a ra main\n");

    let mut discovery = Discovery::new(MANIFEST);
    discovery.discover(&root).unwrap();

    let records = discovery.records();
    assert_eq!(names(records), ["libA", "app"]);
    assert_eq!(records.iter().next().unwrap().path, root.join("a"));
}

#[test]
fn test_discovery_terminates_on_cycle() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "A ./a ra main\n");
    write_manifest(&root.join("a"), "B ../b rb main\n");
    write_manifest(&root.join("b"), "A ../a ra main\n");

    let mut discovery = Discovery::new(MANIFEST);
    discovery.discover(&root).unwrap();
    assert_eq!(names(discovery.records()), ["A", "B"]);
}

#[test]
fn test_discovery_depth_first_order() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "X ./x rx main\nY ./y ry main\n");
    write_manifest(&root.join("x"), "Z ../z rz main\n");
    write_manifest(&root.join("y"), "W ../w rw main\n");

    let mut discovery = Discovery::new(MANIFEST);
    discovery.discover(&root).unwrap();
    assert_eq!(names(discovery.records()), ["X", "Y", "Z", "W"]);
}

#[test]
fn test_discovery_marks_active_below_start() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "app ./app rapp main\nlibA ./a ra main\n");
    write_manifest(&root.join("app"), "libB ./vendor/b rb main\n");

    let mut discovery = Discovery::new(MANIFEST);
    let found = discovery.discover(&root.join("app")).unwrap();
    assert_eq!(found, root);

    let active: Vec<_> = discovery.records().active().map(|r| r.name.as_str()).collect();
    assert_eq!(active, ["app", "libB"]);
}

#[test]
fn test_discovery_reports_format_error() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\n");
    write_manifest(&root.join("a"), "broken line\n");

    let mut discovery = Discovery::new(MANIFEST);
    let err = link_error(discovery.discover(&root).unwrap_err());
    match err {
        LinkError::Format { manifest, line } => {
            assert_eq!(manifest, root.join("a").join(MANIFEST));
            assert_eq!(line, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_scan_returns_only_new_ids() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\nlibA ./again ra main\nlibB ./b rb main\n");

    let mut discovery = Discovery::new(MANIFEST);
    let ids = discovery.scan(&root).unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(discovery.records().record(ids[0]).path, root.join("a"));
    assert_eq!(discovery.records().record(ids[1]).name, "libB");
    assert!(discovery.scan(&root).unwrap().is_empty());
    assert!(discovery.scan(&root.join("missing")).unwrap().is_empty());
}

// --- Link resolver ---

#[cfg(unix)]
fn cross_reference_tree(root: &Path) {
    write_manifest(root, "libA ./a ra main\napp ./app rapp main\n");
    populate(&root.join("a"));
    write_manifest(&root.join("app"), "libA ./vendor/a ra main\n");
}

#[cfg(unix)]
fn resolve(root: &Path) -> GilResult<LinkReport> {
    let mut discovery = Discovery::new(MANIFEST);
    discovery.discover(root)?;
    LinkResolver::new(discovery.records(), MANIFEST).resolve_all(root)
}

#[cfg(unix)]
#[test]
fn test_cross_reference_becomes_symlink() {
    let temp = temp_dir();
    let root = root_of(&temp);
    cross_reference_tree(&root);

    let report = resolve(&root).unwrap();
    assert_eq!(report.created, 1);

    let declared = root.join("app").join("vendor").join("a");
    assert_eq!(std::fs::read_link(&declared).unwrap(), root.join("a"));
    assert!(declared.join("README").is_file());
}

#[cfg(unix)]
#[test]
fn test_second_link_pass_changes_nothing() {
    let temp = temp_dir();
    let root = root_of(&temp);
    cross_reference_tree(&root);

    let first = resolve(&root).unwrap();
    assert_eq!(first.changed(), 1);

    let second = resolve(&root).unwrap();
    assert_eq!(second.changed(), 0);
    assert_eq!(second.unchanged, 1);
}

#[cfg(unix)]
#[test]
fn test_second_link_pass_keeps_secondary_links() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(
        &root,
        "libA ./a ra main include ./inc/a LICENSE ./LICENSE.a
",
    );
    populate(&root.join("a").join("include"));
    std::fs::write(root.join("a").join("LICENSE"), "MIT\n").unwrap();

    let first = resolve(&root).unwrap();
    assert_eq!(first.created, 2);
    assert_eq!(
        std::fs::read_link(root.join("LICENSE.a")).unwrap(),
        root.join("a").join("LICENSE")
    );

    let second = resolve(&root).unwrap();
    assert_eq!(second.changed(), 0);
    assert_eq!(second.unchanged, 2);
    assert_eq!(second.same, 1);
}

#[cfg(unix)]
#[test]
fn test_link_to_empty_file_is_recreated() {
    let temp = temp_dir();
    let root = root_of(&temp);
    let source = root.join("empty");
    std::fs::write(&source, "").unwrap();
    let destination = root.join("dest");

    assert_eq!(link(&source, &destination).unwrap(), LinkOutcome::Created);
    assert_eq!(link(&source, &destination).unwrap(), LinkOutcome::Replaced);

    std::fs::write(&source, "now populated").unwrap();
    assert_eq!(link(&source, &destination).unwrap(), LinkOutcome::Unchanged);
}

#[cfg(unix)]
#[test]
fn test_dangling_link_is_repaired() {
    let temp = temp_dir();
    let root = root_of(&temp);
    cross_reference_tree(&root);

    let declared = root.join("app").join("vendor").join("a");
    std::fs::create_dir_all(declared.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink(root.join("gone"), &declared).unwrap();

    let report = resolve(&root).unwrap();
    assert_eq!(report.replaced, 1);
    assert_eq!(std::fs::read_link(&declared).unwrap(), root.join("a"));
}

#[cfg(unix)]
#[test]
fn test_populated_directory_is_kept() {
    let temp = temp_dir();
    let root = root_of(&temp);
    cross_reference_tree(&root);

    let declared = root.join("app").join("vendor").join("a");
    std::fs::create_dir_all(&declared).unwrap();
    std::fs::write(declared.join("local-work"), "keep me").unwrap();

    let report = resolve(&root).unwrap();
    assert_eq!(report.kept, 1);
    assert!(declared.join("local-work").is_file());
    assert!(std::fs::symlink_metadata(&declared).unwrap().is_dir());
}

#[cfg(unix)]
#[test]
fn test_secondary_links() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main include ./inc/a\n");
    populate(&root.join("a").join("include"));

    resolve(&root).unwrap();
    assert_eq!(
        std::fs::read_link(root.join("inc").join("a")).unwrap(),
        root.join("a").join("include")
    );
}

#[cfg(unix)]
#[test]
fn test_missing_dependency_path() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "# deps\nlibA ./a ra main\n");

    let err = link_error(resolve(&root).unwrap_err());
    match err {
        LinkError::MissingPath {
            manifest,
            line,
            name,
            path,
        } => {
            assert_eq!(manifest, root.join(MANIFEST));
            assert_eq!(line, 1);
            assert_eq!(name, "libA");
            assert_eq!(path, root.join("a"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn test_link_primitive() {
    let temp = temp_dir();
    let root = root_of(&temp);
    let source = root.join("source");
    populate(&source);

    assert_eq!(link(&source, &source).unwrap(), LinkOutcome::Same);

    let empty = root.join("empty");
    std::fs::create_dir(&empty).unwrap();
    assert_eq!(link(&source, &empty).unwrap(), LinkOutcome::Replaced);
    assert_eq!(link(&source, &empty).unwrap(), LinkOutcome::Unchanged);

    let nested = root.join("deep").join("er").join("link");
    assert_eq!(link(&source, &nested).unwrap(), LinkOutcome::Created);
    assert!(nested.join("README").is_file());
}

// --- Orchestrator ---

#[derive(Debug, Default)]
struct MockVcs {
    calls: RefCell<Vec<String>>,
    /// Manifest written into a fresh clone, by repo.
    manifests: HashMap<String, String>,
    clone_code: Option<i32>,
    checkout_code: Option<i32>,
    run_code: Option<i32>,
}

impl MockVcs {
    fn new() -> Self {
        Self {
            clone_code: Some(0),
            checkout_code: Some(0),
            run_code: Some(0),
            ..Self::default()
        }
    }

    fn with_manifest(mut self, repo: &str, content: &str) -> Self {
        self.manifests.insert(repo.to_string(), content.to_string());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VersionControl for MockVcs {
    async fn clone(
        &self,
        repo: &str,
        branch: &str,
        dest: &Path,
        extra_args: &[String],
    ) -> GilResult<CommandStatus> {
        self.calls.borrow_mut().push(
            format!("clone {} {repo} {branch} {}", extra_args.join(" "), dest.display())
                .replace("  ", " "),
        );
        if self.clone_code == Some(0) {
            populate(dest);
            if let Some(content) = self.manifests.get(repo) {
                write_manifest(dest, content);
            }
        }
        Ok(CommandStatus::new(self.clone_code))
    }

    async fn checkout(&self, repo_path: &Path, branch: &str) -> GilResult<CommandStatus> {
        self.calls
            .borrow_mut()
            .push(format!("checkout {branch} {}", repo_path.display()));
        Ok(CommandStatus::new(self.checkout_code))
    }

    async fn run(
        &self,
        repo_path: &Path,
        command: &str,
        args: &[String],
    ) -> GilResult<CommandStatus> {
        self.calls.borrow_mut().push(
            format!("{command} {} {}", args.join(" "), repo_path.display()).replace("  ", " "),
        );
        Ok(CommandStatus::new(self.run_code))
    }
}

#[tokio::test]
async fn test_clone_grows_graph_lazily() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./vendor/a https://x/a.git main\n");

    let vcs = MockVcs::new().with_manifest("https://x/a.git", "libB ../b https://x/b.git main\n");
    let mut orchestrator = Orchestrator::discover(vcs, &root, MANIFEST).unwrap();
    assert_eq!(orchestrator.records().len(), 1);

    let cloned = orchestrator.clone(&[]).await.unwrap();
    assert_eq!(cloned, 2);
    assert_eq!(
        orchestrator.vcs().calls(),
        vec![
            format!("clone https://x/a.git main {}", root.join("vendor/a").display()),
            format!("clone https://x/b.git main {}", root.join("vendor/b").display()),
        ]
    );
    assert_eq!(names(orchestrator.records()), ["libA", "libB"]);
    assert!(orchestrator.records().iter().all(|r| r.active));
}

#[tokio::test]
async fn test_clone_skips_populated_paths_and_passes_args() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\nlibB ./b rb dev\n");
    populate(&root.join("a"));

    let mut orchestrator = Orchestrator::discover(MockVcs::new(), &root, MANIFEST).unwrap();
    let args = vec!["--depth".to_string(), "1".to_string()];
    assert_eq!(orchestrator.clone(&args).await.unwrap(), 1);
    assert_eq!(
        orchestrator.vcs().calls(),
        vec![format!("clone --depth 1 rb dev {}", root.join("b").display())]
    );
}

#[tokio::test]
async fn test_clone_failure_is_fatal() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\nlibB ./b rb main\n");

    let vcs = MockVcs {
        clone_code: Some(128),
        ..MockVcs::new()
    };
    let mut orchestrator = Orchestrator::discover(vcs, &root, MANIFEST).unwrap();
    let err = link_error(orchestrator.clone(&[]).await.unwrap_err());

    assert!(matches!(err, LinkError::Clone { ref repo, ref branch, .. } if repo == "ra" && branch == "main"));
    assert_eq!(orchestrator.vcs().calls().len(), 1);
}

#[cfg(unix)]
#[tokio::test]
async fn test_update_clones_then_links() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\napp ./app rapp main\n");

    let vcs = MockVcs::new().with_manifest("rapp", "libA ./vendor/a ra main\n");
    let mut orchestrator = Orchestrator::discover(vcs, &root, MANIFEST).unwrap();
    let report = orchestrator.update(&[]).await.unwrap();

    assert_eq!(report.created, 1);
    assert_eq!(
        std::fs::read_link(root.join("app/vendor/a")).unwrap(),
        root.join("a")
    );
    assert_eq!(orchestrator.link().unwrap().changed(), 0);
}

#[tokio::test]
async fn test_command_runs_in_workdir_then_active_records() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "app ./app rapp main\nlibA ./a ra main\n");
    write_manifest(&root.join("app"), "libB ./vendor/b rb dev\n");

    let workdir = root.join("app");
    let orchestrator = Orchestrator::discover(MockVcs::new(), &workdir, MANIFEST).unwrap();
    orchestrator
        .command("status", &["--short".to_string()])
        .await
        .unwrap();

    let b = workdir.join("vendor/b");
    assert_eq!(
        orchestrator.vcs().calls(),
        vec![
            format!("status --short {}", workdir.display()),
            format!("checkout main {}", workdir.display()),
            format!("status --short {}", workdir.display()),
            format!("checkout dev {}", b.display()),
            format!("status --short {}", b.display()),
        ]
    );
}

#[tokio::test]
async fn test_command_non_zero_exit_is_not_fatal() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\n");

    let vcs = MockVcs {
        run_code: Some(1),
        ..MockVcs::new()
    };
    let orchestrator = Orchestrator::discover(vcs, &root, MANIFEST).unwrap();
    orchestrator.command("pull", &[]).await.unwrap();
    assert_eq!(orchestrator.vcs().calls().len(), 3);
}

#[tokio::test]
async fn test_command_without_status_is_fatal() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra main\n");

    let vcs = MockVcs {
        run_code: None,
        ..MockVcs::new()
    };
    let orchestrator = Orchestrator::discover(vcs, &root, MANIFEST).unwrap();
    let err = link_error(orchestrator.command("push", &[]).await.unwrap_err());
    assert!(matches!(err, LinkError::Command { ref command, ref path } if command == "push" && *path == root));
}

#[tokio::test]
async fn test_checkout_failure_is_fatal() {
    let temp = temp_dir();
    let root = root_of(&temp);
    write_manifest(&root, "libA ./a ra feature\n");

    let vcs = MockVcs {
        checkout_code: Some(1),
        ..MockVcs::new()
    };
    let orchestrator = Orchestrator::discover(vcs, &root, MANIFEST).unwrap();
    let err = link_error(orchestrator.command("commit", &[]).await.unwrap_err());
    insta::assert_snapshot!(
        err.to_string().replace(&root.display().to_string(), "<root>"),
        @r#"failed to run git checkout branch "feature" in <root>/a"#
    );
}
