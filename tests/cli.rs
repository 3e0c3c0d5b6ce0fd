use std::{fs, path::Path, process::Command};

fn newpost(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_newpost"))
        .current_dir(cwd)
        .args(args)
        .env_remove("NEWPOST_DIALECT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn only_file_in(dir: &Path) -> String {
    let entries: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap()).collect();
    assert_eq!(entries.len(), 1);
    entries[0].file_name().to_string_lossy().to_string()
}

#[test]
fn no_arguments_writes_jekyll_post() {
    let root = tempfile::tempdir().unwrap();
    let out = newpost(root.path(), &[]);
    assert!(out.status.success());

    let name = only_file_in(&root.path().join("_posts"));
    assert!(name.ends_with("-uncategorized-new-post.md"), "{name}");

    let content = fs::read_to_string(root.path().join("_posts").join(&name)).unwrap();
    assert!(content.starts_with("---\nlayout: post\ntitle:  \"🌱🌳TITLE\"\ndate:   "));
    assert!(content.contains(" +0800\ntags: [TAG1, TAG2]\n---\n"));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✅ Created new post template: "));
    assert!(stdout.contains(&name));
}

#[test]
fn hugo_dialect_prints_preview_url() {
    let root = tempfile::tempdir().unwrap();
    let out = newpost(root.path(), &["--dialect", "hugo", "--slug", "Hello World"]);
    assert!(out.status.success());

    let name = only_file_in(&root.path().join("content").join("posts"));
    assert!(name.ends_with("-hello-world.md"), "{name}");

    let stdout = String::from_utf8_lossy(&out.stdout);
    let stem = name.trim_end_matches(".md");
    assert!(stdout.contains(&format!("http://localhost:1313/posts/{stem}/")));
}

#[test]
fn failure_is_reported_with_zero_exit_code() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("blocker"), "").unwrap();

    let out = newpost(root.path(), &["--out-dir", "blocker/_posts"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("❌ Failed to create post: "), "{stdout}");
    assert!(!root.path().join("blocker").join("_posts").exists());
}

#[test]
fn running_twice_keeps_one_file() {
    let root = tempfile::tempdir().unwrap();
    assert!(newpost(root.path(), &["--no-preview", "--dialect", "hugo"]).status.success());
    assert!(newpost(root.path(), &["--no-preview", "--dialect", "hugo"]).status.success());

    let dir = root.path().join("content").join("posts");
    let name = only_file_in(&dir);
    let content = fs::read_to_string(dir.join(name)).unwrap();
    assert_eq!(content.matches("---\n").count(), 2);
}

#[test]
fn dialect_from_environment() {
    let root = tempfile::tempdir().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_newpost"))
        .current_dir(root.path())
        .env("NEWPOST_DIALECT", "hugo")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(out.status.success());

    let dir = root.path().join("content").join("posts");
    let name = only_file_in(&dir);
    assert!(name.ends_with("-new-post.md"), "{name}");
    let content = fs::read_to_string(dir.join(name)).unwrap();
    assert!(content.contains("+08:00\ntags: [TAG1, TAG2]\ndraft: false\n"));
    assert!(!root.path().join("_posts").exists());
}
