use std::{
    fs,
    path::{Path, PathBuf},
};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap().to_path_buf()
}

fn rust_files(dir: &Path, acc: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_files(&path, acc);
        } else if path.extension().map_or(false, |it| it == "rs") {
            acc.push(path);
        }
    }
}

fn sources() -> Vec<PathBuf> {
    let root = project_root();
    let mut acc = Vec::new();
    for dir in ["src", "tests", "demos", "xtask/src"] {
        rust_files(&root.join(dir), &mut acc);
    }
    acc
}

#[test]
fn no_trailing_whitespace_or_tabs() {
    let mut bad = Vec::new();
    for path in sources() {
        let text = fs::read_to_string(&path).unwrap();
        for (i, line) in text.lines().enumerate() {
            if line.ends_with(' ') || line.contains('\t') {
                bad.push(format!("{}:{}", path.display(), i + 1));
            }
        }
    }
    assert!(bad.is_empty(), "whitespace issues:\n{}", bad.join("\n"));
}

#[test]
fn no_dbg() {
    let needle = concat!("dbg", "!(");
    for path in sources() {
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains(needle), "{} contains a debug macro", path.display());
    }
}
