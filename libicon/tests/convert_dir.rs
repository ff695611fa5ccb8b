use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use libicon::{convert_dir, Config, Error, Summary};

const CHECK: &str = r#"package top.yukonga.miuix.kmp.icon.icons.basic

val MiuixIcons.Basic.Check: ImageVector
    get() {
        if (_check != null) return _check!!
        _check = ImageVector.Builder("Check", 26.0f.dp, 26.0f.dp, 26.0f, 26.0f).apply {
            path(pathFillType = PathFillType.EvenOdd) {
                moveTo(10f, 20f)
                lineTo(30f, 40f)
            }
        }.build()
        return _check!!
    }

private var _check: ImageVector? = null
"#;

const CHECK_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="26" height="26" viewBox="0 0 26 26" fill="none" aria-label="Check">"#,
    "\n",
    r##"  <path d="M 10 20 L 30 40" fill="#000000" fill-rule="evenodd"/>"##,
    "\n</svg>\n",
);

const NO_BUILDER: &str = r#"val MiuixIcons.Basic.Broken: ImageVector
    get() = materialIcon("Broken") { }
"#;

const NOT_AN_ICON: &str = "package top.yukonga.miuix.kmp.utils\n\nfun clamp(v: Float) = v\n";

/// A fresh directory under the system temp dir, unique per test and process.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("libicon-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A = valid icon, B = icon property without builder, C = not UTF-8.
fn three_file_tree(root: &Path) -> PathBuf {
    let source = root.join("src");
    fs::create_dir_all(source.join("basic/nested")).unwrap();
    fs::write(source.join("basic/Check.kt"), CHECK).unwrap();
    fs::write(source.join("basic/nested/Broken.kt"), NO_BUILDER).unwrap();
    fs::write(source.join("Garbage.kt"), b"\xff\xfe\x00\xc3\x28").unwrap();
    source
}

fn svg_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn converts_and_counts_failures() {
    let root = scratch("counts");
    let source = three_file_tree(&root);
    // sources without an icon fail too, other extensions are never read
    fs::write(source.join("Utils.kt"), NOT_AN_ICON).unwrap();
    fs::write(source.join("README.md"), CHECK).unwrap();
    let output = root.join("out/svg");

    let summary = convert_dir(&source, &output, &Config::default()).unwrap();

    assert_eq!(
        summary,
        Summary {
            success: 1,
            failed: 3,
            skipped: 1,
        }
    );
    assert_eq!(summary.to_string(), "Done. Success: 1, Failed: 3");
    assert_eq!(svg_files(&output), vec!["Check.svg"]);
    assert_eq!(fs::read_to_string(output.join("Check.svg")).unwrap(), CHECK_SVG);
}

#[test]
fn directory_with_source_extension_is_a_failure() {
    let root = scratch("dir-ext");
    let source = root.join("src");
    fs::create_dir_all(source.join("Odd.kt")).unwrap();
    fs::write(source.join("Odd.kt/Check.kt"), CHECK).unwrap();

    let summary = convert_dir(&source, root.join("out"), &Config::default()).unwrap();

    assert_eq!(summary.success, 1);
    assert_eq!(summary.failed, 1);
}

#[test]
fn output_is_flat_and_idempotent() {
    let root = scratch("idempotent");
    let source = three_file_tree(&root);
    let output = root.join("out");

    convert_dir(&source, &output, &Config::default()).unwrap();
    let first = fs::read(output.join("Check.svg")).unwrap();
    let summary = convert_dir(&source, &output, &Config::default()).unwrap();
    let second = fs::read(output.join("Check.svg")).unwrap();

    assert_eq!(summary.success, 1);
    assert_eq!(first, second);
    assert_eq!(svg_files(&output), vec!["Check.svg"]);
}

#[test]
fn custom_namespace_and_extension() {
    let root = scratch("config");
    let source = root.join("src");
    fs::create_dir_all(&source).unwrap();
    fs::write(
        source.join("Star.txt"),
        CHECK.replace("MiuixIcons.Basic.Check", "AppIcons.Rating.Star Icon"),
    )
    .unwrap();
    fs::write(source.join("Check.kt"), CHECK.replace("MiuixIcons", "AppIcons")).unwrap();

    let config = Config {
        namespace: "AppIcons".to_string(),
        extension: "txt".to_string(),
    };
    let summary = convert_dir(&source, root.join("out"), &config).unwrap();

    // `Star Icon` is not a property declaration, `Star` needs a colon right after it
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.success, 0);

    fs::write(
        source.join("Star.txt"),
        CHECK.replace("MiuixIcons.Basic.Check", "AppIcons.Rating.Star"),
    )
    .unwrap();
    let summary = convert_dir(&source, root.join("out"), &config).unwrap();
    assert_eq!(summary.success, 1);
    assert_eq!(svg_files(&root.join("out")), vec!["Star.svg"]);
}

#[test]
fn source_without_icon_is_a_failure() {
    let root = scratch("no-icon");
    let source = root.join("src");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("Clamp.kt"), "package x\nfun clamp(v: Float) = v\n").unwrap();

    let summary = convert_dir(&source, root.join("out"), &Config::default()).unwrap();

    assert_eq!(summary.success, 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.to_string(), "Done. Success: 0, Failed: 1");
    assert!(svg_files(&root.join("out")).is_empty());
}

#[test]
fn source_path_to_a_file_converts_nothing() {
    let root = scratch("file-source");
    let source = root.join("Check.kt");
    fs::write(&source, CHECK).unwrap();

    let summary = convert_dir(&source, root.join("out"), &Config::default()).unwrap();

    assert_eq!(summary, Summary::default());
    assert!(svg_files(&root.join("out")).is_empty());
}

#[test]
fn missing_source_directory() {
    let root = scratch("missing");
    let result = convert_dir(root.join("nope"), root.join("out"), &Config::default());

    assert!(matches!(result, Err(Error::MissingSourceDir(_))));
    assert!(!root.join("out").exists());
}

#[test]
fn cli_exit_status() {
    let bin = env!("CARGO_BIN_EXE_kt2svg");
    let root = scratch("cli");
    let source = three_file_tree(&root);

    let no_args = Command::new(bin).output().unwrap();
    assert_eq!(no_args.status.code(), Some(1));

    let one_arg = Command::new(bin).arg(&source).output().unwrap();
    assert_eq!(one_arg.status.code(), Some(1));

    let missing = Command::new(bin)
        .arg(root.join("nope"))
        .arg(root.join("out"))
        .output()
        .unwrap();
    assert_eq!(missing.status.code(), Some(1));

    let run = Command::new(bin)
        .arg(&source)
        .arg(root.join("out"))
        .env_remove("ICON_NAMESPACE")
        .env_remove("ICON_EXTENSION")
        .output()
        .unwrap();
    assert_eq!(run.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&run.stdout);
    assert!(stdout.contains("Done. Success: 1, Failed: 2"), "{stdout}");
    assert!(root.join("out/Check.svg").is_file());
}
