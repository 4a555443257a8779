use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use toml_edit::{DocumentMut, Item};

const MANIFEST: &str = "Cargo.toml";
const CHANGELOG: &str = "CHANGELOG.md";

type BoxError = Box<dyn std::error::Error>;

struct Options {
    dry_run: bool,
    version: Option<String>,
}

fn parse_args() -> Result<Options, BoxError> {
    let mut options = Options {
        dry_run: false,
        version: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dry-run" => options.dry_run = true,
            "--version" => {
                let value = args.next().ok_or("--version needs a value")?;
                options.version = Some(value);
            }
            other => return Err(format!("Unknown argument: {}", other).into()),
        }
    }
    Ok(options)
}

/// Accepts `major.minor.patch` with an optional `-pre` suffix
fn validate_version(version: &str) -> Result<(), BoxError> {
    let core = version.split_once('-').map_or(version, |(core, _)| core);
    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || p.parse::<u64>().is_err()) {
        return Err(format!("Invalid version '{}', expected major.minor.patch", version).into());
    }
    Ok(())
}

fn git_output(args: &[&str]) -> Result<Option<String>, BoxError> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
}

fn latest_tag() -> Result<Option<String>, BoxError> {
    git_output(&["describe", "--tags", "--abbrev=0"])
}

fn commits_since(tag: Option<&str>) -> Result<String, BoxError> {
    let range = tag.map(|t| format!("{}..HEAD", t));
    let mut args = vec!["log", "--pretty=format:- %s"];
    if let Some(range) = range.as_deref() {
        args.push(range);
    }
    Ok(git_output(&args)?.unwrap_or_default())
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn confirm(message: &str) -> Result<bool, io::Error> {
    print!("{} (y/n): ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn prompt(message: &str) -> Result<String, io::Error> {
    println!("{}", message);
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn current_version(doc: &DocumentMut) -> Option<&str> {
    doc.get("package")
        .and_then(|package| package.get("version"))
        .and_then(Item::as_str)
}

fn bump_manifest(doc: &mut DocumentMut, version: &str) -> Result<String, BoxError> {
    let current = current_version(doc)
        .ok_or("Could not find package.version in Cargo.toml")?
        .to_string();
    doc["package"]["version"] = Item::from(version);
    Ok(current)
}

fn changelog_entry(version: &str, date: &str, notes: &str) -> String {
    let notes = if notes.is_empty() { "- No changes recorded" } else { notes };
    format!("## v{} ({})\n\n{}\n\n", version, date, notes)
}

/// A missing changelog is started fresh; any other read failure aborts so the
/// existing history is never overwritten.
fn prepend_changelog(path: &Path, entry: &str) -> Result<(), BoxError> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e).into()),
    };
    let body = existing
        .strip_prefix("# Changelog\n\n")
        .unwrap_or(&existing);
    fs::write(path, format!("# Changelog\n\n{}{}", entry, body))?;
    Ok(())
}

fn run_shell(cmd: &str, error_msg: &str) -> Result<(), BoxError> {
    println!("Executing: {}", cmd);
    let status = Command::new("sh").arg("-c").arg(cmd).status()?;
    if !status.success() {
        return Err(error_msg.into());
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let options = parse_args()?;

    let mut doc = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let current = current_version(&doc).unwrap_or("unknown").to_string();
    println!("Current version is: {}", current);

    let version = match options.version {
        Some(version) => version,
        None => prompt("Enter new version:")?,
    };
    validate_version(&version)?;
    if version == current {
        return Err(format!("Version {} is already current", version).into());
    }

    let previous_tag = latest_tag()?;
    println!(
        "Previous tag: {}",
        previous_tag.as_deref().unwrap_or("None")
    );
    let notes = commits_since(previous_tag.as_deref())?;
    let entry = changelog_entry(&version, &today(), &notes);

    if options.dry_run {
        println!("Dry run, nothing will be written. Changelog entry:\n");
        print!("{}", entry);
        return Ok(());
    }

    if !confirm(&format!("Ready to release version {}?", version))? {
        println!("Release aborted.");
        return Ok(());
    }

    bump_manifest(&mut doc, &version)?;
    fs::write(MANIFEST, doc.to_string())?;
    println!("Updated {} to {}", MANIFEST, version);

    prepend_changelog(Path::new(CHANGELOG), &entry)?;
    println!("Updated {}", CHANGELOG);

    // Refresh Cargo.lock so it carries the new version
    let status = Command::new("cargo").arg("check").status()?;
    if !status.success() {
        return Err("Failed to update Cargo.lock".into());
    }

    run_shell(
        &format!("git add {} Cargo.lock {}", MANIFEST, CHANGELOG),
        "Failed to stage release files",
    )?;
    run_shell(
        &format!("git commit -m \"Release {}\"", version),
        "Failed to commit release",
    )?;
    run_shell(
        &format!("git tag -a v{} -m \"Version {}\"", version, version),
        "Failed to create tag",
    )?;

    if confirm("Push commits and tags?")? {
        run_shell("git push", "Failed to push commits")?;
        run_shell("git push --tags", "Failed to push tags")?;
    }

    if confirm("Publish to crates.io?")? {
        let status = Command::new("cargo").arg("publish").status()?;
        if !status.success() {
            return Err("Failed to publish to crates.io".into());
        }
    } else {
        println!("Skipping crates.io publishing.");
    }

    println!("Released version {}", version);
    Ok(())
}
