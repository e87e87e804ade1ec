//! Shell completion generation and installation

use clap::{Command, CommandFactory};
use clap_complete::{Generator, Shell, generate};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::cli::Cli;

/// Binary name completions are generated for
pub const BIN_NAME: &str = "humanize";

/// Write completions for `generator` to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(generator, app, BIN_NAME, &mut std::io::stdout());
}

/// Install the completion script for `shell` into the user's completion directory
pub fn install_completion(shell: Shell) -> Result<String, String> {
    let completion_dir = completion_directory(shell)?;
    let completion_path = completion_dir.join(completion_filename(shell));
    let script = completion_script(shell)?;

    fs::write(&completion_path, script).map_err(|e| {
        format!(
            "Failed to write completion file to {}: {e}",
            completion_path.display()
        )
    })?;

    Ok(format!(
        "✅ Shell completion installed successfully!\n\n{}",
        setup_instructions(shell, &completion_path)
    ))
}

/// First candidate whose parent exists, created if needed; else the first candidate
fn first_usable_dir(candidates: &[PathBuf]) -> Result<PathBuf, String> {
    let chosen = candidates
        .iter()
        .find(|path| path.parent().is_some_and(Path::exists))
        .or_else(|| candidates.first())
        .cloned()
        .ok_or_else(|| "No completion directory candidates".to_string())?;

    fs::create_dir_all(&chosen)
        .map_err(|e| format!("Failed to create directory {}: {e}", chosen.display()))?;
    Ok(chosen)
}

fn completion_directory(shell: Shell) -> Result<PathBuf, String> {
    let home = PathBuf::from(
        std::env::var("HOME").map_err(|_| "HOME environment variable not set".to_string())?,
    );

    match shell {
        Shell::Bash => first_usable_dir(&[
            home.join(".local/share/bash-completion/completions"),
            home.join(".bash_completion.d"),
        ]),
        Shell::Zsh => first_usable_dir(&[
            home.join(".local/share/zsh/site-functions"),
            home.join(".zsh/completions"),
        ]),
        Shell::Fish => first_usable_dir(&[home.join(".config/fish/completions")]),
        Shell::PowerShell | Shell::Elvish => Err(format!(
            "{shell} completion installation not supported. Use '{BIN_NAME} completion-generate {shell}' and add the output to your shell profile manually."
        )),
        _ => Err(format!("Unsupported shell: {shell:?}")),
    }
}

fn completion_filename(shell: Shell) -> String {
    match shell {
        Shell::Zsh => format!("_{BIN_NAME}"),
        Shell::Fish => format!("{BIN_NAME}.fish"),
        _ => BIN_NAME.to_string(),
    }
}

fn completion_script(shell: Shell) -> Result<String, String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| format!("Failed to generate completion script: {e}"))
}

fn setup_instructions(shell: Shell, completion_path: &Path) -> String {
    let location = format!("Completion installed to: {}", completion_path.display());
    match shell {
        Shell::Bash => format!(
            "{location}\n\n\
            To enable bash completions, add this to your ~/.bashrc:\n\
            [[ -r {path} ]] && source {path}\n\n\
            Then restart your shell or run: source ~/.bashrc",
            path = completion_path.display()
        ),
        Shell::Zsh => format!(
            "{location}\n\n\
            To enable zsh completions, add this to your ~/.zshrc:\n\
            fpath=({dir} $fpath)\n\
            autoload -U compinit && compinit\n\n\
            You may also need to clear the completion cache: rm -f ~/.zcompdump*",
            dir = completion_path
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        ),
        Shell::Fish => format!(
            "{location}\n\n\
            Fish loads completions from ~/.config/fish/completions/ automatically.\n\
            Restart your shell to pick it up."
        ),
        _ => location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_completion_filename() {
        assert_eq!(completion_filename(Shell::Bash), "humanize");
        assert_eq!(completion_filename(Shell::Zsh), "_humanize");
        assert_eq!(completion_filename(Shell::Fish), "humanize.fish");
        assert_eq!(completion_filename(Shell::Elvish), "humanize");
    }

    #[test]
    fn test_completion_script_mentions_binary_and_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let script = completion_script(shell).unwrap();
            assert!(script.contains(BIN_NAME), "{shell} script lacks binary name");
        }
        let bash = completion_script(Shell::Bash).unwrap();
        assert!(bash.contains("completion-generate"));
        assert!(bash.contains("--interactive"));
    }

    #[test]
    fn test_setup_instructions() {
        let path = Path::new("/tmp/zsh/_humanize");
        let zsh = setup_instructions(Shell::Zsh, path);
        assert!(zsh.contains("fpath=(/tmp/zsh $fpath)"));
        assert!(zsh.contains("~/.zshrc"));

        let bash = setup_instructions(Shell::Bash, Path::new("/tmp/humanize"));
        assert!(bash.contains("source /tmp/humanize"));

        let fish = setup_instructions(Shell::Fish, Path::new("/tmp/humanize.fish"));
        assert!(fish.contains("~/.config/fish/completions"));
    }

    #[test]
    #[serial]
    fn test_install_completion_into_temp_home() {
        let original_home = std::env::var("HOME").ok();
        let home = TempDir::new().unwrap();
        unsafe {
            std::env::set_var("HOME", home.path());
        }

        let message = install_completion(Shell::Fish).unwrap();
        let installed = home.path().join(".config/fish/completions/humanize.fish");
        assert!(installed.exists());
        assert!(message.contains("installed successfully"));

        let err = install_completion(Shell::PowerShell).unwrap_err();
        assert!(err.contains("not supported"));

        unsafe {
            match original_home {
                Some(value) => std::env::set_var("HOME", value),
                None => std::env::remove_var("HOME"),
            }
        }
    }
}
