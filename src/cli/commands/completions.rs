//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::StudyFocusError;

const BIN: &str = "studyfocus";

/// Print a completion script, or instructions for installing one.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, StudyFocusError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, StudyFocusError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN, &mut buf);
    String::from_utf8(buf).map_err(|e| StudyFocusError::InvalidInput(format!("UTF-8 error: {e}")))
}

/// Installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => format!(
            "# Add to ~/.bashrc:\nsource <({BIN} completions bash)\n"
        ),
        Shell::Zsh => format!(
            "# Save to your fpath:\n{BIN} completions zsh > ~/.zsh/completions/_{BIN}\n\
             # Then in ~/.zshrc (before compinit):\nfpath=(~/.zsh/completions $fpath)\n"
        ),
        Shell::Fish => format!(
            "# Save to the fish completions directory:\n\
             {BIN} completions fish > ~/.config/fish/completions/{BIN}.fish\n"
        ),
        Shell::PowerShell => format!(
            "# Add to your PowerShell profile ($PROFILE):\n\
             {BIN} completions powershell | Out-String | Invoke-Expression\n"
        ),
        Shell::Elvish => format!(
            "# Save to the elvish lib directory:\n{BIN} completions elvish > ~/.elvish/lib/{BIN}.elv\n\
             # Then add to ~/.elvish/rc.elv:\nuse {BIN}\n"
        ),
        _ => format!("# Run '{BIN} completions {shell}' and load the output in your shell\n"),
    }
}
