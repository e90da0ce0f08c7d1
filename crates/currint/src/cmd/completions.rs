//! Shell completion generation shared by every command.

use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Shells that completions can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellType {
    /// Bash
    Bash,
    /// Zsh
    Zsh,
    /// Fish
    Fish,
    /// `PowerShell`
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl From<ShellType> for Shell {
    fn from(shell: ShellType) -> Self {
        match shell {
            ShellType::Bash => Self::Bash,
            ShellType::Zsh => Self::Zsh,
            ShellType::Fish => Self::Fish,
            ShellType::PowerShell => Self::PowerShell,
            ShellType::Elvish => Self::Elvish,
        }
    }
}

/// Write completions for the command `C` to stdout.
pub fn generate_completions<C: CommandFactory>(shell: ShellType, bin_name: &str) {
    write_completions::<C>(shell, bin_name, &mut io::stdout());
}

/// Write completions for the command `C` to `out`.
pub fn write_completions<C: CommandFactory>(shell: ShellType, bin_name: &str, out: &mut dyn Write) {
    let mut cmd = C::command();
    generate(Shell::from(shell), &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_names() {
        assert_eq!(
            ShellType::from_str("powershell", false).unwrap(),
            ShellType::PowerShell
        );
        assert!(ShellType::from_str("tcsh", false).is_err());
    }

    #[test]
    fn test_bash_completions_mention_binary() {
        let mut out = Vec::new();
        write_completions::<crate::cmd::format_cmd::Args>(
            ShellType::Bash,
            "currint-format",
            &mut out,
        );
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("currint-format"));
        assert!(script.contains("--major"));
    }
}
