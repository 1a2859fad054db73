//! Shell completion generation for navsh
//!
//! This module provides functionality to generate shell completion scripts
//! for bash, zsh and fish, with directory completion for the DIR argument.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::CliArgs;
use crate::error::{NavshError, Result};

/// Generate shell completion script
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;

    match shell {
        Shell::Bash => generate_bash_completion(),
        Shell::Zsh => generate_zsh_completion(),
        Shell::Fish => generate_fish_completion(),
        _ => Err(NavshError::Generic(
            "Unsupported shell. Supported shells: bash, zsh, fish".to_string(),
        )),
    }
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(NavshError::Generic(format!(
            "Unsupported shell: {}. Supported shells: bash, zsh, fish",
            shell_name
        ))),
    }
}

/// Generate Bash completion with directory completion for DIR
fn generate_bash_completion() -> Result<()> {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(Shell::Bash, &mut cmd, "navsh", &mut buffer);

    let basic_completion = String::from_utf8_lossy(&buffer);

    // Complete the positional DIR argument with directories only
    let custom_completion = format!(
        r#"{}

# Enhance the completion function
_navsh_enhanced() {{
    local cur prev words cword
    _init_completion || return

    # Complete the positional argument with directories
    if [[ "$cur" != -* && "$prev" != "-c" && "$prev" != "--config" && "$prev" != "--format" ]]; then
        _filedir -d
        return 0
    fi

    # Fall back to default completion
    _navsh "$@"
}}

# Replace the completion function
complete -F _navsh_enhanced navsh
"#,
        basic_completion
    );

    print!("{}", custom_completion);
    Ok(())
}

/// Generate Zsh completion with directory completion for DIR
fn generate_zsh_completion() -> Result<()> {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(Shell::Zsh, &mut cmd, "navsh", &mut buffer);

    let basic_completion = String::from_utf8_lossy(&buffer);

    // Complete the positional DIR argument with directories only
    let custom_completion = format!(
        r#"{}

# Get original navsh completion function
_navsh_original() {{
    _navsh "$@"
}}

# Enhanced completion function
_navsh_enhanced() {{
    local curcontext="$curcontext" state line
    typeset -A opt_args

    # Complete the positional argument with directories
    if [[ ${{words[CURRENT]}} != -* ]]; then
        _files -/
        return 0
    fi

    # Otherwise use original completion
    _navsh_original "$@"
}}

# Replace the completion function
compdef _navsh_enhanced navsh
"#,
        basic_completion
    );

    print!("{}", custom_completion);
    Ok(())
}

/// Generate Fish completion with directory completion for DIR
fn generate_fish_completion() -> Result<()> {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(Shell::Fish, &mut cmd, "navsh", &mut buffer);

    let basic_completion = String::from_utf8_lossy(&buffer);

    // Complete the positional DIR argument with directories only
    let custom_completion = format!(
        r#"{}

# Complete the positional argument with directories
complete -c navsh -f -a "(__fish_complete_directories)" -d "Start directory"
"#,
        basic_completion
    );

    print!("{}", custom_completion);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("fish"), Ok(Shell::Fish)));
        assert!(parse_shell("invalid").is_err());
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert!(matches!(parse_shell("BASH"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("Zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("FiSh"), Ok(Shell::Fish)));
    }
}
