//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{OutfitError, Result};

use super::Prompt;

/// Convert dialoguer errors to OutfitError.
fn map_dialoguer_err(e: dialoguer::Error) -> OutfitError {
    OutfitError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask the operator a yes/no question on the terminal.
pub fn confirm_user(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialoguer_errors_become_io_errors() {
        let err = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "closed",
        ));
        assert!(matches!(map_dialoguer_err(err), OutfitError::Io(_)));
    }
}
