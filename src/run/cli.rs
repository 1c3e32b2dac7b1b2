use crate::doc::Lang;
use crate::run::RunOptions;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::fmt::{Display, Formatter};

/// The CLI's switches. Parse with clap, then convert into [`RunOptions`] via `into()`.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about, long_about = None)]
pub struct CliOptions {
    /// Id of the block to edit.
    #[arg(long)]
    pub(crate) block: String,

    /// Which language's sequence to address.
    #[arg(long, value_enum, default_value_t = LangChoice::En)]
    pub(crate) lang: LangChoice,

    /// The selected plain text, exactly as the user sees it. The first occurrence in the
    /// sequence's flattened text is the one that gets styled.
    #[arg(long)]
    pub(crate) selection: Option<String>,

    /// Color value for the color and bg commands. An empty string clears the attribute.
    #[arg(long)]
    pub(crate) color: Option<String>,

    /// The command to run.
    #[arg(value_enum)]
    pub(crate) command: Command,

    /// The JSON document to edit, by path. A path of "-" (or no path) reads standard input.
    #[arg()]
    pub(crate) file: Option<String>,
}

impl CliOptions {
    /// Validation beyond what clap's derive can express. Prints clap-style errors and returns
    /// whether the options are usable.
    pub fn extra_validation(&self) -> bool {
        let mut ok = true;
        if self.command.needs_selection() && self.selection.is_none() {
            print_error(ErrorKind::MissingRequiredArgument, "--selection is required unless the command is 'plain'");
            ok = false;
        }
        if self.color.is_some() && !matches!(self.command, Command::Color | Command::Bg) {
            print_error(ErrorKind::ArgumentConflict, "--color only applies to the 'color' and 'bg' commands");
            ok = false;
        }
        ok
    }
}

fn print_error(kind: ErrorKind, message: &str) {
    let _ = CliOptions::command().error(kind, message).print();
}

impl From<CliOptions> for RunOptions {
    fn from(cli: CliOptions) -> Self {
        RunOptions {
            block: cli.block,
            lang: cli.lang.into(),
            command: cli.command,
            selection: cli.selection,
            color: cli.color,
            file: cli.file,
        }
    }
}

/// What to do with the addressed sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Command {
    /// Toggle bold over the selection.
    Bold,
    /// Toggle italic over the selection.
    Italic,
    /// Toggle underline over the selection.
    Underline,
    /// Set (or, with an empty --color, clear) the text color over the selection.
    Color,
    /// Set (or, with an empty --color, clear) the background color over the selection.
    Bg,
    /// Remove all styling from the selection.
    Clear,
    /// Print the sequence's plain text instead of editing.
    Plain,
}

impl Command {
    pub(crate) fn needs_selection(self) -> bool {
        !matches!(self, Command::Plain)
    }
}

/// CLI-facing mirror of [`Lang`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum LangChoice {
    #[default]
    En,
    Zh,
}

impl From<LangChoice> for Lang {
    fn from(value: LangChoice) -> Self {
        match value {
            LangChoice::En => Lang::En,
            LangChoice::Zh => Lang::Zh,
        }
    }
}

impl Display for LangChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let self_str = match self {
            LangChoice::En => "en",
            LangChoice::Zh => "zh",
        };
        f.write_str(self_str)
    }
}
