use crate::doc::{Document, Inline, Lang};
use crate::output::inlines_to_plain_string;
use crate::run::cli::Command;
use crate::style;
use derive_builder::Builder;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::{io, mem};

/// The run's overall possible error.
#[derive(Debug)]
pub enum Error {
    /// The document failed to parse (or re-serialize) as JSON.
    Json(serde_json::Error),

    /// Couldn't read the input.
    FileReadError(Input, io::Error),

    /// Couldn't write the output.
    Output(io::Error),

    /// The document holds no block with the requested id.
    BlockNotFound(String),

    /// The block exists, but its kind carries no inline content (equations, code listings).
    NoLocalizedField(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Json(err) => {
                writeln!(f, "JSON document error:")?;
                writeln!(f, "{err}")
            }
            Error::FileReadError(input, err) => writeln!(f, "{err} while reading {input}"),
            Error::Output(err) => writeln!(f, "{err} while writing output"),
            Error::BlockNotFound(id) => writeln!(f, "no block with id {id:?}"),
            Error::NoLocalizedField(id) => writeln!(f, "block {id:?} has no editable text field"),
        }
    }
}

/// Stdin or an input file by path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Input {
    Stdin,
    FilePath(String),
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => f.write_str("stdin"),
            Input::FilePath(file) => write!(f, "file {file:?}"),
        }
    }
}

/// Options analogous to the CLI's switches, for running in-process.
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
pub struct RunOptions {
    /// Id of the block to edit.
    pub block: String,

    /// Which language's sequence to address.
    #[builder(default)]
    pub lang: Lang,

    /// What to do with the sequence.
    pub command: Command,

    /// The selected plain text. Required for every command except [`Command::Plain`]; `None`
    /// behaves like an empty selection, which every style operation treats as a no-op.
    #[builder(default)]
    pub selection: Option<String>,

    /// Color value for [`Command::Color`] and [`Command::Bg`]; `None` or empty clears.
    #[builder(default)]
    pub color: Option<String>,

    /// Input path; `None` or `"-"` reads stdin.
    #[builder(default)]
    pub file: Option<String>,
}

/// A simple facade for handling I/O.
///
/// This trait lets you do "I/O-y stuff" like mocking out stdin or reading files. The [`run`]
/// method uses it.
pub trait OsFacade {
    /// Read stdin (or your mock of it) to a `String`.
    fn read_stdin(&self) -> io::Result<String>;

    /// Read a file path (or your mock of one) to a `String`.
    fn read_file(&self, path: &str) -> io::Result<String>;

    /// Get a writer for stdout (or your mock of it).
    fn stdout(&mut self) -> impl Write;

    /// Handle an error.
    fn write_error(&mut self, err: Error);
}

/// The full workflow: read a JSON document, apply the style command to the addressed block's
/// sequence, and write the updated document to stdout.
///
/// Returns whether the selection was found (always `true` for [`Command::Plain`] on an existing
/// block). A miss still writes the document back, unchanged. Errors go through
/// [`OsFacade::write_error`] and yield `false`.
pub fn run(options: &RunOptions, os: &mut impl OsFacade) -> bool {
    match run_or_error(options, os) {
        Ok(found) => found,
        Err(err) => {
            os.write_error(err);
            false
        }
    }
}

fn run_or_error(options: &RunOptions, os: &mut impl OsFacade) -> Result<bool, Error> {
    let contents = read_input(options, os)?;
    let mut doc: Document = serde_json::from_str(&contents).map_err(Error::Json)?;

    let found;
    {
        let block = doc
            .block_mut(&options.block)
            .ok_or_else(|| Error::BlockNotFound(options.block.clone()))?;
        let localized = block
            .localized_mut()
            .ok_or_else(|| Error::NoLocalizedField(options.block.clone()))?;
        let sequence = localized.get_mut(options.lang);

        if options.command == Command::Plain {
            let mut out = os.stdout();
            writeln!(out, "{}", inlines_to_plain_string(sequence)).map_err(Error::Output)?;
            return Ok(true);
        }

        let selection = options.selection.as_deref().unwrap_or("");
        found = style::selection_exists(sequence, selection);
        let content = mem::take(sequence);
        *sequence = apply_command(options, content, selection);
    }

    let mut out = os.stdout();
    serde_json::to_writer_pretty(&mut out, &doc).map_err(Error::Json)?;
    writeln!(out).map_err(Error::Output)?;
    Ok(found)
}

fn apply_command(options: &RunOptions, content: Vec<Inline>, selection: &str) -> Vec<Inline> {
    let color = options.color.as_deref().unwrap_or("");
    match options.command {
        Command::Bold => style::toggle_bold(content, selection),
        Command::Italic => style::toggle_italic(content, selection),
        Command::Underline => style::toggle_underline(content, selection),
        Command::Color => style::apply_text_color(content, selection, color),
        Command::Bg => style::apply_background_color(content, selection, color),
        Command::Clear => style::clear_all_styles(content, selection),
        Command::Plain => unreachable!("plain is handled before editing"),
    }
}

fn read_input(options: &RunOptions, os: &impl OsFacade) -> Result<String, Error> {
    match options.file.as_deref() {
        None | Some("-") => os
            .read_stdin()
            .map_err(|err| Error::FileReadError(Input::Stdin, err)),
        Some(path) => os
            .read_file(path)
            .map_err(|err| Error::FileReadError(Input::FilePath(path.to_string()), err)),
    }
}
