use std::path::PathBuf;

use thiserror::Error;

/// One line typed into the console, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// With a query, same as `Search`.
    List(Option<String>),
    /// An empty query clears the filter.
    Search(String),
    Select(Vec<usize>),
    Delete(Vec<usize>),
    Edit { index: usize, text: String },
    Clear,
    Export(PathBuf),
    Pause,
    Resume,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{0}` needs at least one entry number")]
    MissingIndex(&'static str),
    #[error("`{0}` is not an entry number")]
    InvalidIndex(String),
    #[error("`export` needs a file path")]
    MissingPath,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandParseError::Empty),
            "list" | "ls" => {
                let query = rest.trim_end_matches(['\r', '\n']);
                Ok(Self::List((!query.is_empty()).then(|| query.to_string())))
            }
            "search" | "find" => Ok(Self::Search(rest.trim_end_matches(['\r', '\n']).to_string())),
            "select" | "copy" => parse_indices("select", rest).map(Self::Select),
            "delete" | "rm" => parse_indices("delete", rest).map(Self::Delete),
            "edit" => parse_edit(rest),
            "clear" => Ok(Self::Clear),
            "export" => {
                let path = rest.trim();
                if path.is_empty() {
                    Err(CommandParseError::MissingPath)
                } else {
                    Ok(Self::Export(PathBuf::from(path)))
                }
            }
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

/// Entry numbers are 1-based, separated by commas or whitespace.
fn parse_indices(verb: &'static str, input: &str) -> Result<Vec<usize>, CommandParseError> {
    let mut indices = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        indices.push(parse_index(token)?);
    }
    if indices.is_empty() {
        return Err(CommandParseError::MissingIndex(verb));
    }
    Ok(indices)
}

fn parse_index(token: &str) -> Result<usize, CommandParseError> {
    match token.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(CommandParseError::InvalidIndex(token.to_string())),
    }
}

fn parse_edit(input: &str) -> Result<ConsoleCommand, CommandParseError> {
    let input = input.trim_start();
    let (index, text) = match input.split_once(char::is_whitespace) {
        Some((index, text)) => (index, text),
        None => (input, ""),
    };
    if index.is_empty() {
        return Err(CommandParseError::MissingIndex("edit"));
    }
    Ok(ConsoleCommand::Edit {
        index: parse_index(index)?,
        text: text.trim_end_matches(['\r', '\n']).to_string(),
    })
}
