//! # Command Parsing
//!
//! The shell's command language, parsed as a pure function over one input
//! line so it is testable without any I/O.
//!
//! ## Command Language
//! ```text
//! product <text>        set the product field
//! description <text>    set the description field
//! quantity <text>       set the quantity field (digits only will pass)
//! code <text>           set the EAN/UPC code field
//! add                   insert a record from the current fields
//! select <id>           select a displayed row by id
//! update                overwrite the selected row with the current fields
//! delete                delete the selected row
//! clear                 clear the fields and the search term
//! search <term>         display rows containing the term
//! search                re-run the stored search term
//! all                   display every row
//! help                  show the command list
//! exit                  close the database and quit (alias: quit)
//! ```
//!
//! Keywords are case-insensitive; field values and search terms are kept
//! exactly as typed (after trimming the surrounding whitespace). A setter
//! with no value clears that field.

use thiserror::Error;

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetProduct(String),
    SetDescription(String),
    SetQuantity(String),
    SetCode(String),
    /// `Some(term)` sets the search term first; `None` re-uses the stored one.
    Search(Option<String>),
    ShowAll,
    Select(i64),
    Add,
    Update,
    Delete,
    Clear,
    Help,
    Exit,
}

/// A line that could not be parsed into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line into a command.
///
/// ## Example
/// ```
/// use stockdesk_terminal::commands::{parse, Command};
///
/// assert_eq!(
///     parse("product Blue Pen").unwrap(),
///     Command::SetProduct("Blue Pen".to_string())
/// );
/// assert_eq!(parse("select 12").unwrap(), Command::Select(12));
/// ```
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword.to_ascii_lowercase().as_str() {
        "product" => Ok(Command::SetProduct(rest.to_string())),
        "description" => Ok(Command::SetDescription(rest.to_string())),
        "quantity" => Ok(Command::SetQuantity(rest.to_string())),
        "code" => Ok(Command::SetCode(rest.to_string())),
        "search" => Ok(Command::Search(if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        })),
        "all" => Ok(Command::ShowAll),
        "select" => rest
            .parse::<i64>()
            .map(Command::Select)
            .map_err(|_| ParseError::Usage("select <id>")),
        "add" => Ok(Command::Add),
        "update" => Ok(Command::Update),
        "delete" => Ok(Command::Delete),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Printed by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  product <text>       Set the product field
  description <text>   Set the description field
  quantity <text>      Set the quantity field
  code <text>          Set the EAN/UPC code field
  add                  Insert a record from the current fields
  select <id>          Select a displayed row by id
  update               Overwrite the selected row with the current fields
  delete               Delete the selected row
  clear                Clear the fields and the search term
  search <term>        Display rows containing the term
  all                  Display every row
  help                 Show this help
  exit                 Close the database and quit";

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_keep_multi_word_values() {
        assert_eq!(
            parse("product Blue Pen 0.7 mm").unwrap(),
            Command::SetProduct("Blue Pen 0.7 mm".to_string())
        );
        assert_eq!(
            parse("description  spaced   out  ").unwrap(),
            Command::SetDescription("spaced   out".to_string())
        );
        assert_eq!(
            parse("quantity 42").unwrap(),
            Command::SetQuantity("42".to_string())
        );
        assert_eq!(
            parse("code 123456789012").unwrap(),
            Command::SetCode("123456789012".to_string())
        );
    }

    #[test]
    fn test_setter_without_value_clears_the_field() {
        assert_eq!(parse("product").unwrap(), Command::SetProduct(String::new()));
        assert_eq!(parse("code").unwrap(), Command::SetCode(String::new()));
    }

    #[test]
    fn test_keywords_are_case_insensitive_values_are_not() {
        assert_eq!(parse("ADD").unwrap(), Command::Add);
        assert_eq!(
            parse("Product Laptop").unwrap(),
            Command::SetProduct("Laptop".to_string())
        );
        assert_eq!(
            parse("SEARCH Laptop").unwrap(),
            Command::Search(Some("Laptop".to_string()))
        );
    }

    #[test]
    fn test_search_with_and_without_term() {
        assert_eq!(
            parse("search lap").unwrap(),
            Command::Search(Some("lap".to_string()))
        );
        assert_eq!(parse("search").unwrap(), Command::Search(None));
    }

    #[test]
    fn test_select_takes_a_numeric_id() {
        assert_eq!(parse("select 12").unwrap(), Command::Select(12));
        assert_eq!(
            parse("select twelve").unwrap_err(),
            ParseError::Usage("select <id>")
        );
        assert_eq!(
            parse("select").unwrap_err(),
            ParseError::Usage("select <id>")
        );
    }

    #[test]
    fn test_bare_commands() {
        assert_eq!(parse("add").unwrap(), Command::Add);
        assert_eq!(parse("update").unwrap(), Command::Update);
        assert_eq!(parse("delete").unwrap(), Command::Delete);
        assert_eq!(parse("clear").unwrap(), Command::Clear);
        assert_eq!(parse("all").unwrap(), Command::ShowAll);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("exit").unwrap(), Command::Exit);
        assert_eq!(parse("quit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse("  add  ").unwrap(), Command::Add);
        assert_eq!(parse("\tselect 3").unwrap(), Command::Select(3));
    }

    #[test]
    fn test_unknown_commands_are_rejected() {
        let err = parse("frobnicate the stock").unwrap_err();
        assert_eq!(err, ParseError::Unknown("frobnicate".to_string()));
        assert!(err.to_string().contains("help"));
    }
}
