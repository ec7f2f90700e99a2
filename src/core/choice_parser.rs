//! Parsing of what the user types at the selection prompt.
//!
//! [`ChoiceParser`] turns one line of input into a [`Choice`] against the
//! dropdowns the selector currently shows.
//!
//! # Supported Formats
//! - **Index**: `2` picks the second option of the trailing level
//! - **Option text**: `paper` picks that option of the trailing level
//! - **Level edit**: `1:vanilla` or `1:2` changes level 1; `2:` clears level 2 onward
//! - **Back**: `b` / `back` clears the last chosen level
//! - **Quit**: `q` / `quit`
//!
//! Levels are 1-based on input and 0-based in the returned [`Choice`]. When an
//! option's text is itself a number, an exact text match wins over the index.

use crate::core::error::{Result, SelectorError};
use crate::core::selector::HierarchicalSelector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Set `level` to `value`; an empty value clears it.
    Change { level: usize, value: String },
    Quit,
}

pub struct ChoiceParser;

impl ChoiceParser {
    pub fn parse(input: &str, selector: &HierarchicalSelector) -> Result<Choice> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::EmptyChoice);
        }

        match input.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Ok(Choice::Quit),
            "b" | "back" => {
                let depth = selector.path().len();
                if depth == 0 {
                    return Err(SelectorError::invalid_choice(input));
                }
                return Ok(Choice::Change {
                    level: depth - 1,
                    value: String::new(),
                });
            }
            _ => {}
        }

        let visible = selector.visible_levels();

        if let Some((level_part, value_part)) = input.split_once(':') {
            let level: usize = level_part
                .trim()
                .parse()
                .map_err(|_| SelectorError::invalid_choice(input))?;
            if level == 0 {
                return Err(SelectorError::ZeroChoice);
            }
            if !visible.contains(&(level - 1)) {
                return Err(SelectorError::choice_out_of_range(level, visible.len()));
            }

            let value_part = value_part.trim();
            let value = if value_part.is_empty() {
                String::new()
            } else {
                Self::resolve_option(value_part, selector.level_options(level - 1))?
            };
            return Ok(Choice::Change {
                level: level - 1,
                value,
            });
        }

        let trailing = selector.path().len();
        if !visible.contains(&trailing) {
            return Err(SelectorError::invalid_choice(input));
        }
        let value = Self::resolve_option(input, selector.level_options(trailing))?;
        Ok(Choice::Change {
            level: trailing,
            value,
        })
    }

    /// Map a token to one of `options`, by exact text first, then by 1-based index.
    pub fn resolve_option(token: &str, options: &[String]) -> Result<String> {
        if options.is_empty() {
            return Err(SelectorError::NoOptionsAvailable);
        }

        if let Some(option) = options.iter().find(|o| o.as_str() == token) {
            return Ok(option.clone());
        }

        match token.parse::<usize>() {
            Ok(0) => Err(SelectorError::ZeroChoice),
            Ok(n) if n > options.len() => Err(SelectorError::choice_out_of_range(n, options.len())),
            Ok(n) => Ok(options[n - 1].clone()),
            Err(_) => Err(SelectorError::unknown_option(token)),
        }
    }
}
