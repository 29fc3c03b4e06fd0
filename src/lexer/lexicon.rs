//! Composite pattern compilation
//!
//! All token patterns are merged into a single anchored regular expression.
//! Each token pattern is wrapped in its own capture group, and the whole
//! alternation is surrounded by a skip pattern that swallows whitespace and
//! line comments, so one match yields exactly one token.

use log::debug;
use regex::{Captures, Match, Regex};
use std::sync::OnceLock;

use super::token_table::{TokenDefinition, TOKEN_DEFINITIONS};
use crate::error::LexiconError;

/// A run of whitespace or a `//` comment running to the end of the line or
/// input. No branch may match empty, or the comment branches are never tried.
const SKIP: &str = r"([ \t\n\r\f]+|//.*\r?\n|//.*$)*";

/// Characters of the whitespace branch of the skip pattern
pub const SKIP_WHITESPACE: [char; 5] = [' ', '\t', '\n', '\r', '\x0c'];

/// Groups in front of the first token group: the whole match, the leading
/// skip group and the group around the alternation
pub const LEADING_GROUPS: usize = 3;

/// The trailing skip group
pub const TRAILING_GROUPS: usize = 1;

static LEXICON: OnceLock<CompiledLexicon> = OnceLock::new();

/// The process-wide lexicon built from [`TOKEN_DEFINITIONS`]
///
/// Built on first use. The token table is fixed, so a failure to compile it
/// is a defect and aborts.
pub fn lexicon() -> &'static CompiledLexicon {
    LEXICON.get_or_init(|| {
        CompiledLexicon::compile(TOKEN_DEFINITIONS)
            .unwrap_or_else(|e| panic!("invalid token table: {}", e))
    })
}

/// Composite pattern together with the group index of every definition
#[derive(Debug)]
pub struct CompiledLexicon {
    regex: Regex,
    skip_only: Regex,
    definitions: &'static [TokenDefinition],
    match_indices: Vec<usize>,
}

impl CompiledLexicon {
    pub fn compile(definitions: &'static [TokenDefinition]) -> Result<Self, LexiconError> {
        let mut fragments = Vec::with_capacity(definitions.len());
        let mut match_indices = Vec::with_capacity(definitions.len());
        let mut groups = LEADING_GROUPS;

        for definition in definitions {
            let own_groups = Regex::new(definition.pattern)?.captures_len() - 1;
            if own_groups != definition.own_groups {
                return Err(LexiconError::GroupCountMismatch {
                    kind: definition.kind,
                    declared: definition.own_groups,
                    actual: own_groups,
                });
            }

            match_indices.push(groups);
            groups += 1 + definition.own_groups;
            fragments.push(format!("({})", definition.pattern));
        }

        let pattern = format!("^{SKIP}({}){SKIP}", fragments.join("|"));
        let regex = Regex::new(&pattern)?;

        let expected = groups + TRAILING_GROUPS;
        if regex.captures_len() != expected {
            return Err(LexiconError::TotalGroupMismatch {
                expected,
                actual: regex.captures_len(),
            });
        }

        let skip_only = Regex::new(&format!("^{SKIP}$"))?;

        debug!(
            "compiled lexicon: {} definitions, {} groups, pattern length {}",
            definitions.len(),
            regex.captures_len(),
            pattern.len()
        );

        Ok(Self {
            regex,
            skip_only,
            definitions,
            match_indices,
        })
    }

    pub fn definitions(&self) -> &[TokenDefinition] {
        self.definitions
    }

    /// Capture-group index of each definition, in declaration order
    pub fn match_indices(&self) -> &[usize] {
        &self.match_indices
    }

    /// Total number of groups in the composite pattern, group 0 included
    pub fn group_count(&self) -> usize {
        self.regex.captures_len()
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether `text` holds nothing but whitespace and comments
    pub fn is_skip_only(&self, text: &str) -> bool {
        self.skip_only.is_match(text)
    }

    /// Applies the composite pattern at the start of `text`
    pub fn find<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }

    /// First definition, in declaration order, whose group matched non-empty
    pub fn classify<'t>(
        &self,
        captures: &Captures<'t>,
    ) -> Option<(&'static TokenDefinition, Match<'t>)> {
        let definitions: &'static [TokenDefinition] = self.definitions;
        definitions
            .iter()
            .zip(&self.match_indices)
            .find_map(|(definition, &index)| {
                captures
                    .get(index)
                    .filter(|m| !m.as_str().is_empty())
                    .map(|m| (definition, m))
            })
    }
}
