// SPDX-License-Identifier: Apache-2.0

use crate::term::Term;

use nom::bytes::complete::tag_no_case;

type NomError<'a> = nom::Err<nom::error::Error<&'a str>>;

/// A recognized metadata line from the window right below a term heading.
#[derive(Debug, PartialEq, Eq)]
pub enum Directive {
    Alternates(Vec<String>),
    Tags(Vec<String>),
    Links(Vec<String>),
}

/// Ordered prefix table; first match wins.
const DIRECTIVE_PREFIXES: [(&str, fn(Vec<String>) -> Directive); 3] = [
    ("also known as:", Directive::Alternates),
    ("tags:", Directive::Tags),
    ("see also:", Directive::Links),
];

impl Directive {
    /// Writes the directive into the term. A repeated directive overwrites
    /// the earlier value, it does not merge.
    pub fn apply(self, term: &mut Term) {
        match self {
            Directive::Alternates(values) => term.alternates = values,
            Directive::Tags(values) => term.tags = values,
            Directive::Links(values) => term.links = values,
        }
    }
}

/// Tries to interpret a line as a metadata directive.
///
/// The prefix match is case-insensitive, the values keep their case. Lines
/// matching none of the known prefixes are not metadata and end the term's
/// metadata phase at the call site.
pub fn classify(line: &str) -> Option<Directive> {
    let line = line.trim_start();
    for (prefix, directive) in DIRECTIVE_PREFIXES {
        let parsed: Result<(&str, &str), NomError<'_>> = tag_no_case(prefix)(line);
        if let Ok((value, _)) = parsed {
            return Some(directive(split_list(value)));
        }
    }

    None
}

/// Splits a comma-separated value list, trimming items and dropping empties.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
