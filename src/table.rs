//! Substitution table: the fixed letter-to-token dataset
//!
//! Maps each of the 26 lowercase ASCII letters to candidate replacement
//! tokens in four categories. The table is a `static` built at compile
//! time and never mutated.

use serde::Serialize;
use thiserror::Error;

/// The four token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Letter-like lookalike words ("aye", "sea")
    Alpha,
    /// Digit lookalikes ("4", "13")
    Numeric,
    /// Punctuation and symbol lookalikes ("@", "|-|")
    Symbols,
    /// Multi-symbol combination lookalikes ("|3", "[]D")
    Misc,
}

/// Category order used when candidate lists are concatenated for
/// indexing, and for table dumps.
pub const CATEGORY_ORDER: [Category; 4] = [
    Category::Alpha,
    Category::Numeric,
    Category::Symbols,
    Category::Misc,
];

impl Category {
    /// Uppercase label used in table dumps.
    pub fn label(self) -> &'static str {
        match self {
            Category::Alpha => "ALPHA",
            Category::Numeric => "NUMERIC",
            Category::Symbols => "SYMBOLS",
            Category::Misc => "MISC",
        }
    }
}

/// Which categories are eligible for selection on one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// All four categories participate.
    All,
    /// Exactly one category participates.
    Only(Category),
}

impl Filter {
    /// The enabled categories, in concatenation order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        CATEGORY_ORDER
            .into_iter()
            .filter(move |&category| match self {
                Filter::All => true,
                Filter::Only(only) => category == only,
            })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The table only has entries for lowercase ASCII letters.
    #[error("no table entry for {0:?}")]
    InvalidLetter(char),
}

/// Candidate tokens for one letter.
#[derive(Debug, Serialize)]
pub struct LetterEntry {
    pub letter: char,
    alpha: &'static [&'static str],
    numeric: &'static [&'static str],
    symbols: &'static [&'static str],
    misc: &'static [&'static str],
}

impl LetterEntry {
    /// Candidate tokens in one category. May be empty.
    pub fn tokens(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Alpha => self.alpha,
            Category::Numeric => self.numeric,
            Category::Symbols => self.symbols,
            Category::Misc => self.misc,
        }
    }
}

/// The letter-to-token mapping, one entry per letter a-z.
#[derive(Debug)]
pub struct SubstitutionTable {
    entries: [LetterEntry; 26],
}

impl SubstitutionTable {
    /// The builtin dataset.
    pub fn builtin() -> &'static SubstitutionTable {
        &BUILTIN
    }

    /// All 26 entries in alphabetical order.
    pub fn entries(&self) -> &[LetterEntry] {
        &self.entries
    }

    /// Look up the entry for a lowercase ASCII letter.
    pub fn entry(&self, letter: char) -> Result<&LetterEntry, TableError> {
        if !letter.is_ascii_lowercase() {
            return Err(TableError::InvalidLetter(letter));
        }
        Ok(&self.entries[(letter as u8 - b'a') as usize])
    }

    /// Total number of candidate tokens for `letter` across the
    /// categories enabled by `filter`.
    pub fn candidate_count(&self, letter: char, filter: Filter) -> Result<usize, TableError> {
        let entry = self.entry(letter)?;
        Ok(filter
            .categories()
            .map(|category| entry.tokens(category).len())
            .sum())
    }

    /// Token at `index` into the concatenation of the candidate lists
    /// enabled by `filter`, in category order.
    ///
    /// `Ok(None)` when `index` is out of range for the letter; callers
    /// treat that as "leave the character unchanged".
    pub fn candidate_at(
        &self,
        letter: char,
        filter: Filter,
        index: usize,
    ) -> Result<Option<&'static str>, TableError> {
        let entry = self.entry(letter)?;
        let mut remaining = index;
        for category in filter.categories() {
            let tokens = entry.tokens(category);
            if remaining < tokens.len() {
                return Ok(Some(tokens[remaining]));
            }
            remaining -= tokens.len();
        }
        Ok(None)
    }
}

static BUILTIN: SubstitutionTable = SubstitutionTable {
    entries: [
        LetterEntry {
            letter: 'a',
            alpha: &["aye", "ci", "Z"],
            numeric: &["4"],
            symbols: &["@", r"/-\", r"/\", "^"],
            misc: &[],
        },
        LetterEntry {
            letter: 'b',
            alpha: &[],
            numeric: &["8", "6", "13"],
            symbols: &[],
            misc: &["|3", "]3"],
        },
        LetterEntry {
            letter: 'c',
            alpha: &["sea", "see"],
            numeric: &[],
            symbols: &["(", "<", "{"],
            misc: &[],
        },
        LetterEntry {
            letter: 'd',
            alpha: &["cl"],
            numeric: &["0"],
            symbols: &["|)", "[)", "])", "I>", "|>"],
            misc: &[],
        },
        LetterEntry {
            letter: 'e',
            alpha: &[],
            numeric: &["3"],
            symbols: &["&", "[-"],
            misc: &[],
        },
        LetterEntry {
            letter: 'f',
            alpha: &["ph"],
            numeric: &[],
            symbols: &["|=", "]=", "}", "(="],
            misc: &[],
        },
        LetterEntry {
            letter: 'g',
            alpha: &["gee", "jee", "cj"],
            numeric: &["6", "9"],
            symbols: &["&", "(_+", "(-"],
            misc: &["C-", "(y,"],
        },
        LetterEntry {
            letter: 'h',
            alpha: &["aych"],
            numeric: &[],
            symbols: &["|-|", "#", "]-[", "[-]", ")-(", "(-)", ":-:", "}{", "}-{"],
            misc: &[],
        },
        LetterEntry {
            letter: 'i',
            alpha: &["ai"],
            numeric: &["1"],
            symbols: &["!", "|"],
            misc: &["3y3"],
        },
        LetterEntry {
            letter: 'j',
            alpha: &[],
            numeric: &[],
            symbols: &["_|", "_/", "]", "</", "_)"],
            misc: &[],
        },
        LetterEntry {
            letter: 'k',
            alpha: &["X"],
            numeric: &[],
            symbols: &["|<", "|{"],
            misc: &["|X"],
        },
        LetterEntry {
            letter: 'l',
            alpha: &[],
            numeric: &["1", "7"],
            symbols: &["|_", "|"],
            misc: &["1J"],
        },
        LetterEntry {
            letter: 'm',
            alpha: &["em", "IYI", "IVI", "nn", "AA"],
            numeric: &["44"],
            symbols: &[
                r"/\/\",
                r"|\/|",
                "^^",
                r"//\\//\\",
                r"(\/)",
                r"/|\",
                "/|/|",
                r".\\",
                r"/^^\",
                "|^^|",
            ],
            misc: &["|v|", "[V]", "(V)", r"/V\"],
        },
        LetterEntry {
            letter: 'n',
            alpha: &[],
            numeric: &[],
            symbols: &[
                r"|\|",
                r"/\/",
                r"//\\//",
                r"[\]",
                r"<\>",
                r"{\}",
                "//",
                r"[]\[]",
                r"]\[",
                "~",
            ],
            misc: &[],
        },
        LetterEntry {
            letter: 'o',
            alpha: &["oh"],
            numeric: &["0"],
            symbols: &["()", "[]"],
            misc: &[],
        },
        LetterEntry {
            letter: 'p',
            alpha: &["q"],
            numeric: &["9"],
            symbols: &["|*", "|>", "|\"", "?"],
            misc: &["|o", "[]D", "|7", "|D"],
        },
        LetterEntry {
            letter: 'q',
            alpha: &["cue"],
            numeric: &["9"],
            symbols: &["(,)", "<|"],
            misc: &["0_", "0,"],
        },
        LetterEntry {
            letter: 'r',
            alpha: &["lz"],
            numeric: &["2"],
            symbols: &["|^", "|~", "|`", ".-"],
            misc: &["|2", "/2", "I2", "[z", "l2"],
        },
        LetterEntry {
            letter: 's',
            alpha: &["z", "es"],
            numeric: &["5"],
            symbols: &["$"],
            misc: &[],
        },
        LetterEntry {
            letter: 't',
            alpha: &[],
            numeric: &["7", "1"],
            symbols: &["+", "-|-", "']['"],
            misc: &[],
        },
        LetterEntry {
            letter: 'u',
            alpha: &["M"],
            numeric: &[],
            symbols: &["|_|", "(_)", "[_]", r"\_/", r"\_\", "/_/"],
            misc: &["Y3W"],
        },
        LetterEntry {
            letter: 'v',
            alpha: &[],
            numeric: &[],
            symbols: &[r"\/", r"\\//"],
            misc: &[],
        },
        LetterEntry {
            letter: 'w',
            alpha: &["vv", "VV", "UU", "uu", "JL"],
            numeric: &[],
            // First entry is a single seven-character token, not two.
            symbols: &[
                r"\/\/'//",
                r"\\'",
                r"\^/",
                r"\|/",
                r"\_|_/",
                r"\\//\\//",
                r"\_:_/",
            ],
            misc: &["(n)", r"\X/", r"\x/", "]I["],
        },
        LetterEntry {
            letter: 'x',
            alpha: &["ecks", "ex"],
            numeric: &[],
            symbols: &["%", "><", "}{", "*", ")("],
            misc: &[],
        },
        LetterEntry {
            letter: 'y',
            alpha: &["j"],
            numeric: &[],
            symbols: &["`/", "`(", "-/", "'/"],
            misc: &[],
        },
        LetterEntry {
            letter: 'z',
            alpha: &[],
            numeric: &["2", "3"],
            symbols: &["~/_", "%"],
            misc: &["7_"],
        },
    ],
};
