use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use leet::{transform, Category, Filter, SubstitutionTable, TransformError, CATEGORY_ORDER};

const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Version output: program version plus the author line.
const VERSION_TEXT: &str = concat!(env!("CARGO_PKG_VERSION"), "\n", env!("CARGO_PKG_AUTHORS"));

/// leet - an alpha to "l337" speak translator
///
/// Rewrites the letters of each STRING into randomly chosen lookalike
/// tokens, useful for generating strong passwords and such.
#[derive(Parser, Debug)]
#[command(name = "leet")]
#[command(version = VERSION_TEXT)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Use only alpha tokens
    #[arg(short, long, group = "filter")]
    alpha: bool,

    /// Use only numerical tokens
    #[arg(short, long, group = "filter")]
    numeric: bool,

    /// Use only symbols/punctuation
    #[arg(short, long, group = "filter")]
    symbols: bool,

    /// Use only tokens with combinations
    #[arg(short, long, group = "filter")]
    misc: bool,

    /// Show table of l337 characters
    #[arg(short, long)]
    table: bool,

    /// Dump the table as JSON instead of the aligned layout
    #[arg(long, requires = "table")]
    json: bool,

    /// Show this help message
    #[arg(short = '?', short_alias = 'h', long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Show version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Strings to convert
    #[arg(value_name = "STRING", required_unless_present = "table")]
    strings: Vec<String>,
}

impl Cli {
    fn filter(&self) -> Filter {
        if self.alpha {
            Filter::Only(Category::Alpha)
        } else if self.numeric {
            Filter::Only(Category::Numeric)
        } else if self.symbols {
            Filter::Only(Category::Symbols)
        } else if self.misc {
            Filter::Only(Category::Misc)
        } else {
            Filter::All
        }
    }
}

/// Render the full table, one block per letter with the token columns
/// aligned across the four category labels.
fn render_table(table: &SubstitutionTable) -> String {
    let mut out = String::new();
    for entry in table.entries() {
        out.push_str(&format!("{}:\n", entry.letter.to_ascii_uppercase()));
        for category in CATEGORY_ORDER {
            let label = format!("{}:", category.label());
            let tokens = entry.tokens(category);
            if tokens.is_empty() {
                out.push_str(&format!("  {label}\n"));
            } else {
                out.push_str(&format!("  {label:<9}{}\n", tokens.join("  ")));
            }
        }
    }
    out
}

fn handle_table(table: &SubstitutionTable, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(table.entries())
            .context("Failed to serialize substitution table")?;
        println!("{rendered}");
    } else {
        print!("{}", render_table(table));
    }
    Ok(())
}

fn handle_strings(strings: &[String], filter: Filter) {
    for input in strings {
        match transform(input, filter) {
            Ok(output) => println!("{input}: {output}"),
            Err(TransformError::EmptyConversion) => {
                eprintln!("{PROGRAM}: error: could not convert '{input}'");
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.table {
        return handle_table(SubstitutionTable::builtin(), cli.json);
    }

    handle_strings(&cli.strings, cli.filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parses_plain_strings() {
        let cli = Cli::parse_from(["leet", "hello", "world"]);
        assert_eq!(cli.strings, vec!["hello", "world"]);
        assert_eq!(cli.filter(), Filter::All);
        assert!(!cli.table);
    }

    #[test]
    fn test_cli_parses_each_filter_flag() {
        for (flag, category) in [
            ("--alpha", Category::Alpha),
            ("--numeric", Category::Numeric),
            ("--symbols", Category::Symbols),
            ("--misc", Category::Misc),
        ] {
            let cli = Cli::parse_from(["leet", flag, "x"]);
            assert_eq!(cli.filter(), Filter::Only(category));
        }

        let cli = Cli::parse_from(["leet", "-n", "x"]);
        assert_eq!(cli.filter(), Filter::Only(Category::Numeric));
    }

    #[test]
    fn test_cli_rejects_combined_filter_flags() {
        assert!(Cli::try_parse_from(["leet", "-a", "-n", "x"]).is_err());
        assert!(Cli::try_parse_from(["leet", "--symbols", "--misc", "x"]).is_err());
    }

    #[test]
    fn test_cli_requires_strings_unless_table() {
        assert!(Cli::try_parse_from(["leet"]).is_err());
        assert!(Cli::try_parse_from(["leet", "-t"]).is_ok());
        assert!(Cli::try_parse_from(["leet", "--table"]).is_ok());
    }

    #[test]
    fn test_cli_json_requires_table() {
        assert!(Cli::try_parse_from(["leet", "--json", "x"]).is_err());
        assert!(Cli::try_parse_from(["leet", "-t", "--json"]).is_ok());
    }

    #[test]
    fn test_cli_help_and_version_flags() {
        for flag in ["-?", "-h", "--help"] {
            let err = Cli::try_parse_from(["leet", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["leet", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_render_table_covers_all_letters() {
        let rendered = render_table(SubstitutionTable::builtin());

        let headings: Vec<String> = rendered
            .lines()
            .filter(|line| !line.starts_with("  "))
            .map(str::to_string)
            .collect();
        let expected: Vec<String> = ('A'..='Z').map(|letter| format!("{letter}:")).collect();
        assert_eq!(headings, expected);

        for label in ["ALPHA", "NUMERIC", "SYMBOLS", "MISC"] {
            assert_eq!(rendered.matches(label).count(), 26);
        }
    }

    #[test]
    fn test_render_table_golden_blocks() {
        let rendered = render_table(SubstitutionTable::builtin());

        let a_block = "A:\n  ALPHA:   aye  ci  Z\n  NUMERIC: 4\n  SYMBOLS: @  /-\\  /\\  ^\n  MISC:\n";
        assert!(rendered.starts_with(a_block));

        let b_block = "B:\n  ALPHA:\n  NUMERIC: 8  6  13\n  SYMBOLS:\n  MISC:    |3  ]3\n";
        assert!(rendered.contains(b_block));
    }

    #[test]
    fn test_table_serializes_to_json() {
        let entries = SubstitutionTable::builtin().entries();
        let json = serde_json::to_value(entries).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 26);
        assert_eq!(json[0]["letter"], "a");
        assert_eq!(json[0]["numeric"][0], "4");
        assert_eq!(json[25]["misc"][0], "7_");
    }
}
