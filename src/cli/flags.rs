use clap::Parser;

/// Generate random passwords.
#[derive(Debug, Default, Parser)]
#[command(name = "pwgen", version)]
pub struct CliFlags {
    /// Don't include numbers in the generated passwords.
    #[arg(short = '0', long)]
    pub no_numerals: bool,

    /// Print the generated passwords one per line.
    #[arg(short = '1', long, conflicts_with = "single_line")]
    pub one_line: bool,

    /// Print all generated passwords on a single line.
    #[arg(long)]
    pub single_line: bool,

    /// Don't include capital letters in the generated passwords.
    #[arg(short = 'A', long)]
    pub no_capitalize: bool,

    /// Don't use characters that could be confused when printed, such as
    /// 'l' and '1', or '0' and 'O'.
    #[arg(short = 'B', long)]
    pub ambiguous: bool,

    /// Include at least one special character in the password.
    #[arg(short = 'y', long)]
    pub symbols: bool,

    /// Include at least one number in the password. This is the default.
    #[arg(short = 'n', long)]
    pub numerals: bool,

    /// Don't use vowels or numbers that might be mistaken for vowels.
    #[arg(short = 'v', long)]
    pub no_vowels: bool,

    /// Don't use the specified characters in passwords.
    #[arg(short = 'r', long, value_name = "CHARS")]
    pub remove_chars: Option<String>,

    /// Generate completely random, hard-to-memorize passwords from
    /// operating-system entropy.
    #[arg(short = 's', long)]
    pub secure: bool,

    /// Seed the generator with the SHA-1 of FILE, followed by the optional
    /// SEED text. The same file, seed and options always give the same
    /// passwords, so keep the file away from attackers.
    #[arg(short = 'H', long = "sha1", value_name = "FILE[#SEED]")]
    pub sha1: Option<String>,

    /// Screen width used to lay passwords out in columns.
    #[arg(short = 'w', long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Log diagnostics to stderr.
    #[arg(long)]
    pub verbose: bool,

    /// Password length.
    pub length: Option<usize>,

    /// Number of passwords.
    pub count: Option<usize>,
}
