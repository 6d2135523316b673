/// What a raw command-line token is, judged from the token alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Positional argument: `file`, `-`, or anything shorter than two chars.
    NonOption,
    /// `-x` or a cluster such as `-abc`.
    ShortGroup,
    /// Exactly `--`.
    Terminator,
    /// `--name` or `--name=value`.
    LongOption,
}

impl TokenKind {
    pub fn classify(arg: &str) -> TokenKind {
        if arg.chars().count() < 2 || !arg.starts_with('-') {
            return TokenKind::NonOption;
        }
        if !arg.starts_with("--") {
            return TokenKind::ShortGroup;
        }
        if arg == "--" {
            return TokenKind::Terminator;
        }
        TokenKind::LongOption
    }
}
