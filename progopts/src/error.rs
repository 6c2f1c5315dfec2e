use std::fmt;
use std::io::{Result as IoResult, Write};

/// How an option is named in diagnostics: `'-n', 'name'`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OptionLabel {
    pub short: char,
    pub long: String,
}
impl OptionLabel {
    pub fn new(short: char, long: &str) -> Self {
        OptionLabel {
            short,
            long: long.to_owned(),
        }
    }
}
impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'-{}', '{}'", self.short, self.long)
    }
}

/// One option whose declared dependencies were not given.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DependencyViolation {
    pub option: OptionLabel,
    pub missing: Vec<OptionLabel>,
}

/// Mistakes in the program description itself, caught while registering.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    UnknownDependency { option: char, dependency: char },
    BindingMismatch(char),
    ArgumentNotAccepted(char), // REQUIRES_ARG or ACCEPTS_MULTIPLE_ARGS without ACCEPTS_ARG
    InvalidShortId(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownDependency { option, dependency } => write!(
                f,
                "Option '-{}' depends on undeclared option '-{}'.",
                option, dependency
            ),
            ConfigError::BindingMismatch(short) => write!(
                f,
                "Option '-{}' is bound to storage of the wrong type or multiplicity.",
                short
            ),
            ConfigError::ArgumentNotAccepted(short) => write!(
                f,
                "Option '-{}' declares argument requirements but does not accept arguments.",
                short
            ),
            ConfigError::InvalidShortId(short) => {
                write!(f, "'{}' cannot be used as a short option name.", short)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    NoArguments { usage: String },
    UnknownSubprogram(String),
    UnknownOption(String),
    MissingRequiredArgument(OptionLabel),
    TooManyArguments(OptionLabel),
    UnexpectedArgument(OptionLabel),
    InvalidNumericLiteral { option: OptionLabel, value: String },
    MissingRequiredOption(Vec<OptionLabel>),
    UnmetDependency(Vec<DependencyViolation>),
    Config(ConfigError),
}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        Error::Config(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Usage,
    Option,
    Subprogram,
    Config,
}
impl Category {
    pub fn tag(self) -> &'static str {
        match self {
            Category::Usage => "",
            Category::Option => "[option error] ",
            Category::Subprogram => "[subprogram error] ",
            Category::Config => "[config error] ",
        }
    }
}

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Error::NoArguments { .. } => Category::Usage,
            Error::UnknownSubprogram(_) => Category::Subprogram,
            Error::Config(_) => Category::Config,
            _ => Category::Option,
        }
    }

    /// The diagnostic lines for this error, without category tags.
    /// Accumulated kinds yield one line per violation.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Error::NoArguments { usage } => usage.lines().map(str::to_owned).collect(),
            Error::UnknownSubprogram(name) => vec![format!("Invalid subprogram '{}'.", name)],
            Error::UnknownOption(token) => vec![format!("Invalid option '{}'.", token)],
            Error::MissingRequiredArgument(opt) => {
                vec![format!("Option {} requires argument, not given.", opt)]
            }
            Error::TooManyArguments(opt) => vec![format!(
                "Option {} accepts at most one argument, multiple given.",
                opt
            )],
            Error::UnexpectedArgument(opt) => {
                vec![format!("Option {} accepts no argument but given.", opt)]
            }
            Error::InvalidNumericLiteral { option, value } => vec![format!(
                "Argument '{}' of option {} is not a valid number.",
                value, option
            )],
            Error::MissingRequiredOption(opts) => opts
                .iter()
                .map(|opt| format!("Option {} (and its arguments) must be given.", opt))
                .collect(),
            Error::UnmetDependency(violations) => violations
                .iter()
                .map(|v| {
                    let missing: Vec<_> = v.missing.iter().map(|m| m.to_string()).collect();
                    format!("Option {} needs option(s) {}.", v.option, missing.join(", "))
                })
                .collect(),
            Error::Config(err) => vec![err.to_string()],
        }
    }

    /// Writes every diagnostic line, prefixed by the category tag.
    pub fn print(&self, w: &mut impl Write) -> IoResult<()> {
        let tag = self.category().tag();
        for line in self.lines() {
            writeln!(w, "{}{}", tag, line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_accumulated_lines() {
        let err = Error::MissingRequiredOption(vec![
            OptionLabel::new('n', "name"),
            OptionLabel::new('o', "output"),
        ]);
        assert_eq!(
            err.lines(),
            vec![
                "Option '-n', 'name' (and its arguments) must be given.",
                "Option '-o', 'output' (and its arguments) must be given.",
            ]
        );
    }

    #[test]
    fn test_dependency_line() {
        let err = Error::UnmetDependency(vec![DependencyViolation {
            option: OptionLabel::new('b', "beta"),
            missing: vec![OptionLabel::new('a', "alpha"), OptionLabel::new('c', "gamma")],
        }]);
        assert_eq!(
            err.lines(),
            vec!["Option '-b', 'beta' needs option(s) '-a', 'alpha', '-c', 'gamma'."]
        );
    }

    #[test]
    fn test_print_tags() {
        let mut out = vec![];
        Error::UnknownSubprogram("nope".to_owned())
            .print(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[subprogram error] Invalid subprogram 'nope'.\n"
        );

        let mut out = vec![];
        Error::UnknownOption("-x".to_owned()).print(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[option error] Invalid option '-x'.\n"
        );
    }

    #[test]
    fn test_config_converts() {
        let err: Error = ConfigError::BindingMismatch('q').into();
        assert_eq!(err.category(), Category::Config);
    }
}
