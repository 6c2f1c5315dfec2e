/// Knobs for a parse pass.
///
/// ```
/// let config = progopts::Config::default().strict_numbers(true).exit_code(2);
/// assert!(config.is_strict_numbers());
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    strict_numbers: bool,
    exit_code: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict_numbers: false,
            exit_code: 1,
        }
    }
}

impl Config {
    /// When off (the default), numeric literals that pass the digit check
    /// but don't parse cleanly are coerced leniently: `"1.5"` as an INT is
    /// 1, `"."` is 0. When on they fail with `InvalidNumericLiteral`.
    pub fn strict_numbers(mut self, strict: bool) -> Self {
        self.strict_numbers = strict;
        self
    }

    /// Process status used by [`crate::Program::run_with`] on failure.
    pub fn exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    pub fn is_strict_numbers(&self) -> bool {
        self.strict_numbers
    }
    pub fn get_exit_code(&self) -> i32 {
        self.exit_code
    }
}
