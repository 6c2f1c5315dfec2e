use crate::option::FLAG_PREFIX;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ParsedFlag<'a> {
    SingleDash,
    Short {
        body: char,
        // characters after the short name, ignored by the parser
        rest: &'a str,
    },
    NotFlag,
}

impl<'a> ParsedFlag<'a> {
    pub fn new(s: &'a str) -> Self {
        let Some(flag_part) = s.strip_prefix(FLAG_PREFIX) else {
            return Self::NotFlag;
        };
        let mut chars = flag_part.chars();
        match chars.next() {
            None => Self::SingleDash,
            Some(body) => Self::Short {
                body,
                rest: chars.as_str(),
            },
        }
    }

    /// Anything starting with the prefix ends value collection.
    pub fn is_flag(&self) -> bool {
        !matches!(self, Self::NotFlag)
    }
}
