use crate::Result;
use crate::error::Error;
use crate::option::Opt;
use crate::parsed_flag::ParsedFlag;
use crate::program::Program;

/// Scratch state of one parse pass over one program node. Every call to
/// `parse_and_run` builds its own, so recursive dispatch never shares it.
pub(crate) struct ParseContext<'p, 'a> {
    program: &'p Program,
    args: &'a [String],
    idx: usize,
    values: Vec<&'a str>,
    current: Option<&'p Opt>,
}

impl<'p, 'a> ParseContext<'p, 'a> {
    pub fn new(program: &'p Program, args: &'a [String]) -> Self {
        Self {
            program,
            args,
            idx: 1, // args[0] is the invocation name
            values: vec![],
            current: None,
        }
    }

    /// Reads the flag at the current position and collects every value token
    /// after it. Returns `None` once the arguments are exhausted.
    pub fn next_option(&mut self) -> Result<Option<&'p Opt>> {
        self.values.clear();
        self.current = None;

        let (program, args) = (self.program, self.args);
        let Some(arg) = args.get(self.idx) else {
            return Ok(None);
        };
        let opt = match ParsedFlag::new(arg) {
            ParsedFlag::Short { body, rest } => {
                if !rest.is_empty() {
                    log::warn!("ignoring {:?} after option '-{}'", rest, body);
                }
                program
                    .option(body)
                    .ok_or_else(|| Error::UnknownOption(format!("-{}", body)))?
            }
            ParsedFlag::SingleDash | ParsedFlag::NotFlag => {
                return Err(Error::UnknownOption(arg.clone()));
            }
        };
        self.idx += 1;

        while let Some(arg) = args.get(self.idx) {
            if ParsedFlag::new(arg).is_flag() {
                break;
            }
            self.values.push(arg);
            self.idx += 1;
        }

        log::debug!("option '-{}' collected {:?}", opt.short(), self.values);
        self.current = Some(opt);
        Ok(Some(opt))
    }

    pub fn values(&self) -> &[&'a str] {
        &self.values
    }

    pub fn current(&self) -> Option<&'p Opt> {
        self.current
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::option::{ArityFlags, OptSpec};

    fn args(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_owned).collect()
    }

    fn program() -> Program {
        let mut prog = Program::new("p", "");
        prog.add_options([
            OptSpec::new('a', "alpha", "").flags(ArityFlags::ACCEPTS_ARG),
            OptSpec::new('b', "beta", ""),
        ])
        .unwrap();
        prog
    }

    #[test]
    fn test_empty_ctx() {
        let prog = program();
        let args = args("p");
        let mut ctx = ParseContext::new(&prog, &args);
        assert!(ctx.next_option().unwrap().is_none());
        assert!(ctx.current().is_none());
        assert!(ctx.values().is_empty());
    }

    #[test]
    fn test_collect_values() {
        let prog = program();
        let args = args("p -a x y -b -a z");
        let mut ctx = ParseContext::new(&prog, &args);

        assert_eq!(ctx.next_option().unwrap().unwrap().short(), 'a');
        assert_eq!(ctx.values(), ["x", "y"]);

        assert_eq!(ctx.next_option().unwrap().unwrap().short(), 'b');
        assert!(ctx.values().is_empty());

        assert_eq!(ctx.next_option().unwrap().unwrap().short(), 'a');
        assert_eq!(ctx.values(), ["z"]);
        assert_eq!(ctx.current().unwrap().short(), 'a');

        assert!(ctx.next_option().unwrap().is_none());
        assert!(ctx.current().is_none());
    }

    #[test]
    fn test_lone_dash_stops_collection() {
        let prog = program();
        let args = args("p -a x - y");
        let mut ctx = ParseContext::new(&prog, &args);
        ctx.next_option().unwrap();
        assert_eq!(ctx.values(), ["x"]);
        assert_eq!(
            ctx.next_option().unwrap_err(),
            Error::UnknownOption("-".to_owned())
        );
    }

    #[test]
    fn test_unknown_option() {
        let prog = program();
        let args = args("p -z 1");
        let mut ctx = ParseContext::new(&prog, &args);
        assert_eq!(
            ctx.next_option().unwrap_err(),
            Error::UnknownOption("-z".to_owned())
        );
    }
}
