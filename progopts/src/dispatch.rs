use crate::Result;
use crate::binder;
use crate::config::Config;
use crate::context::ParseContext;
use crate::error::Error;
use crate::parsed_flag::ParsedFlag;
use crate::program::Program;
use crate::validate;

impl Program {
    pub fn parse_and_run(&self, args: &[String]) -> Result {
        self.parse_and_run_with(args, &Config::default())
    }

    /// Parses `args` (with `args[0]` the invocation name) against this
    /// program. A leading non-flag token selects a child, which then parses
    /// the remaining tokens as its own invocation. Otherwise the options are
    /// bound and validated, and the entry point runs.
    pub fn parse_and_run_with(&self, args: &[String], config: &Config) -> Result {
        let Some(first) = args.get(1) else {
            return Err(Error::NoArguments {
                usage: self.usage(),
            });
        };

        if let ParsedFlag::NotFlag = ParsedFlag::new(first) {
            let Some(child) = self.child(first) else {
                return Err(Error::UnknownSubprogram(first.clone()));
            };
            log::debug!("{}: dispatching to subprogram {}", self.name(), child.name());
            return child.parse_and_run_with(&args[1..], config);
        }

        self.parse_options(args, config)?;
        validate::check(self)?;

        match self.entry() {
            Some(entry) => entry(self, args),
            None => log::debug!("{}: no entry point registered", self.name()),
        }
        Ok(())
    }

    fn parse_options(&self, args: &[String], config: &Config) -> Result {
        for opt in self.options() {
            opt.set_given(false);
        }
        let mut ctx = ParseContext::new(self, args);
        while ctx.next_option()?.is_some() {
            binder::bind_current(&ctx, config)?;
        }
        Ok(())
    }

    pub fn run(&self, args: &[String]) {
        self.run_with(args, &Config::default())
    }

    /// Command line front end: on failure, prints the diagnostics to
    /// standard error and exits with the configured status.
    pub fn run_with(&self, args: &[String], config: &Config) {
        if let Err(err) = self.parse_and_run_with(args, config) {
            log::debug!("{}: parse failed: {:?}", self.name(), err);
            if let Err(io_err) = err.print(&mut std::io::stderr()) {
                log::warn!("failed to write diagnostics: {}", io_err);
            }
            std::process::exit(config.get_exit_code());
        }
    }
}
