use crate::Result;
use crate::error::{ConfigError, DependencyViolation, Error};
use crate::program::Program;

/// Post-parse checks for one program node. Skipped entirely once any
/// standalone option has been given.
pub(crate) fn check(program: &Program) -> Result {
    if let Some(opt) = program
        .options()
        .iter()
        .find(|o| o.is_standalone() && o.was_given())
    {
        log::debug!(
            "standalone option '-{}' given, skipping validation",
            opt.short()
        );
        return Ok(());
    }
    check_necessity(program)?;
    check_dependencies(program)
}

fn check_necessity(program: &Program) -> Result {
    let missing: Vec<_> = program
        .options()
        .iter()
        .filter(|o| o.is_necessary() && !o.was_given())
        .map(|o| o.label())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingRequiredOption(missing))
    }
}

/// Every option with dependencies needs them given, whether or not the
/// option itself was.
fn check_dependencies(program: &Program) -> Result {
    let mut violations = vec![];
    for opt in program.options() {
        let mut missing = vec![];
        for &short in opt.dependencies() {
            let dependency = program.option(short).ok_or(ConfigError::UnknownDependency {
                option: opt.short(),
                dependency: short,
            })?;
            if !dependency.was_given() {
                missing.push(dependency.label());
            }
        }
        if !missing.is_empty() {
            violations.push(DependencyViolation {
                option: opt.label(),
                missing,
            });
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::UnmetDependency(violations))
    }
}
