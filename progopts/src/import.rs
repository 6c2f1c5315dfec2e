//! Builds a [`Program`] tree from a clap command description.
//!
//! Only what the parser can express survives: arguments need a short name,
//! positionals are dropped, and every value is kept as a string. Values are
//! read back through [`Program::option`] and [`crate::Opt::binding`].

use clap::{Arg, ArgAction, Command};

use crate::binding::Slot;
use crate::error::ConfigError;
use crate::option::{ArityFlags, OptSpec};
use crate::program::Program;

pub fn from_clap(cmd: &mut Command) -> Result<Program, ConfigError> {
    cmd.build();

    let mut program = Program::new(cmd.get_name(), &about(cmd));
    import_recur(&mut program, cmd)?;
    Ok(program)
}

fn about(cmd: &Command) -> String {
    cmd.get_about().map(|s| s.to_string()).unwrap_or_default()
}

fn import_recur(program: &mut Program, cmd: &Command) -> Result<(), ConfigError> {
    let specs: Vec<_> = cmd.get_arguments().filter_map(to_spec).collect();
    program.add_options(specs)?;

    for sub in cmd.get_subcommands() {
        let child = program.add_child(sub.get_name(), &about(sub));
        import_recur(child, sub)?;
    }
    Ok(())
}

fn to_spec(arg: &Arg) -> Option<OptSpec> {
    if arg.is_positional() {
        log::debug!("skipping positional argument {}", arg.get_id());
        return None;
    }
    let Some(short) = arg.get_short() else {
        log::debug!("skipping argument {} without a short name", arg.get_id());
        return None;
    };

    let long = arg
        .get_long()
        .map(str::to_owned)
        .unwrap_or_else(|| arg.get_id().to_string());
    let help = arg.get_help().map(|s| s.to_string()).unwrap_or_default();
    let mut spec = OptSpec::new(short, &long, &help);

    let mut flags = ArityFlags::NONE;
    if arg.is_required_set() {
        flags = flags | ArityFlags::NECESSARY;
    }
    let (takes_values, min, max) = match arg.get_num_args() {
        Some(range) => (range.takes_values(), range.min_values(), range.max_values()),
        None => (false, 0, 0),
    };
    spec = if !takes_values {
        spec.bool(Slot::default())
    } else {
        flags = flags | ArityFlags::ACCEPTS_ARG;
        if min > 0 {
            flags = flags | ArityFlags::REQUIRES_ARG;
        }
        if max > 1 {
            flags = flags | ArityFlags::ACCEPTS_MULTIPLE_ARGS;
            spec.strings(Slot::default(), Slot::default())
        } else {
            spec.string(Slot::default())
        }
    };

    if matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    ) {
        spec = spec.standalone();
    }
    Some(spec.flags(flags))
}
