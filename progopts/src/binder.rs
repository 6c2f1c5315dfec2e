use crate::Result;
use crate::binding::Binding;
use crate::config::Config;
use crate::context::ParseContext;
use crate::error::Error;
use crate::option::{Opt, ValueType};

/// Runs the arity and literal checks on the option the context just read,
/// then writes its values into the bound storage.
pub(crate) fn bind_current(ctx: &ParseContext<'_, '_>, config: &Config) -> Result {
    let Some(opt) = ctx.current() else {
        return Ok(());
    };
    let values = ctx.values();
    check_arity(opt, values.len())?;
    check_literals(opt, values)?;
    assign(opt, values, config)
}

fn check_arity(opt: &Opt, count: usize) -> Result {
    if opt.accepts_arg() {
        if opt.requires_arg() && count == 0 {
            return Err(Error::MissingRequiredArgument(opt.label()));
        }
        if !opt.accepts_multiple() && count > 1 {
            return Err(Error::TooManyArguments(opt.label()));
        }
    } else if count > 0 {
        return Err(Error::UnexpectedArgument(opt.label()));
    }
    Ok(())
}

/// Non-string values may only hold decimal digits and a single '.'.
fn check_literals(opt: &Opt, values: &[&str]) -> Result {
    if opt.value_type() == ValueType::String {
        return Ok(());
    }
    for value in values {
        let digits_only = value.chars().all(|c| c.is_ascii_digit() || c == '.');
        let dots = value.matches('.').count();
        if !digits_only || dots > 1 {
            return Err(invalid(opt, value));
        }
    }
    Ok(())
}

fn invalid(opt: &Opt, value: &str) -> Error {
    Error::InvalidNumericLiteral {
        option: opt.label(),
        value: value.to_owned(),
    }
}

fn to_int(opt: &Opt, value: &str, config: &Config) -> Result<i64> {
    if config.is_strict_numbers() {
        return value.parse().map_err(|_| invalid(opt, value));
    }
    // leading digit run, anything unparsable is 0
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    Ok(value[..end].parse().unwrap_or(0))
}

fn to_float(opt: &Opt, value: &str, config: &Config) -> Result<f64> {
    match value.parse() {
        Ok(v) => Ok(v),
        Err(_) if config.is_strict_numbers() => Err(invalid(opt, value)),
        Err(_) => Ok(0.0),
    }
}

fn assign(opt: &Opt, values: &[&str], config: &Config) -> Result {
    if let Some(first) = values.first() {
        match opt.binding() {
            Binding::None => {}
            Binding::Int(slot) => slot.set(to_int(opt, first, config)?),
            Binding::Float(slot) => slot.set(to_float(opt, first, config)?),
            Binding::Str(slot) => slot.set(first.to_string()),
            Binding::Bool(slot) => slot.set(to_int(opt, first, config)? != 0),
            Binding::Ints(slot) => slot.set(
                values
                    .iter()
                    .map(|v| to_int(opt, v, config))
                    .collect::<Result<_>>()?,
            ),
            Binding::Floats(slot) => slot.set(
                values
                    .iter()
                    .map(|v| to_float(opt, v, config))
                    .collect::<Result<_>>()?,
            ),
            Binding::Strs(slot) => slot.set(values.iter().map(|v| v.to_string()).collect()),
        }
        if opt.accepts_multiple() {
            if let Some(length) = opt.length() {
                length.set(values.len());
            }
        }
    } else if let Binding::Bool(slot) = opt.binding() {
        slot.set(true);
    }

    opt.set_given(true);
    log::debug!("bound option '-{}' ({} value(s))", opt.short(), values.len());
    Ok(())
}
