use clap::CommandFactory;
use progopts::import::from_clap;
use progopts::{ArityFlags, Binding, ConfigError, Error, OptSpec, Program, Slot};

mod args;

use args::Fetch;

const REQUIRED_ONE: ArityFlags = ArityFlags::NECESSARY
    .union(ArityFlags::ACCEPTS_ARG)
    .union(ArityFlags::REQUIRES_ARG);

fn greet(demo: &mut Program) -> Result<(), ConfigError> {
    let name = Slot::default();
    let times = Slot::new(1_i64);
    let loud = Slot::new(false);

    let greet = demo.add_child("greet", "say hello");
    greet.add_options([
        OptSpec::new('n', "name", "who to greet")
            .flags(REQUIRED_ONE)
            .string(name.clone()),
        OptSpec::new('t', "times", "how many times")
            .flags(ArityFlags::ACCEPTS_ARG | ArityFlags::REQUIRES_ARG | ArityFlags::HAS_DEFAULT)
            .int(times.clone()),
        OptSpec::new('l', "loud", "shout it").bool(loud.clone()),
        OptSpec::new('h', "help", "show this help").standalone(),
    ])?;
    greet.set_entry_point(move |prog, _| {
        if prog.option('h').is_some_and(|o| o.was_given()) {
            let _ = prog.print_help(&mut std::io::stdout());
            return;
        }
        let mut line = format!("Hello, {}!", name.borrow());
        if loud.get() {
            line = line.to_uppercase();
        }
        for _ in 0..times.get() {
            println!("{}", line);
        }
    });
    Ok(())
}

fn sum(demo: &mut Program) -> Result<(), ConfigError> {
    let values = Slot::default();
    let count = Slot::default();
    let scale = Slot::new(1.0);
    let precision = Slot::new(2_i64);

    let sum = demo.add_child("sum", "add numbers");
    sum.add_options([
        OptSpec::new('v', "values", "numbers to add")
            .flags(REQUIRED_ONE | ArityFlags::ACCEPTS_MULTIPLE_ARGS)
            .floats(values.clone(), count.clone()),
        OptSpec::new('s', "scale", "multiply the total")
            .flags(ArityFlags::ACCEPTS_ARG | ArityFlags::REQUIRES_ARG | ArityFlags::HAS_DEFAULT)
            .float(scale.clone()),
        OptSpec::new('p', "precision", "decimals to print")
            .flags(ArityFlags::ACCEPTS_ARG | ArityFlags::REQUIRES_ARG | ArityFlags::HAS_DEFAULT)
            .depends_on("v")
            .int(precision.clone()),
    ])?;
    sum.set_entry_point(move |_, _| {
        let total: f64 = values.borrow().iter().sum::<f64>() * scale.get();
        let precision = usize::try_from(precision.get()).unwrap_or(2);
        println!("{} value(s), total {:.*}", count.get(), precision, total);
    });
    Ok(())
}

fn fetch(demo: &mut Program) -> Result<(), ConfigError> {
    let fetch = demo.attach_program(from_clap(&mut Fetch::command())?);
    fetch.set_entry_point(|prog, _| {
        let urls = match prog.option('u').map(|o| o.binding()) {
            Some(Binding::Strs(slot)) => slot.get(),
            _ => vec![],
        };
        let out = match prog.option('o').map(|o| o.binding()) {
            Some(Binding::Str(slot)) if !slot.borrow().is_empty() => slot.get(),
            _ => ".".to_owned(),
        };
        for url in urls {
            println!("{} -> {}", url, out);
        }
    });
    Ok(())
}

fn build() -> Result<Program, ConfigError> {
    let mut demo = Program::new("demo", "progopts demo");
    demo.add_options([OptSpec::new('V', "version", "print the version").standalone()])?;
    demo.set_entry_point(|prog, _| {
        if prog.option('V').is_some_and(|o| o.was_given()) {
            println!("demo {}", env!("CARGO_PKG_VERSION"));
        }
    });
    greet(&mut demo)?;
    sum(&mut demo)?;
    fetch(&mut demo)?;
    Ok(demo)
}

fn main() {
    env_logger::init();

    let args: Vec<_> = std::env::args().collect();
    log::info!("args = {:?}", args);

    let demo = match build() {
        Ok(demo) => demo,
        Err(err) => {
            if let Err(io_err) = Error::from(err).print(&mut std::io::stderr()) {
                log::warn!("failed to write diagnostics: {}", io_err);
            }
            std::process::exit(2);
        }
    };
    demo.run(&args);
}
