use std::cell::Cell;
use std::ops::BitOr;

use crate::binding::{Binding, Slot};
use crate::error::{ConfigError, OptionLabel};

pub const FLAG_PREFIX: char = '-';

/// Necessity and arity of an option. Combine with `|`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ArityFlags(u8);

impl ArityFlags {
    pub const NONE: Self = ArityFlags(0);
    pub const HAS_DEFAULT: Self = ArityFlags(1);
    pub const ACCEPTS_MULTIPLE_ARGS: Self = ArityFlags(1 << 1);
    pub const REQUIRES_ARG: Self = ArityFlags(1 << 2);
    pub const ACCEPTS_ARG: Self = ArityFlags(1 << 3);
    pub const NECESSARY: Self = ArityFlags(1 << 4);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
    pub const fn union(self, other: Self) -> Self {
        ArityFlags(self.0 | other.0)
    }
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for ArityFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ValueType {
    Int,
    Float,
    #[default]
    String,
    Bool,
}

/// A standalone option, once given, lets the program run without the
/// necessity and dependency checks (think `-h`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Standalone {
    Standalone,
    #[default]
    NotStandalone,
}

/// Declarative description of one option, turned into an [`Opt`] by
/// [`crate::Program::add_options`].
#[derive(Debug, Clone)]
pub struct OptSpec {
    short: char,
    long: String,
    description: String,
    standalone: Standalone,
    flags: ArityFlags,
    value_type: ValueType,
    dependencies: Vec<char>,
    binding: Binding,
    length: Option<Slot<usize>>,
}

impl OptSpec {
    pub fn new(short: char, long: &str, description: &str) -> Self {
        OptSpec {
            short,
            long: long.to_owned(),
            description: description.to_owned(),
            standalone: Standalone::default(),
            flags: ArityFlags::NONE,
            value_type: ValueType::default(),
            dependencies: vec![],
            binding: Binding::None,
            length: None,
        }
    }

    pub fn flags(mut self, flags: ArityFlags) -> Self {
        self.flags = flags;
        self
    }
    pub fn standalone(mut self) -> Self {
        self.standalone = Standalone::Standalone;
        self
    }
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Colon separated short names, e.g. `"a:b"`.
    pub fn depends_on(self, ids: &str) -> Self {
        self.depends_on_ids(ids.split(':').filter_map(|id| id.chars().next()))
    }
    pub fn depends_on_ids(mut self, ids: impl IntoIterator<Item = char>) -> Self {
        self.dependencies.extend(ids);
        self
    }

    fn bind(mut self, value_type: ValueType, binding: Binding) -> Self {
        self.value_type = value_type;
        self.binding = binding;
        self
    }
    pub fn int(self, slot: Slot<i64>) -> Self {
        self.bind(ValueType::Int, Binding::Int(slot))
    }
    pub fn float(self, slot: Slot<f64>) -> Self {
        self.bind(ValueType::Float, Binding::Float(slot))
    }
    pub fn string(self, slot: Slot<String>) -> Self {
        self.bind(ValueType::String, Binding::Str(slot))
    }
    pub fn bool(self, slot: Slot<bool>) -> Self {
        self.bind(ValueType::Bool, Binding::Bool(slot))
    }
    pub fn ints(self, slot: Slot<Vec<i64>>, length: Slot<usize>) -> Self {
        self.bind(ValueType::Int, Binding::Ints(slot)).length(length)
    }
    pub fn floats(self, slot: Slot<Vec<f64>>, length: Slot<usize>) -> Self {
        self.bind(ValueType::Float, Binding::Floats(slot)).length(length)
    }
    pub fn strings(self, slot: Slot<Vec<String>>, length: Slot<usize>) -> Self {
        self.bind(ValueType::String, Binding::Strs(slot)).length(length)
    }
    pub fn length(mut self, length: Slot<usize>) -> Self {
        self.length = Some(length);
        self
    }
}

#[derive(Debug)]
pub struct Opt {
    short: char,
    long: String,
    description: String,
    standalone: Standalone,
    flags: ArityFlags,
    value_type: ValueType,
    dependencies: Vec<char>,
    binding: Binding,
    length: Option<Slot<usize>>,
    given: Cell<bool>,
}

impl Opt {
    /// Checks everything about a single spec that doesn't need its siblings.
    pub(crate) fn from_spec(spec: OptSpec) -> Result<Self, ConfigError> {
        if spec.short == FLAG_PREFIX {
            return Err(ConfigError::InvalidShortId(spec.short));
        }
        let accepts = spec.flags.contains(ArityFlags::ACCEPTS_ARG);
        if !accepts
            && (spec.flags.contains(ArityFlags::REQUIRES_ARG)
                || spec.flags.contains(ArityFlags::ACCEPTS_MULTIPLE_ARGS))
        {
            return Err(ConfigError::ArgumentNotAccepted(spec.short));
        }
        let multiple = spec.flags.contains(ArityFlags::ACCEPTS_MULTIPLE_ARGS);
        if !spec.binding.fits(spec.value_type, multiple) {
            return Err(ConfigError::BindingMismatch(spec.short));
        }

        Ok(Opt {
            short: spec.short,
            long: spec.long,
            description: spec.description,
            standalone: spec.standalone,
            flags: spec.flags,
            value_type: spec.value_type,
            dependencies: spec.dependencies,
            binding: spec.binding,
            length: spec.length,
            given: Cell::new(false),
        })
    }

    pub fn short(&self) -> char {
        self.short
    }
    pub fn long(&self) -> &str {
        &self.long
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn flags(&self) -> ArityFlags {
        self.flags
    }
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
    pub fn dependencies(&self) -> &[char] {
        &self.dependencies
    }
    pub fn binding(&self) -> &Binding {
        &self.binding
    }
    pub fn length(&self) -> Option<&Slot<usize>> {
        self.length.as_ref()
    }
    pub fn was_given(&self) -> bool {
        self.given.get()
    }
    pub fn label(&self) -> OptionLabel {
        OptionLabel::new(self.short, &self.long)
    }

    pub fn is_standalone(&self) -> bool {
        self.standalone == Standalone::Standalone
    }
    pub fn is_necessary(&self) -> bool {
        self.flags.contains(ArityFlags::NECESSARY)
    }
    pub fn accepts_arg(&self) -> bool {
        self.flags.contains(ArityFlags::ACCEPTS_ARG)
    }
    pub fn requires_arg(&self) -> bool {
        self.flags.contains(ArityFlags::REQUIRES_ARG)
    }
    pub fn accepts_multiple(&self) -> bool {
        self.flags.contains(ArityFlags::ACCEPTS_MULTIPLE_ARGS)
    }

    pub(crate) fn set_given(&self, given: bool) {
        self.given.set(given);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_flags() {
        let flags = ArityFlags::NECESSARY | ArityFlags::ACCEPTS_ARG | ArityFlags::REQUIRES_ARG;
        assert_eq!(flags.bits(), 28);
        assert!(flags.contains(ArityFlags::ACCEPTS_ARG | ArityFlags::REQUIRES_ARG));
        assert!(!flags.contains(ArityFlags::ACCEPTS_MULTIPLE_ARGS));
        assert!(flags.contains(ArityFlags::NONE));
    }

    #[test]
    fn test_depends_on() {
        let spec = OptSpec::new('c', "gamma", "").depends_on("a:b");
        assert_eq!(spec.dependencies, vec!['a', 'b']);
        let spec = OptSpec::new('c', "gamma", "").depends_on("");
        assert!(spec.dependencies.is_empty());
    }

    #[test]
    fn test_from_spec() {
        let opt = Opt::from_spec(
            OptSpec::new('n', "name", "who")
                .flags(ArityFlags::ACCEPTS_ARG | ArityFlags::REQUIRES_ARG)
                .string(Slot::default()),
        )
        .unwrap();
        assert_eq!(opt.value_type(), ValueType::String);
        assert!(opt.requires_arg());
        assert!(!opt.was_given());
        assert!(!opt.is_standalone());
    }

    #[test]
    fn test_invalid_spec() {
        use ConfigError::*;

        let err = Opt::from_spec(OptSpec::new('r', "req", "").flags(ArityFlags::REQUIRES_ARG));
        assert_eq!(err.unwrap_err(), ArgumentNotAccepted('r'));

        let err = Opt::from_spec(
            OptSpec::new('i', "ints", "")
                .flags(ArityFlags::ACCEPTS_ARG)
                .ints(Slot::default(), Slot::default()),
        );
        assert_eq!(err.unwrap_err(), BindingMismatch('i'));

        let err = Opt::from_spec(OptSpec::new('-', "dash", ""));
        assert_eq!(err.unwrap_err(), InvalidShortId('-'));
    }
}
