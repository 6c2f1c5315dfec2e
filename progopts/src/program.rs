use std::fmt;

use crate::error::ConfigError;
use crate::option::{Opt, OptSpec};

pub type EntryPoint = Box<dyn Fn(&Program, &[String])>;

/// Boxes a closure as an [`EntryPoint`], letting the compiler infer its
/// argument types.
pub fn entry_point<F>(f: F) -> EntryPoint
where
    F: Fn(&Program, &[String]) + 'static,
{
    Box::new(f)
}

/// A program or subprogram: its options, its children, and what to run
/// once its own arguments parse.
pub struct Program {
    name: String,
    description: String,
    options: Vec<Opt>,
    children: Vec<Program>,
    // ancestor names, root first
    lineage: Vec<String>,
    entry_point: Option<EntryPoint>,
}

impl Program {
    pub fn new(name: &str, description: &str) -> Self {
        Program {
            name: name.to_owned(),
            description: description.to_owned(),
            options: vec![],
            children: vec![],
            lineage: vec![],
            entry_point: None,
        }
    }

    /// Registers options in declaration order. Dependencies may point at
    /// any option of this program, including ones declared later in the
    /// same call. On error nothing is added.
    ///
    /// Short names are assumed unique; duplicates are not detected.
    pub fn add_options(
        &mut self,
        specs: impl IntoIterator<Item = OptSpec>,
    ) -> Result<(), ConfigError> {
        let new_opts = specs
            .into_iter()
            .map(Opt::from_spec)
            .collect::<Result<Vec<_>, _>>()?;

        for opt in new_opts.iter() {
            for &dependency in opt.dependencies() {
                let known = self
                    .options
                    .iter()
                    .chain(new_opts.iter())
                    .any(|o| o.short() == dependency);
                if !known {
                    return Err(ConfigError::UnknownDependency {
                        option: opt.short(),
                        dependency,
                    });
                }
            }
        }

        log::debug!("{}: registered {} option(s)", self.name, new_opts.len());
        self.options.extend(new_opts);
        Ok(())
    }

    /// Appends one child per `(name, description, entry_point)`, in order.
    pub fn attach_children<'a>(
        &mut self,
        children: impl IntoIterator<Item = (&'a str, &'a str, EntryPoint)>,
    ) {
        for (name, description, entry) in children {
            self.add_child(name, description).entry_point = Some(entry);
        }
    }

    /// Appends a child without an entry point and returns it.
    pub fn add_child(&mut self, name: &str, description: &str) -> &mut Program {
        self.attach_program(Program::new(name, description))
    }

    /// Attaches an already built program (e.g. one imported from clap) as
    /// the last child.
    pub fn attach_program(&mut self, mut child: Program) -> &mut Program {
        let mut lineage = self.lineage.clone();
        lineage.push(self.name.clone());
        child.set_lineage(lineage);
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    fn set_lineage(&mut self, lineage: Vec<String>) {
        for child in self.children.iter_mut() {
            let mut below = lineage.clone();
            below.push(self.name.clone());
            child.set_lineage(below);
        }
        self.lineage = lineage;
    }

    pub fn set_entry_point<F>(&mut self, f: F)
    where
        F: Fn(&Program, &[String]) + 'static,
    {
        self.entry_point = Some(Box::new(f));
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn options(&self) -> &[Opt] {
        &self.options
    }
    pub fn children(&self) -> &[Program] {
        &self.children
    }
    pub fn lineage(&self) -> &[String] {
        &self.lineage
    }
    pub fn parent_name(&self) -> Option<&str> {
        self.lineage.last().map(String::as_str)
    }
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn option(&self, short: char) -> Option<&Opt> {
        self.options.iter().find(|o| o.short() == short)
    }
    /// First child with exactly this name.
    pub fn child(&self, name: &str) -> Option<&Program> {
        self.children.iter().find(|c| c.name == name)
    }
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Program> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    pub(crate) fn entry(&self) -> Option<&EntryPoint> {
        self.entry_point.as_ref()
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("options", &self.options)
            .field("children", &self.children)
            .field("lineage", &self.lineage)
            .field("has_entry_point", &self.entry_point.is_some())
            .finish()
    }
}
