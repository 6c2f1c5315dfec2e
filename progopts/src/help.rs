use std::fmt::Write as _;
use std::io::{Result as IoResult, Write};

use crate::program::Program;

impl Program {
    /// The usage block shown when a program is invoked without arguments.
    pub fn usage(&self) -> String {
        let mut out = String::from("Usage: ");
        for ancestor in self.lineage() {
            out.push_str(ancestor);
            out.push(' ');
        }
        out.push_str(self.name());
        if self.lineage().is_empty() {
            out += " [subprog] [option]\n\n";
        } else {
            out += " [option]\n\n";
        }

        if !self.children().is_empty() {
            out += "Available subprograms:\n";
            for child in self.children() {
                let _ = writeln!(out, "\t{}\t{}", child.name(), child.description());
            }
            out.push('\n');
        }

        out += "Available options:\n";
        for opt in self.options() {
            let _ = writeln!(out, "\t-{}, {}\t{}", opt.short(), opt.long(), opt.description());
        }
        out
    }

    pub fn print_help(&self, w: &mut impl Write) -> IoResult<()> {
        w.write_all(self.usage().as_bytes())
    }
}
