//! The catalog of demos and the runner that prints them in order.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::transcript::Transcript;
use crate::{
    p1_composite, p2_flyweight, p3_template_method, p4_visitor, p5_adapter, p6_strategy,
    p7_iterator, p8_mediator,
};

/// A demo is selected by its kebab-case key, both on the command line
/// (`--only template-method`) and in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    Composite,
    Flyweight,
    #[serde(alias = "template_method")]
    #[value(alias = "template_method")]
    TemplateMethod,
    Visitor,
    Adapter,
    Strategy,
    Iterator,
    Mediator,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::Composite,
        Demo::Flyweight,
        Demo::TemplateMethod,
        Demo::Visitor,
        Demo::Adapter,
        Demo::Strategy,
        Demo::Iterator,
        Demo::Mediator,
    ];

    /// 1-based position in the catalog.
    pub fn number(self) -> usize {
        match self {
            Demo::Composite => 1,
            Demo::Flyweight => 2,
            Demo::TemplateMethod => 3,
            Demo::Visitor => 4,
            Demo::Adapter => 5,
            Demo::Strategy => 6,
            Demo::Iterator => 7,
            Demo::Mediator => 8,
        }
    }

    /// Same name the CLI and config accept.
    pub fn key(self) -> String {
        self.to_string()
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Composite => "Composite",
            Demo::Flyweight => "Flyweight",
            Demo::TemplateMethod => "Template Method",
            Demo::Visitor => "Visitor",
            Demo::Adapter => "Adapter",
            Demo::Strategy => "Strategy",
            Demo::Iterator => "Iterator",
            Demo::Mediator => "Mediator",
        }
    }

    pub fn run(self, out: &mut Transcript) -> Result<()> {
        match self {
            Demo::Composite => p1_composite::run(out),
            Demo::Flyweight => p2_flyweight::run(out),
            Demo::TemplateMethod => p3_template_method::run(out),
            Demo::Visitor => p4_visitor::run(out),
            Demo::Adapter => p5_adapter::run(out),
            Demo::Strategy => p6_strategy::run(out),
            Demo::Iterator => p7_iterator::run(out),
            Demo::Mediator => p8_mediator::run(out),
        }
    }

    /// Runs the demo on a fresh transcript.
    pub fn transcript(self) -> Result<Transcript> {
        let mut out = Transcript::new();
        self.run(&mut out)?;
        Ok(out)
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.to_possible_value().ok_or(fmt::Error)?;
        f.write_str(value.get_name())
    }
}

pub fn banner(number: usize) -> String {
    format!("Завдання {} {}", number, "=".repeat(36))
}

// ============================================================================
// Runner
// ============================================================================

pub struct Catalog {
    demos: Vec<Demo>,
    color: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Demo::ALL.to_vec())
    }
}

impl Catalog {
    pub fn new(demos: Vec<Demo>) -> Self {
        Self { demos, color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn run<W: Write>(&self, sink: &mut W) -> Result<()> {
        info!(count = self.demos.len(), "running demos");

        for demo in &self.demos {
            let transcript = demo.transcript()?;
            debug!(demo = %demo, lines = transcript.len(), "demo finished");

            let heading = banner(demo.number());
            if self.color {
                writeln!(sink, "{}", heading.bold().cyan())?;
            } else {
                writeln!(sink, "{}", heading)?;
            }
            for line in transcript.lines() {
                writeln!(sink, "{}", line)?;
            }
        }

        sink.flush()?;
        Ok(())
    }
}
