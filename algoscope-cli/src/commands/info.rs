use std::io::Write;

use algoscope::{AlgorithmMetadata, Registry};
use anyhow::Context;

use crate::{app::GlobalOptions, output::emit};

pub fn run(algorithm: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let registry = Registry::new();
    let name = registry.resolve(algorithm)?;
    let meta: AlgorithmMetadata = *registry
        .metadata(name)
        .with_context(|| format!("no metadata registered for {name}"))?;

    emit(&meta, opts, |meta, out| {
        let input = if meta.family.takes_graph() {
            "graph"
        } else {
            "array"
        };
        writeln!(out, "Algorithm:   {}", meta.name)?;
        writeln!(out, "Family:      {}", meta.family)?;
        writeln!(out, "Input:       {input}")?;
        writeln!(out, "Time:        {}", meta.time)?;
        writeln!(out, "Space:       {}", meta.space)?;
        writeln!(out, "Structure:   {}", meta.data_structure)?;
        writeln!(out, "Uses start:  {}", yes_no(meta.name.uses_start()))?;
        writeln!(out, "Uses end:    {}", yes_no(meta.name.uses_end()))?;
        writeln!(out, "\n{}", meta.description)
    })
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
