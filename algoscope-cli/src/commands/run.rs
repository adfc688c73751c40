use std::io::Write;

use algoscope::{Registry, StepList, TraceStats};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, RunArgs},
    commands::common::{build_input, build_params, parse_limits},
    output::{emit, step_table, write_stats, write_table},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunOutput<'a> {
    algorithm: String,
    stats: TraceStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a StepList>,
}

pub fn run(args: &RunArgs, opts: &GlobalOptions) -> anyhow::Result<()> {
    let limits = parse_limits(&args.limits)?;
    let registry = Registry::with_limits(limits);
    let name = registry.resolve(&args.algorithm)?;
    let input = build_input(args, &limits)?;
    let params = build_params(args);

    let steps = registry.run(name, &input, &params)?;
    log::info!("{name}: {} step(s)", steps.len());

    let output = RunOutput {
        algorithm: name.to_string(),
        stats: steps.stats(),
        steps: (!args.stats).then_some(&steps),
    };

    emit(&output, opts, |output, out| {
        if let Some(steps) = output.steps {
            write_table(&step_table(&steps.summaries(), args.limit), out)?;
            writeln!(out)?;
        }
        write_stats(out, &output.algorithm, &output.stats)
    })
}
