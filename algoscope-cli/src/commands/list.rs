use algoscope::{AlgorithmMetadata, Registry};

use crate::{
    app::GlobalOptions,
    commands::common::parse_family,
    output::{emit, plain_table, write_table, Align},
};

pub fn run(family: Option<&str>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let family = family.map(parse_family).transpose()?;
    let registry = Registry::new();

    let algorithms: Vec<AlgorithmMetadata> = registry
        .algorithms()
        .filter(|meta| family.map_or(true, |family| meta.family == family))
        .copied()
        .collect();

    emit(&algorithms, opts, |algorithms, out| {
        let mut table = plain_table(&[
            ("Name", Align::Left),
            ("Family", Align::Left),
            ("Time", Align::Left),
            ("Space", Align::Left),
            ("Structure", Align::Left),
        ]);
        for meta in algorithms {
            table.add_row(vec![
                meta.name.to_string(),
                meta.family.to_string(),
                meta.time.to_string(),
                meta.space.to_string(),
                meta.data_structure.to_string(),
            ]);
        }
        write_table(&table, out)
    })
}
