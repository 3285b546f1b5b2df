pub mod clump;
pub mod gwas;
pub mod merge;

use crate::{
    batch::{
        backend::{Backend, LocalBackend, ServiceBackend},
        Batch,
    },
    cli::Config,
};

/// Build the four-stage task graph and hand it to a backend.
///
/// One gwas task fans out to one clumping task per requested
/// chromosome; the merge task joins them; the merged table is promoted
/// to the durable output location once the graph completes.
pub fn process_data(cfg: Config) -> anyhow::Result<()> {
    let mut batch = Batch::new("clumping-demo");

    let vcf = batch.read_input(cfg.vcf());
    let phenotypes = batch.read_input(cfg.phenotypes());

    let gw = gwas::run_gwas(&mut batch, cfg.image(), cfg.gwas_exec(), vcf, phenotypes);

    let mut results = Vec::with_capacity(cfg.chromosomes().len());
    for &chrom in cfg.chromosomes() {
        results.push(clump::clump(&mut batch, cfg.image(), gw.bfile, gw.assoc, chrom));
    }

    let merged = merge::merge(&mut batch, &results)?;
    batch.write_output(merged, cfg.output_file());

    info!(
        "task graph built: {} tasks over {} chromosomes",
        batch.n_tasks(),
        cfg.chromosomes().len()
    );

    if cfg.local() {
        LocalBackend::new(cfg.keep_scratch()).run(&batch)
    } else {
        let billing_project = cfg
            .billing_project()
            .expect("Missing billing project"); // Enforced by Config::from_matches
        let bucket = cfg.bucket().expect("Missing bucket"); // Enforced by Config::from_matches
        ServiceBackend::new(billing_project, bucket).run(&batch)
    }
}
