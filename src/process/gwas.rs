use crate::batch::{Batch, Command, ResourceId};

/// Core count requested for the gwas task; must match the --cores
/// argument handed to the analysis entry point so its internal
/// parallelism stays within the task's allocation.
pub const GWAS_CORES: u32 = 4;

/// Outputs of the gwas stage consumed downstream
pub struct GwasOut {
    /// Root of the bed/bim/fam genotype trio
    pub bfile: ResourceId,
    /// Association table (variant id, p-value)
    pub assoc: ResourceId,
}

/// Add the association-statistics task to the batch.
///
/// The task runs the external analysis entry point, which computes
/// per-variant regression p-values (with PC covariates) and exports
/// the genotypes in PLINK trio format. All four output files share one
/// resource-group root, which is also the entry point's --output-file
/// argument.
pub fn run_gwas(
    batch: &mut Batch,
    image: &str,
    gwas_exec: &str,
    vcf: ResourceId,
    phenotypes: ResourceId,
) -> GwasOut {
    let mut t = batch.new_task("run-gwas").image(image).cpu(GWAS_CORES);
    let ofile = t.output_group(
        "ofile",
        &[
            ("bed", ".bed"),
            ("bim", ".bim"),
            ("fam", ".fam"),
            ("assoc", ".assoc"),
        ],
    );
    let bfile = ofile.root();
    let assoc = ofile.member("assoc");

    t.command(
        Command::new()
            .lit(format!("{} --vcf ", gwas_exec))
            .res(vcf)
            .lit(" --phenotypes ")
            .res(phenotypes)
            .lit(" --output-file ")
            .res(bfile)
            .lit(format!(" --cores {}\n", GWAS_CORES)),
    );

    GwasOut { bfile, assoc }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gwas_command_shape() {
        let mut batch = Batch::new("test");
        let vcf = batch.read_input("trio.vcf");
        let phenotypes = batch.read_input("pheno.tsv");
        let gw = run_gwas(&mut batch, "batch-demo:latest", "gwas-hail", vcf, phenotypes);

        let task = &batch.tasks()[0];
        assert_eq!(task.name(), "run-gwas");
        assert_eq!(task.cpu(), GWAS_CORES);
        assert_eq!(task.image(), Some("batch-demo:latest"));

        let script = task
            .command()
            .expect("missing command")
            .render(|r| format!("<{}>", r == gw.bfile));
        assert!(script.starts_with("gwas-hail --vcf "));
        assert!(script.contains(" --output-file <true>"));
        assert!(script.contains(&format!("--cores {}", GWAS_CORES)));
    }
}
