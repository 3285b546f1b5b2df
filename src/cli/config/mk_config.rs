use std::path::PathBuf;

use clap::ArgMatches;

use super::super::chrom_list::parse_chrom_list;
use super::Config;

/// Image name the workshop material states for local runs
const LOCAL_IMAGE: &str = "batch-demo:latest";

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let vcf = m
            .get_one::<PathBuf>("vcf")
            .expect("Missing vcf") // Should be enforced by clap
            .clone();
        let phenotypes = m
            .get_one::<PathBuf>("phenotypes")
            .expect("Missing phenotypes") // Should be enforced by clap
            .clone();
        let output_file = m
            .get_one::<PathBuf>("output_file")
            .expect("Missing output file") // Should be enforced by clap
            .clone();

        let local = m.get_flag("local");
        let keep_scratch = m.get_flag("keep_scratch");

        let spec = m.get_one::<String>("chr").expect("Missing default chr");
        let chromosomes = parse_chrom_list(spec)?;
        if chromosomes.is_empty() {
            return Err(anyhow!(
                "Chromosome spec '{}' expands to an empty set; nothing to clump",
                spec
            ));
        }
        debug!("{} chromosome tasks requested", chromosomes.len());

        let image = match m.get_one::<String>("image") {
            Some(s) => Box::from(s.as_str()),
            None if local => Box::from(LOCAL_IMAGE),
            None => {
                return Err(anyhow!(
                    "--image is required when submitting to the batch service"
                ))
            }
        };

        let gwas_exec = m
            .get_one::<String>("gwas_exec")
            .map(|s| Box::from(s.as_str()))
            .expect("Missing default gwas exec");

        let billing_project = m
            .get_one::<String>("billing_project")
            .map(|s| Box::from(s.as_str()));
        let bucket = m.get_one::<String>("bucket").map(|s| Box::from(s.as_str()));
        if !local && (billing_project.is_none() || bucket.is_none()) {
            return Err(anyhow!(
                "--billing-project and --bucket are required when submitting to the batch service"
            ));
        }

        Ok(Config {
            vcf,
            phenotypes,
            output_file,
            chromosomes,
            image,
            gwas_exec,
            billing_project,
            bucket,
            local,
            keep_scratch,
        })
    }
}
