use std::path::PathBuf;

mod getters;
mod mk_config;

/// Validated run configuration.
///
/// The chromosome spec is expanded at construction time so that a
/// malformed or empty spec aborts before any task graph is built.
#[derive(Debug)]
pub struct Config {
    vcf: PathBuf,
    phenotypes: PathBuf,
    output_file: PathBuf,
    chromosomes: Vec<u8>,
    image: Box<str>,
    gwas_exec: Box<str>,
    billing_project: Option<Box<str>>,
    bucket: Option<Box<str>>,
    local: bool,
    keep_scratch: bool,
}
