use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, Command};

use crate::log_utils::LogLevel;

pub(super) fn cli_model() -> Command {
    command!()
        .arg(
            Arg::new("vcf")
                .long("vcf")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .value_name("VCF")
                .help("Input VCF file with genotype calls"),
        )
        .arg(
            Arg::new("phenotypes")
                .long("phenotypes")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .value_name("TSV")
                .help("Phenotype table keyed by a Sample column"),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output-file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .value_name("FILE")
                .help("Durable location for the merged clumping results"),
        )
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("info")
                .help("Set log level"),
        )
        .next_help_heading("Operation")
        .arg(
            Arg::new("chr")
                .long("chr")
                .default_value("1-22")
                .value_parser(value_parser!(String))
                .value_name("LIST")
                .help("Chromosomes to clump: comma-separated integers or inclusive ranges (e.g. 1-3,5)"),
        )
        .arg(
            Arg::new("local")
                .long("local")
                .action(ArgAction::SetTrue)
                .help("Run the task graph on this machine instead of the batch service"),
        )
        .arg(
            Arg::new("image")
                .long("image")
                .value_parser(value_parser!(String))
                .value_name("IMAGE")
                .help("Container image with the analysis entry point and plink on PATH [default for --local: batch-demo:latest]"),
        )
        .arg(
            Arg::new("gwas_exec")
                .long("gwas-exec")
                .default_value("gwas-hail")
                .value_parser(value_parser!(String))
                .value_name("PROG")
                .help("Analysis entry point invoked by the gwas task"),
        )
        .arg(
            Arg::new("keep_scratch")
                .long("keep-scratch")
                .action(ArgAction::SetTrue)
                .help("Retain the local scratch directory after the run"),
        )
        .next_help_heading("Batch service")
        .arg(
            Arg::new("billing_project")
                .long("billing-project")
                .value_parser(value_parser!(String))
                .value_name("PROJECT")
                .help("Billing project for remote execution"),
        )
        .arg(
            Arg::new("bucket")
                .long("bucket")
                .value_parser(value_parser!(String))
                .value_name("BUCKET")
                .help("Bucket for remote intermediates (without gs://)"),
        )
}
