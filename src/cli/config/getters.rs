use std::path::Path;

use super::Config;

impl Config {
    pub fn vcf(&self) -> &Path {
        &self.vcf
    }

    pub fn phenotypes(&self) -> &Path {
        &self.phenotypes
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn chromosomes(&self) -> &[u8] {
        &self.chromosomes
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn gwas_exec(&self) -> &str {
        &self.gwas_exec
    }

    pub fn billing_project(&self) -> Option<&str> {
        self.billing_project.as_deref()
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn local(&self) -> bool {
        self.local
    }

    pub fn keep_scratch(&self) -> bool {
        self.keep_scratch
    }
}
