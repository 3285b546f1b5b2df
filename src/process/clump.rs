use crate::batch::{Batch, Command, ResourceId};

/// Header of plink's clumped-results table. Synthesized verbatim when
/// plink finds nothing on a chromosome, so every clumping task yields a
/// well-formed (possibly header-only) table and the merge stage never
/// sees a missing file.
pub const CLUMPED_HEADER: &str = " CHR    F              SNP         BP        P    TOTAL   NSIG    S05    S01   S001  S0001    SP2";

/// Add one LD-clumping task for a single chromosome.
///
/// plink writes its results to a hardcoded name in the working
/// directory, and writes no file at all when no variants pass the
/// thresholds; the command moves the file into place or falls back to
/// a header-only table. That quirk stays inside this builder.
pub fn clump(
    batch: &mut Batch,
    image: &str,
    bfile: ResourceId,
    assoc: ResourceId,
    chrom: u8,
) -> ResourceId {
    let mut t = batch
        .new_task(&format!("clump-{}", chrom))
        .image(image)
        .cpu(1)
        .memory_mb(1024);
    let clumped = t.output_file("clumped");

    t.command(
        Command::new()
            .lit("plink --bfile ")
            .res(bfile)
            .lit(" --clump ")
            .res(assoc)
            .lit(format!(
                " --chr {} --clump-p1 0.0001 --clump-p2 0.001 --clump-r2 0.5 --clump-kb 1000 --memory 1024 --threads 1\n",
                chrom
            ))
            .lit("mv plink.clumped ")
            .res(clumped)
            .lit(format!(" || echo \"{}\" > ", CLUMPED_HEADER))
            .res(clumped)
            .lit("\n"),
    );

    clumped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clump_command_shape() {
        let mut batch = Batch::new("test");
        let bfile = batch.read_input("gwas");
        let assoc = batch.read_input("gwas.assoc");
        let clumped = clump(&mut batch, "batch-demo:latest", bfile, assoc, 21);

        let task = &batch.tasks()[0];
        assert_eq!(task.name(), "clump-21");
        assert_eq!(task.cpu(), 1);
        assert_eq!(task.memory_mb(), Some(1024));

        let script = task
            .command()
            .expect("missing command")
            .render(|r| format!("r{}", if r == clumped { "out" } else { "in" }));
        assert!(script.contains("--chr 21"));
        assert!(script.contains("--clump-p1 0.0001"));
        assert!(script.contains("--clump-p2 0.001"));
        assert!(script.contains("--clump-r2 0.5"));
        assert!(script.contains("--clump-kb 1000"));
        assert!(script.contains("--threads 1"));
        assert!(script.contains(&format!("|| echo \"{}\" > rout", CLUMPED_HEADER)));
    }
}
