use std::fs;
use std::path::{Path, PathBuf};

use sleipnir::batch::{
    backend::{Backend, LocalBackend},
    Batch, Command,
};
use sleipnir::process::{clump, clump::CLUMPED_HEADER, merge};

fn write_clumped(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut text = String::from(CLUMPED_HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    // plink leaves a trailing blank line in its output
    text.push('\n');
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn merge_keeps_one_header_and_drops_blank_lines() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let row21 = "  21    1       rs1001     410923   2.2e-05      4      0      1      1      1      1    rs1002(1)";
    let row22 = "  22    1       rs2001     155001   9.1e-06      2      0      0      1      0      1    NONE";
    let f21 = write_clumped(dir.path(), "chr21.clumped", &[row21]);
    let f22 = write_clumped(dir.path(), "chr22.clumped", &[row22]);

    let mut batch = Batch::new("merge-test");
    let r21 = batch.read_input(&f21);
    let r22 = batch.read_input(&f22);
    let merged = merge::merge(&mut batch, &[r21, r22])?;
    let out = dir.path().join("merged.txt");
    batch.write_output(merged, &out);

    LocalBackend::new(false).run(&batch)?;

    let text = fs::read_to_string(&out)?;
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines, vec![CLUMPED_HEADER, row21, row22]);
    assert!(!text.contains("\n\n"));
    Ok(())
}

#[test]
fn merge_is_idempotent_over_the_same_inputs() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let f21 = write_clumped(dir.path(), "chr21.clumped", &["  21    1 rs1 1 1e-05 1 0 0 0 0 1 NONE"]);
    let f22 = write_clumped(dir.path(), "chr22.clumped", &[]);

    let mut batch = Batch::new("merge-test");
    let r21 = batch.read_input(&f21);
    let r22 = batch.read_input(&f22);
    let merged = merge::merge(&mut batch, &[r21, r22])?;
    let out = dir.path().join("merged.txt");
    batch.write_output(merged, &out);

    let backend = LocalBackend::new(false);
    backend.run(&batch)?;
    let first = fs::read(&out)?;
    backend.run(&batch)?;
    let second = fs::read(&out)?;
    assert_eq!(first, second);
    Ok(())
}

// plink is not expected on the test host: the clumping command's
// fallback branch should synthesize a header-only table.
#[test]
fn clump_synthesizes_header_only_table_without_results() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let bfile = dir.path().join("gwas");
    let assoc = dir.path().join("gwas.assoc");
    fs::write(&bfile, "")?;
    fs::write(&assoc, "SNP\tP\n")?;

    let mut batch = Batch::new("clump-test");
    let bfile = batch.read_input(&bfile);
    let assoc = batch.read_input(&assoc);
    let clumped = clump::clump(&mut batch, "batch-demo:latest", bfile, assoc, 21);
    let out = dir.path().join("chr21.clumped");
    batch.write_output(clumped, &out);

    LocalBackend::new(false).run(&batch)?;

    let text = fs::read_to_string(&out)?;
    assert_eq!(text, format!("{}\n", CLUMPED_HEADER));
    Ok(())
}

// Full graph shape with the gwas stage replaced by a shell stub: two
// clumping tasks fan out of it, the merge task joins them, and the
// merged table is promoted to a durable location.
#[test]
fn fan_out_fan_in_graph_runs_end_to_end() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let mut batch = Batch::new("pipeline-test");
    let mut stub = batch.new_task("stub-gwas");
    let ofile = stub.output_group(
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
    stub.command(
        Command::new()
            .lit("for ext in bed bim fam; do echo stub > ")
            .res(bfile)
            .lit(".$ext; done\n")
            .lit("printf 'SNP\\tP\\n' > ")
            .res(assoc)
            .lit("\n"),
    );

    let mut results = Vec::new();
    for chrom in [21u8, 22] {
        results.push(clump::clump(
            &mut batch,
            "batch-demo:latest",
            bfile,
            assoc,
            chrom,
        ));
    }
    let merged = merge::merge(&mut batch, &results)?;
    let out = dir.path().join("results").join("clumped.txt");
    batch.write_output(merged, &out);

    assert_eq!(batch.n_tasks(), 4);
    LocalBackend::new(false).run(&batch)?;

    // plink absent on the host: both chromosomes fall back to
    // header-only tables, so the merge is exactly one header line
    let text = fs::read_to_string(&out)?;
    assert_eq!(text, format!("{}\n", CLUMPED_HEADER));
    Ok(())
}

#[test]
fn failing_task_aborts_the_run() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let mut batch = Batch::new("fail-test");
    let mut t = batch.new_task("boom");
    let out = t.output_file("out");
    t.command(Command::new().lit("exit 3\ntouch ").res(out));
    batch.write_output(out, dir.path().join("never.txt"));

    let err = LocalBackend::new(false).run(&batch).unwrap_err();
    assert!(err.to_string().contains("boom"));
    assert!(!dir.path().join("never.txt").exists());
    Ok(())
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    let mut batch = Batch::new("missing-input");
    let input = batch.read_input(dir.path().join("no-such-file.vcf"));
    let mut t = batch.new_task("copy");
    let out = t.output_file("out");
    t.command(Command::new().lit("cp ").res(input).lit(" ").res(out));

    let err = LocalBackend::new(false).run(&batch).unwrap_err();
    assert!(err.to_string().contains("no-such-file.vcf"));
}
