use crate::batch::{Batch, Command, ResourceId};

/// Image used for the merge task; plain shell is all it needs
const MERGE_IMAGE: &str = "ubuntu:18.04";

/// Add the task that concatenates per-chromosome clumped tables.
///
/// The output keeps the first file's header, then the data lines of
/// every file in input order (so chromosome order follows the
/// requested list), with blank lines stripped. An empty input list is
/// rejected: it would leave the merge output resource unresolvable.
pub fn merge(batch: &mut Batch, results: &[ResourceId]) -> anyhow::Result<ResourceId> {
    if results.is_empty() {
        return Err(anyhow!("No clumped results to merge"));
    }

    let mut t = batch.new_task("merge-results").image(MERGE_IMAGE);
    let ofile = t.output_file("ofile");

    let mut cmd = Command::new()
        .lit("head -n 1 ")
        .res(results[0])
        .lit(" > ")
        .res(ofile)
        .lit("\n");
    for &r in results {
        cmd = cmd.lit("tail -n +2 ").res(r).lit(" >> ").res(ofile).lit("\n");
    }
    cmd = cmd.lit("sed -i '/^$/d' ").res(ofile).lit("\n");
    t.command(cmd);

    Ok(ofile)
}
