use regex::{Match, Regex};

/// Expand a chromosome spec such as "1-3,5,7-8" into [1, 2, 3, 5, 7, 8].
///
/// Each comma-separated token is either a single integer or an
/// inclusive range. Order is preserved and duplicates are kept, so an
/// overlapping spec fans out duplicate clumping tasks. A reversed range
/// expands to nothing.
pub fn parse_chrom_list(spec: &str) -> anyhow::Result<Vec<u8>> {
    let reg = Regex::new(r"^(\d+)(?:-(\d+))?$").unwrap();

    let mut chroms = Vec::new();
    for tok in spec.split(',') {
        let cap = reg
            .captures(tok)
            .ok_or_else(|| anyhow!("Chromosome token '{}' not implemented (expected N or N-M)", tok))?;
        let start = parse_chrom(cap.get(1).expect("Missing capture group"))?;
        match cap.get(2) {
            None => chroms.push(start),
            Some(m) => {
                let stop = parse_chrom(m)?;
                chroms.extend(start..=stop);
            }
        }
    }
    Ok(chroms)
}

fn parse_chrom(m: Match) -> anyhow::Result<u8> {
    m.as_str()
        .parse::<u8>()
        .map_err(|e| anyhow!("Could not parse chromosome '{}': {}", m.as_str(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_singletons_and_ranges() {
        assert_eq!(
            parse_chrom_list("1-3,5,7-8").unwrap(),
            vec![1, 2, 3, 5, 7, 8]
        );
    }

    #[test]
    fn default_spec_covers_all_autosomes() {
        assert_eq!(parse_chrom_list("1-22").unwrap(), (1..=22).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_and_overlaps_are_kept_in_order() {
        assert_eq!(
            parse_chrom_list("2,1-3").unwrap(),
            vec![2, 1, 2, 3]
        );
    }

    #[test]
    fn reversed_range_expands_to_nothing() {
        assert_eq!(parse_chrom_list("5-3").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn malformed_tokens_fail() {
        for spec in ["abc", "5-", "-5", "1,,2", "", "1 - 3", "1.5"] {
            assert!(parse_chrom_list(spec).is_err(), "'{}' should fail", spec);
        }
    }
}
