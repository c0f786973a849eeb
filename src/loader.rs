//! Loader
//!
//! Reading tab separated tables with a header line into rows and `Table`s,
//! and the file to file rule induction the command line driver runs.
use crate::data::Table;
use crate::errors::C45Error;
use crate::tree::DecisionTree;
use hashbrown::HashSet;
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Read tab separated records into one `attribute -> value` map per row.
///
/// The first line names the attributes, every name must be unique. Records
/// with a different number of fields than the header are rejected.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<HashMap<String, String>>, C45Error> {
    read_records(reader).map(|(_, rows)| rows)
}

fn read_records<R: Read>(reader: R) -> Result<(Vec<String>, Vec<HashMap<String, String>>), C45Error> {
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| C45Error::UnableToRead(e.to_string()))?
        .clone();
    let mut seen = HashSet::new();
    for name in headers.iter() {
        if !seen.insert(name) {
            return Err(C45Error::DuplicateAttribute(name.to_string()));
        }
    }
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| C45Error::UnableToRead(e.to_string()))?;
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
    }
    let names = headers.iter().map(String::from).collect();
    Ok((names, rows))
}

/// Read a tab separated table. A header line without records is an empty table.
pub fn read_table<R: Read>(reader: R) -> Result<Table, C45Error> {
    let (headers, rows) = read_records(reader)?;
    if rows.is_empty() && headers.iter().any(|h| !h.is_empty()) {
        return Err(C45Error::EmptyTable);
    }
    Table::from_rows(rows)
}

/// Load a table from a tab separated file.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table, C45Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| C45Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
    read_table(file)
}

/// Grow a tree on the table in `input` and write its rules to `output`.
///
/// `output` is created only after the tree is grown, so a missing target or
/// an unreadable input leaves no file behind.
pub fn induce_rules<P, Q>(input: P, output: Q, target: &str, max_depth: usize) -> Result<DecisionTree, C45Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output = output.as_ref();
    let table = load_table(input)?;
    let mut tree = DecisionTree::new(target).set_max_depth(max_depth);
    tree.fit(table)?;

    let file = File::create(output).map_err(|e| C45Error::UnableToWrite(format!("{}: {}", output.display(), e)))?;
    let mut out = BufWriter::new(file);
    tree.write_rules(&mut out)?;
    out.flush().map_err(|e| C45Error::UnableToWrite(e.to_string()))?;
    info!("Wrote {} rules to {}.", tree.n_leaves(), output.display());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows() {
        let data = "Weather\tPlay\nSunny\tYes\nRainy\tNo\n";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Weather"], "Sunny");
        assert_eq!(rows[1]["Play"], "No");
    }

    #[test]
    fn test_read_table_keeps_row_order() {
        let data = "Weather\tPlay\nSunny\tYes\nSunny\tYes\nRainy\tNo\nRainy\tNo\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(table, crate::data::tests::weather_table());
    }

    #[test]
    fn test_ragged_record_is_rejected() {
        let data = "Weather\tPlay\nSunny\tYes\nRainy\n";
        assert!(matches!(read_rows(data.as_bytes()), Err(C45Error::UnableToRead(_))));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let data = "Weather\tPlay\n";
        assert_eq!(read_table(data.as_bytes()), Err(C45Error::EmptyTable));
        assert_eq!(read_table("".as_bytes()), Err(C45Error::NoAttributes));
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        let data = "A\tA\tT\nx\ty\t1\nx\tz\t2\n";
        assert_eq!(read_rows(data.as_bytes()), Err(C45Error::DuplicateAttribute("A".to_string())));
        assert_eq!(read_table(data.as_bytes()), Err(C45Error::DuplicateAttribute("A".to_string())));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(load_table("resources/does_not_exist.tsv"), Err(C45Error::UnableToRead(_))));
    }

    #[test]
    fn test_load_weather() {
        let table = load_table("resources/weather.tsv").unwrap();
        assert_eq!(table.size(), 14);
        assert_eq!(
            table.attributes().collect::<Vec<_>>(),
            vec!["Humidity", "Outlook", "Play", "Temperature", "Wind"]
        );
    }

    #[test]
    fn test_induce_rules_with_missing_target_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("decision.txt");
        let err = induce_rules("resources/weather.tsv", &output, "Outcome", 20).unwrap_err();
        assert_eq!(err, C45Error::InvalidTargetColumn("Outcome".to_string()));
        assert_eq!(err.to_string(), "Outcome is not a valid column.");
        assert!(!output.exists());
    }

    #[test]
    fn test_induce_rules_writes_play_tennis_rules() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("decision.txt");
        let tree = induce_rules("resources/weather.tsv", &output, "Play", 20).unwrap();
        assert_eq!(tree.n_leaves(), 5);

        let written = std::fs::read_to_string(&output).unwrap();

        let expected = "Count\tPath_Length\tResult\tPredicates\n\
                        3\t2\tPlay=No\tOutlook=Sunny & Humidity=High\n\
                        2\t2\tPlay=Yes\tOutlook=Sunny & Humidity=Normal\n\
                        4\t1\tPlay=Yes\tOutlook=Overcast\n\
                        3\t2\tPlay=Yes\tOutlook=Rain & Wind=Weak\n\
                        2\t2\tPlay=No\tOutlook=Rain & Wind=Strong\n";
        assert_eq!(written, expected);
    }
}
