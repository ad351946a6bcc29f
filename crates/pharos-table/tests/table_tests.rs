use std::fs;

use pharos_pairwise::generate::generate_suite;
use pharos_pairwise::rng::SeededFiller;
use pharos_table::read::read_parameters_from_path;
use pharos_table::write::write_suite_to_path;

#[test]
fn test_csv_in_suite_out() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("params.csv");
    let output_path = dir.path().join("suite.csv");

    // Ragged columns: "env" has two values, the others three.
    fs::write(
        &input_path,
        "browser,os,env\nfirefox,linux,staging\nchrome,macos,prod\nsafari,windows,\n",
    )
    .unwrap();

    let params = read_parameters_from_path(&input_path).unwrap();
    assert_eq!(params.len(), 3);
    assert_eq!(params[2].values, vec!["staging", "prod"]);

    let suite = generate_suite(&params, &mut SeededFiller::new(42)).unwrap();
    write_suite_to_path(&output_path, &params, &suite).unwrap();

    let written = fs::read_to_string(&output_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("browser,os,env"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), suite.len());
    for row in rows {
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), 3);
        for (param, cell) in params.iter().zip(&cells) {
            assert!(param.values.iter().any(|v| v == cell));
        }
    }
}
