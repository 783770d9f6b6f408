use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::error::AlignError;
use crate::core::matrix::NumMatrix;

/// Load a comma-separated matrix of doubles. Every line is one row; all rows
/// must have the same number of columns and the file must not be empty.
pub fn load_matrix(path: &Path) -> Result<NumMatrix, AlignError> {
    let content = fs::read_to_string(path).map_err(|e| AlignError::io(path, e))?;
    parse_matrix(&content, path)
}

fn parse_matrix(content: &str, path: &Path) -> Result<NumMatrix, AlignError> {
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(AlignError::EmptyMatrix { path: path.into() });
    }

    let cols = lines[0].split(',').count();
    let mut matrix = NumMatrix::zeros(lines.len(), cols);

    for (i, line) in lines.iter().enumerate() {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != cols {
            return Err(AlignError::RaggedMatrix {
                path: path.into(),
                line: i + 1,
                expected: cols,
                found: cells.len(),
            });
        }
        for (j, cell) in cells.iter().enumerate() {
            let value = cell
                .trim()
                .parse::<f64>()
                .map_err(|_| AlignError::MalformedValue {
                    path: path.into(),
                    line: i + 1,
                    value: (*cell).to_owned(),
                })?;
            matrix.set(i, j, value);
        }
    }

    Ok(matrix)
}

/// Save a matrix as plain comma-separated values, one row per line.
pub fn save_matrix(matrix: &NumMatrix, path: &Path) -> Result<(), AlignError> {
    let mut file = fs::File::create(path).map_err(|e| AlignError::io(path, e))?;
    for i in 0..matrix.rows() {
        let row: Vec<String> = (0..matrix.cols())
            .map(|j| matrix.get(i, j).to_string())
            .collect();
        writeln!(file, "{}", row.join(",")).map_err(|e| AlignError::io(path, e))?;
    }
    Ok(())
}

/// Save a matrix with 1-based step labels: a header row of `T0001, T0002, ...`
/// (with a blank leading cell) and an `S0001`-style label in front of every
/// row. Meant for eyeballing score matrices in a spreadsheet.
pub fn save_labeled_matrix(matrix: &NumMatrix, path: &Path) -> Result<(), AlignError> {
    let mut file = fs::File::create(path).map_err(|e| AlignError::io(path, e))?;

    let header: Vec<String> = (0..matrix.cols()).map(|j| format!("T{:04}", j + 1)).collect();
    writeln!(file, "     ,{}", header.join(",")).map_err(|e| AlignError::io(path, e))?;

    for i in 0..matrix.rows() {
        let row: Vec<String> = (0..matrix.cols())
            .map(|j| matrix.get(i, j).to_string())
            .collect();
        writeln!(file, "S{:04},{}", i + 1, row.join(","))
            .map_err(|e| AlignError::io(path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fake_path() -> PathBuf {
        PathBuf::from("test.csv")
    }

    #[test]
    fn test_parse_simple_matrix() {
        let m = parse_matrix("1.5,2,3\n4,5.25,6\n", &fake_path()).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(0, 0), 1.5);
        assert_eq!(m.get(1, 1), 5.25);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let err = parse_matrix("", &fake_path()).unwrap_err();
        assert!(matches!(err, AlignError::EmptyMatrix { .. }));
    }

    #[test]
    fn test_ragged_rows_are_an_error() {
        let err = parse_matrix("1,2,3\n4,5\n", &fake_path()).unwrap_err();
        match err {
            AlignError::RaggedMatrix {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_cell_is_an_error() {
        let err = parse_matrix("1,2\n3,abc\n", &fake_path()).unwrap_err();
        match err {
            AlignError::MalformedValue { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = std::env::temp_dir().join("storytrace_matrix_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("round_trip.csv");

        let mut m = NumMatrix::zeros(2, 2);
        m.set(0, 0, 1.0);
        m.set(0, 1, 2.5);
        m.set(1, 0, -3.0);
        m.set(1, 1, 0.0);

        save_matrix(&m, &path).unwrap();
        let reloaded = load_matrix(&path).unwrap();
        assert_eq!(m, reloaded);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_labeled_output_format() {
        let dir = std::env::temp_dir().join("storytrace_matrix_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("labeled.csv");

        let mut m = NumMatrix::zeros(1, 2);
        m.set(0, 0, 7.0);
        m.set(0, 1, 8.0);
        save_labeled_matrix(&m, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "     ,T0001,T0002");
        assert_eq!(lines[1], "S0001,7,8");

        std::fs::remove_file(&path).unwrap();
    }
}
