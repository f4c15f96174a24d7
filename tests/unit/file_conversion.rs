use assert_matches::assert_matches;
use csv2json::conversion::{ConversionConfig, ConversionEngine};
use csv2json::{ConversionError, CsvSource};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_to_json_success() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(tmp, "name,age\nAlice,30\nBob,41\n").unwrap();

    let engine = ConversionEngine::new(ConversionConfig::default());

    let source = CsvSource::File(tmp.path().to_path_buf());
    let result = engine.convert_from_source(&source).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(result.as_str()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[1]["age"], "41");
    assert_eq!(result.metadata.input_size, 25);
}

#[test]
fn test_file_to_json_invalid_utf8() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"name\n\x80\x81\n").unwrap();

    let engine = ConversionEngine::new(ConversionConfig::default());

    let source = CsvSource::File(tmp.path().to_path_buf());
    let result = engine.convert_from_source(&source);
    assert_matches!(result, Err(ConversionError::ParseError(_)));
}

#[test]
fn test_row_count_and_key_fidelity() {
    let header = ["id", "payee", "amount", "memo"];
    let mut csv = header.join(",");
    csv.push('\n');
    for i in 0..50 {
        csv.push_str(&format!("{},payee{},{}.00,\"note {}, more\"\n", i, i, i * 3, i));
    }

    let json = csv2json::convert_csv(&csv).unwrap();
    let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.len(), 50);
    for (i, record) in parsed.iter().enumerate() {
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, header);
        assert_eq!(record["id"], i.to_string());
        assert_eq!(record["memo"], format!("note {}, more", i));
        assert!(record.values().all(|v| v.is_string()));
    }
}
