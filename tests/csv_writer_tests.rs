//! CSV writer tests: header emission, column order, placeholders, sink errors


use dbcsv_core::config::WriterConfig;
use dbcsv_core::schema::{ColumnDef, ColumnType, Schema};
use dbcsv_core::types::{Record, Value};
use dbcsv_io::{CsvRecordWriter, Error, RecordWriter};
use test_data_gen::{id_name_schema, mixed_schema, record, write_csv, FailingSink};

#[test]
fn test_header_written_immediately() {
    let schema = id_name_schema();
    let mut w = CsvRecordWriter::to_writer(Vec::new());
    w.write_header(&schema, &schema.column_map()).unwrap();
    assert_eq!(w.column_order().unwrap(), &["id".to_string(), "name".to_string()]);

    let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
    assert_eq!(out, "id,name\n");
}

#[test]
fn test_example_output() {
    let schema = id_name_schema();
    let records = vec![
        record([("id", Value::UInt(1)), ("name", Value::from("Alice"))]),
        record([("id", Value::UInt(2)), ("name", Value::from("Bob,Jr"))]),
    ];
    assert_eq!(write_csv(&schema, &records), "id,name\n1,Alice\n2,\"Bob,Jr\"\n");
}

#[test]
fn test_header_order_follows_schema_not_record() {
    let schema = Schema::new(vec![
        ColumnDef::new("z", ColumnType::Int),
        ColumnDef::new("a", ColumnType::Int),
        ColumnDef::new("m", ColumnType::Int),
    ]);
    let first = vec![record([
        ("a", Value::Int(1)),
        ("m", Value::Int(2)),
        ("z", Value::Int(3)),
    ])];
    let second = vec![record([("m", Value::Int(9))]), Record::new()];

    let out1 = write_csv(&schema, &first);
    let out2 = write_csv(&schema, &second);
    assert_eq!(out1.lines().next(), Some("z,a,m"));
    assert_eq!(out1.lines().next(), out2.lines().next());
    assert_eq!(out1.lines().nth(1), Some("3,1,2"));
}

#[test]
fn test_missing_key_uses_empty_placeholder() {
    let schema = mixed_schema();
    let r = record([("id", Value::UInt(7)), ("name", Value::from("x"))]);
    let out = write_csv(&schema, &[r]);
    let row = out.lines().nth(1).unwrap();
    assert_eq!(row, "7,,,x,");
    assert_eq!(row.split(',').count(), schema.len());
}

#[test]
fn test_missing_key_custom_placeholder() {
    let schema = id_name_schema();
    let mut w = CsvRecordWriter::with_config(Vec::new(), WriterConfig::default().with_missing("NA"));
    w.write_header(&schema, &schema.column_map()).unwrap();
    w.write_record(&record([("id", Value::UInt(3))])).unwrap();
    w.write_footer().unwrap();
    let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
    assert_eq!(out, "id,name\n3,NA\n");
}

#[test]
fn test_extra_record_keys_ignored() {
    let schema = id_name_schema();
    let r = record([
        ("id", Value::UInt(1)),
        ("name", Value::from("a")),
        ("unused", Value::Int(-1)),
    ]);
    assert_eq!(write_csv(&schema, &[r]), "id,name\n1,a\n");
}

#[test]
fn test_value_formatting() {
    let schema = mixed_schema();
    let r = record([
        ("id", Value::UInt(4_000_000_000)),
        ("delta", Value::Int(-42)),
        ("rate", Value::Float(1.5)),
        ("name", Value::from("say \"hi\"")),
        ("title", Value::from("two\nlines")),
    ]);
    let out = write_csv(&schema, &[r]);
    assert_eq!(
        out,
        "id,delta,rate,name,title\n4000000000,-42,1.5,\"say \"\"hi\"\"\",\"two\nlines\"\n"
    );
}

#[test]
fn test_whole_float_has_no_trailing_decimals() {
    assert_eq!(Value::Float(2.0).to_string(), "2");
    assert_eq!(Value::Float(0.1).to_string(), "0.1");
    assert_eq!(Value::Int(-7).to_string(), "-7");
}

#[test]
fn test_custom_delimiter() {
    let schema = id_name_schema();
    let mut w = CsvRecordWriter::with_config(Vec::new(), WriterConfig::default().with_delimiter(b';'));
    w.write_header(&schema, &schema.column_map()).unwrap();
    w.write_record(&record([("id", Value::UInt(1)), ("name", Value::from("a;b"))]))
        .unwrap();
    let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
    assert_eq!(out, "id;name\n1;\"a;b\"\n");
}

#[test]
fn test_record_before_header_is_rejected() {
    let mut w = CsvRecordWriter::to_writer(Vec::new());
    let err = w.write_record(&Record::new()).unwrap_err();
    assert!(matches!(err, Error::State(_)));
}

#[test]
fn test_header_twice_is_rejected() {
    let schema = id_name_schema();
    let mut w = CsvRecordWriter::to_writer(Vec::new());
    w.write_header(&schema, &schema.column_map()).unwrap();
    let err = w.write_header(&schema, &schema.column_map()).unwrap_err();
    assert!(matches!(err, Error::State(_)));
}

#[test]
fn test_footer_surfaces_sink_error() {
    let schema = id_name_schema();
    let mut w = CsvRecordWriter::to_writer(FailingSink);
    // The csv writer buffers, so the failure shows up at flush time.
    w.write_header(&schema, &schema.column_map()).unwrap();
    w.write_record(&record([("id", Value::UInt(1))])).unwrap();
    let err = w.write_footer().unwrap_err();
    assert!(matches!(err, Error::Flush(_)));
    assert!(err.to_string().contains("flush"));
}

#[test]
fn test_records_written_counter() {
    let schema = id_name_schema();
    let mut w = CsvRecordWriter::to_writer(Vec::new());
    w.write_header(&schema, &schema.column_map()).unwrap();
    for i in 0..5 {
        w.write_record(&record([("id", Value::UInt(i))])).unwrap();
    }
    assert_eq!(w.records_written(), 5);
}

#[test]
fn test_driven_through_trait_object() {
    let schema = id_name_schema();
    let mut buf = Vec::new();
    {
        let mut w = CsvRecordWriter::to_writer(&mut buf);
        let dyn_w: &mut dyn RecordWriter = &mut w;
        dyn_w.write_header(&schema, &schema.column_map()).unwrap();
        dyn_w
            .write_record(&record([("id", Value::UInt(9)), ("name", Value::from("n"))]))
            .unwrap();
        dyn_w.write_footer().unwrap();
    }
    assert_eq!(String::from_utf8(buf).unwrap(), "id,name\n9,n\n");
}
