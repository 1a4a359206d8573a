// Example: a grid adapter scrolling through an Arrow record set, one frame at a time.
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use record_view::ViewOptions;
use record_view_arrow::{ArrowIpcCodec, ArrowRecordView, BatchRecordSet};

fn main() {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("city", DataType::Utf8, true),
        Field::new("temperature", DataType::Float64, true),
    ]));
    let cities = ["Oslo", "Lima", "Accra", "Hanoi"];
    let batches: Vec<RecordBatch> = (0..100)
        .map(|b| {
            let rows = b * 1_000..(b + 1) * 1_000;
            let ids: ArrayRef = Arc::new(Int64Array::from_iter_values(rows.clone()));
            let city: ArrayRef = Arc::new(StringArray::from_iter_values(
                rows.clone().map(|r| cities[r as usize % cities.len()]),
            ));
            let temp: ArrayRef = Arc::new(Float64Array::from_iter(
                rows.map(|r| (r % 13 != 0).then_some((r % 40) as f64 - 5.0)),
            ));
            RecordBatch::try_new(Arc::clone(&schema), vec![ids, city, temp])
                .expect("columns match schema")
        })
        .collect();

    let record_set = BatchRecordSet::new(schema, batches).expect("batches share the schema");
    let mut view = ArrowRecordView::new(record_set, ArrowIpcCodec, ViewOptions::new())
        .expect("valid schema");
    println!(
        "columns={:?} num_rows={}",
        view.columns().iter().map(|c| &c.name).collect::<Vec<_>>(),
        view.num_rows()
    );

    // Each frame: push the viewport, apply resolved fetches, draw the first visible row.
    let viewport_rows = 30;
    for frame in 0..6 {
        let top = frame * 7_919;
        view.set_visible_range(top, top + viewport_rows);
        view.process_ready();

        let row: Vec<String> = view
            .columns()
            .iter()
            .map(|c| {
                view.cell_value(top, &c.name)
                    .map(|cell| cell.to_string())
                    .unwrap_or_default()
            })
            .collect();
        println!("frame {frame}: window={:?} row {top} = {row:?}", view.window());
    }
    println!("stats: {:?}", view.stats());
}
