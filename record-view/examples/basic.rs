// Example: a text-backed record set, a tiny codec, and a few scroll updates.
use futures::FutureExt;
use futures::future;
use record_view::{
    Codec, Column, PageData, RecordSet, RowRange, RowsFuture, ViewOptions, WindowedRecordView,
};

/// Rows are `"<row>,<row squared>"` lines.
struct Squares {
    num_rows: usize,
}

impl RecordSet for Squares {
    type Error = std::convert::Infallible;

    fn schema_bytes(&self) -> &[u8] {
        b"n,square"
    }

    fn num_rows(&self) -> usize {
        self.num_rows
    }

    fn get_rows(&self, rows: RowRange) -> RowsFuture<Self::Error> {
        let text: String = (rows.start..rows.end)
            .map(|n| format!("{n},{}\n", n * n))
            .collect();
        future::ready(Ok(text.into_bytes())).boxed_local()
    }
}

struct CsvCodec;

struct CsvPage(Vec<Vec<String>>);

impl PageData for CsvPage {
    type Value = String;

    fn num_rows(&self) -> usize {
        self.0.len()
    }

    fn value(&self, row: usize, column: usize) -> Option<String> {
        self.0.get(row)?.get(column).cloned()
    }
}

impl Codec for CsvCodec {
    type Page = CsvPage;
    type Error = std::str::Utf8Error;

    fn decode_schema(&self, schema: &[u8]) -> Result<Vec<Column>, Self::Error> {
        Ok(std::str::from_utf8(schema)?.split(',').map(Column::new).collect())
    }

    fn decode_page(&self, _schema: &[u8], rows: &[u8]) -> Result<CsvPage, Self::Error> {
        let rows = std::str::from_utf8(rows)?
            .lines()
            .map(|line| line.split(',').map(str::to_owned).collect())
            .collect();
        Ok(CsvPage(rows))
    }
}

fn main() {
    let options = ViewOptions::new()
        .with_batch_size(100)
        .with_overscan(10)
        .with_on_change(|event| println!("event: {event:?}"));
    let mut view = WindowedRecordView::new(Squares { num_rows: 1_000_000 }, CsvCodec, options)
        .expect("valid schema");

    view.set_visible_range(0, 40);
    println!("before process_ready: {:?}", view.cell_value(12, "square"));
    view.process_ready();
    println!("after process_ready: {:?}", view.cell_value(12, "square"));

    // Jump far away: the first page is evicted, new pages are requested.
    view.set_visible_range(654_321, 654_361);
    view.process_ready();
    println!("row 12: {:?}", view.cell_value(12, "square"));
    println!("row 654330: {:?}", view.cell_value(654_330, "square"));
    println!("stats: {:?}", view.stats());
}
