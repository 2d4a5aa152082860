//! CSV export of a ticker's closes alongside its moving averages.

use anyhow::{Context, Result};
use stockcast_core::domain::TickerSeries;
use stockcast_core::indicators::MovingAverages;

/// Columns: date, close, ma50, ma200. Positions without enough history are
/// written as empty cells.
pub fn export_series_csv(series: &TickerSeries, ma: &MovingAverages) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["date", "close", "ma50", "ma200"])?;

    for (i, point) in series.points.iter().enumerate() {
        wtr.write_record([
            &point.date,
            &point.close.to_string(),
            &format_cell(ma.ma50.get(i).copied().flatten()),
            &format_cell(ma.ma200.get(i).copied().flatten()),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

fn format_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcast_core::domain::PricePoint;

    fn series(n: usize) -> TickerSeries {
        TickerSeries {
            symbol: "tcs".into(),
            points: (1..=n)
                .map(|i| PricePoint::new(format!("2024-01-{i:02}"), i as f64))
                .collect(),
            diagnostics: vec![],
            source_hash: String::new(),
        }
    }

    #[test]
    fn header_and_empty_cells() {
        let s = series(2);
        let ma = MovingAverages::from_series(&s);
        let csv = export_series_csv(&s, &ma).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "date,close,ma50,ma200");
        assert_eq!(lines[1], "2024-01-01,1,,");
        assert_eq!(lines[2], "2024-01-02,2,,");
    }

    #[test]
    fn ma50_appears_from_row_51() {
        let s = TickerSeries {
            points: (1..=51)
                .map(|i| PricePoint::new(format!("d{i}"), i as f64))
                .collect(),
            ..series(0)
        };
        let ma = MovingAverages::from_series(&s);
        let csv = export_series_csv(&s, &ma).unwrap();
        let last = csv.lines().last().unwrap();
        assert_eq!(last, "d51,51,25.5000,");
    }

    #[test]
    fn empty_series_is_header_only() {
        let s = series(0);
        let csv = export_series_csv(&s, &MovingAverages::from_series(&s)).unwrap();
        assert_eq!(csv, "date,close,ma50,ma200\n");
    }
}
