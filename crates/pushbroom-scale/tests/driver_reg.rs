//! Scanline driver regression test
//!
//! バッファとストリームからの駆動、読み込みエラーの伝播をテスト。

use pushbroom_scale::{
    BufferSource, ScaleError, ScaleResult, Scaler, ScanlineSource, StreamSource, drive,
    scale_stream, select,
};
use pushbroom_test::{RegParams, gradient_raster};
use std::io::{self, Cursor, Read};

/// Reader that yields `ok` bytes and then fails.
struct BrokenDecoder {
    ok: usize,
}

impl Read for BrokenDecoder {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.ok == 0 {
            return Err(io::Error::other("corrupt scanline"));
        }
        let n = buf.len().min(self.ok);
        self.ok -= n;
        Ok(n)
    }
}

/// Records which rows the driver asks for.
struct CountingSource<'a> {
    inner: BufferSource<'a>,
    rows: Vec<u32>,
}

impl ScanlineSource for CountingSource<'_> {
    fn scanline(&mut self, y: u32, row_len: usize) -> ScaleResult<(&[u8], usize)> {
        self.rows.push(y);
        self.inner.scanline(y, row_len)
    }
}

#[test]
fn driver_reg() {
    let mut rp = RegParams::new("driver");

    let src = gradient_raster(50, 30, 3).expect("gradient");

    // --- buffer and stream sources give identical results ---
    for (dw, dh, smooth) in [(10u32, 6u32, true), (10, 6, false), (120, 45, true)] {
        let from_buffer = drive(
            &mut BufferSource::new(src.data()),
            select(50, 30, 3, dw, dh, smooth).expect("select"),
        )
        .expect("drive buffer");
        let from_stream = scale_stream(Cursor::new(src.data()), 50, 30, 3, dw, dh, smooth)
            .expect("drive stream");
        rp.compare_raster(&from_buffer, &from_stream);
        rp.compare_values(
            (dw * dh * 3) as f64,
            from_stream.data().len() as f64,
            0.0,
        );
    }

    // --- the driver requests every row exactly once, in order ---
    let mut counting = CountingSource {
        inner: BufferSource::new(src.data()),
        rows: Vec::new(),
    };
    let scaler = select(50, 30, 3, 10, 6, true).expect("select");
    rp.compare_values(0.0, scaler.source_rows_pushed() as f64, 0.0);
    drive(&mut counting, scaler).expect("drive counting");
    rp.compare_values(30.0, counting.rows.len() as f64, 0.0);
    let in_order = counting.rows.iter().copied().eq(0..30);
    rp.compare_values(1.0, if in_order { 1.0 } else { 0.0 }, 0.0);

    // --- a stream failure aborts the resize ---
    let row_len = 50 * 3;
    let err = drive(
        &mut StreamSource::new(BrokenDecoder { ok: row_len * 7 }),
        select(50, 30, 3, 10, 6, true).expect("select"),
    )
    .unwrap_err();
    let is_read_error = matches!(err, ScaleError::SourceReadError(_));
    rp.compare_values(1.0, if is_read_error { 1.0 } else { 0.0 }, 0.0);
    eprintln!("  broken decoder: {}", err);

    assert!(rp.cleanup(), "driver regression test failed");
}
