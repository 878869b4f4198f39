//! Smooth minification regression test
//!
//! ボックスフィルタによる縮小をテスト。
//! 手計算の値、定数画像の保存、決定性、マルチバンドの一致を検証。

use pushbroom_core::Raster;
use pushbroom_scale::{BoxGeometry, Scaler, SmoothMinifier, scale_raster};
use pushbroom_test::{
    RegParams, checker_raster, constant_raster, gradient_raster, ramp_raster,
};

/// Straightforward box average over the whole image, clamping every
/// coordinate, used as an independent reference for the streaming code.
fn reference_box(src: &Raster, dest_w: u32, dest_h: u32) -> Raster {
    let g = BoxGeometry::new(src.width(), src.height(), dest_w, dest_h).unwrap();
    let bands = src.bands();
    let max_x = src.width() as i64 - 1;
    let max_y = src.height() as i64 - 1;
    let mut out = Raster::new(dest_w, dest_h, bands).unwrap();

    for j in 0..dest_h {
        let (top, bottom) = g.row(j as usize);
        for i in 0..dest_w {
            let (left, right) = g.column(i as usize);
            for b in 0..bands {
                let mut vsum = 0u64;
                for y in top..=bottom {
                    let sy = y.clamp(0, max_y) as u32;
                    let mut hsum = 0u64;
                    for x in left..=right {
                        let sx = x.clamp(0, max_x) as u32;
                        hsum += u64::from(src.sample(sx, sy, b).unwrap());
                    }
                    // the horizontal average is truncated before summing rows
                    vsum += hsum / u64::from(g.box_width());
                }
                let v = (vsum / u64::from(g.box_height())) as u8;
                out.set_sample(i, j, b, v).unwrap();
            }
        }
    }
    out
}

#[test]
fn smooth_minify_reg() {
    let mut rp = RegParams::new("smooth_minify");

    // --- Test 1: 4x4 ramp to 2x2, hand computed ---
    let ramp = ramp_raster(4, 4, 1).expect("ramp");
    let small = scale_raster(&ramp, 2, 2, true).expect("scale ramp");
    let expected = Raster::from_vec(2, 2, 1, vec![0, 1, 6, 7]).unwrap();
    rp.compare_raster(&expected, &small);
    eprintln!("  ramp 4x4 -> 2x2: {:?}", small.data());

    // --- Test 2: repeated runs are bit-identical ---
    let again = scale_raster(&ramp, 2, 2, true).expect("scale ramp again");
    rp.compare_strings(small.data(), again.data());

    // --- Test 3: constant images stay constant ---
    for (w, h, bands, dw, dh, c) in [
        (17u32, 13u32, 1u32, 4u32, 3u32, 0u8),
        (64, 48, 3, 10, 7, 255),
        (9, 9, 4, 9, 1, 91),
        (100, 3, 2, 1, 1, 13),
    ] {
        let src = constant_raster(w, h, bands, c).expect("constant");
        let out = scale_raster(&src, dw, dh, true).expect("scale constant");
        let all_c = out.data().iter().all(|&s| s == c);
        rp.compare_values(1.0, if all_c { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values((dw * dh * bands) as f64, out.data().len() as f64, 0.0);
    }

    // --- Test 4: streaming output matches whole-image reference ---
    for (w, h, bands, dw, dh) in [
        (31u32, 17u32, 1u32, 7u32, 5u32),
        (40, 40, 3, 13, 11),
        (25, 60, 4, 6, 9),
        (8, 8, 1, 8, 3),
    ] {
        let src = gradient_raster(w, h, bands).expect("gradient");
        let out = scale_raster(&src, dw, dh, true).expect("scale gradient");
        let reference = reference_box(&src, dw, dh);
        rp.compare_raster(&reference, &out);
        eprintln!("  gradient {}x{}x{} -> {}x{}: ok", w, h, bands, dw, dh);
    }

    // --- Test 5: checkerboard averages to mid gray ---
    let checker = checker_raster(16, 16, 1, 1).expect("checker");
    let gray = scale_raster(&checker, 8, 8, true).expect("scale checker");
    // interior 2x2 boxes hold two black and two white samples: (0 + 255) / 2
    let interior = gray.sample(4, 4, 0).unwrap();
    rp.compare_values(127.0, interior as f64, 0.0);

    // --- Test 6: push-level protocol ---
    let mut m = SmoothMinifier::new(4, 4, 1, 2, 2).expect("minifier");
    let mut done = Vec::new();
    for y in 0..4 {
        done.push(m.push_scanline(ramp.data(), y * 4).expect("push"));
    }
    rp.compare_strings(
        &done.iter().map(|&d| d as u8).collect::<Vec<_>>(),
        &[0, 0, 1, 1],
    );

    assert!(rp.cleanup(), "smooth_minify regression test failed");
}
